//! File list component for the data-pack editor.
//!
//! Displays one directory listing exactly as the service returned it:
//! same order, placeholder slots included. A placeholder renders as an
//! inert row; interpreting it is not this layer's call.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::DirEntry;
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/editor/file_list.module.css");

fn entry_icon(entry: &DirEntry) -> IconData {
    match entry {
        DirEntry::Folder(_) => ic::FOLDER,
        DirEntry::File(node) if node.file_type == "function" => ic::FILE_TEXT,
        _ => ic::FILE,
    }
}

#[component]
pub fn FileList(entries: Vec<DirEntry>, on_open: Callback<DirEntry>) -> impl IntoView {
    // Keyed by listing position: names are not unique once placeholder
    // slots are in the sequence.
    let rows: Vec<(usize, DirEntry)> = entries.into_iter().enumerate().collect();

    view! {
        <div class=css::list role="grid" aria-label="Directory listing">
            <div class=css::listHeader role="row">
                <span class=css::headerIcon></span>
                <span class=css::headerName>"Name"</span>
                <span class=css::headerType>"Type"</span>
                <span class=css::headerDate>"Modified"</span>
                <span class=css::headerSize>"Size"</span>
            </div>
            <For
                each=move || rows.clone()
                key=|(index, _)| *index
                children=move |(_, entry)| view! { <FileRow entry=entry on_open=on_open /> }
            />
        </div>
    }
}

#[component]
fn FileRow(entry: DirEntry, on_open: Callback<DirEntry>) -> impl IntoView {
    if entry == DirEntry::Empty {
        return view! {
            <div class=css::placeholderRow role="row" aria-label="Empty slot">
                <span class=css::icon></span>
                <span class=css::name>"—"</span>
            </div>
        }
        .into_any();
    }

    let icon = entry_icon(&entry);
    let is_folder = entry.is_folder();
    let display_name = entry.display_name().to_string();
    let raw_name = entry.name().to_string();
    let size = format_size(entry.size());
    let datetime = entry.datetime().to_string();
    let file_type = match &entry {
        DirEntry::File(node) => node.file_type.clone(),
        DirEntry::Folder(_) => "folder".to_string(),
        DirEntry::Empty => String::new(),
    };

    let click_entry = entry.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        on_open.run(click_entry.clone());
    };

    let name_class = if is_folder {
        format!("{} {}", css::name, css::nameDir)
    } else {
        css::name.to_string()
    };
    let shows_alias = display_name != raw_name;

    view! {
        <div class=css::listItem role="row" tabindex="0" on:click=handle_click>
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>
                {display_name}
                {shows_alias.then(|| view! {
                    <span class=css::rawName>{format!(" ({})", raw_name)}</span>
                })}
            </span>
            <span class=css::itemType>{file_type}</span>
            <span class=css::itemDate>{datetime}</span>
            <span class=css::size>{size}</span>
            <span class=css::chevron aria-hidden="true">
                {is_folder.then(|| view! { <Icon icon=ic::CHEVRON_RIGHT /> })}
            </span>
        </div>
    }
    .into_any()
}
