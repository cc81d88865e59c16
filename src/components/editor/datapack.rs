//! Data-pack sub-resource editor page.
//!
//! Shows the directory listing at the route's sub-path. Folder rows
//! navigate one level deeper by pushing a new route, so every listing
//! state is a deep-linkable URL.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::editor::FileList;
use crate::components::icons as ic;
use crate::models::{AppRoute, DirEntry};

stylance::import_crate_style!(css, "src/components/editor/editor.module.css");

#[component]
pub fn DataPackEditPage(name: String, path: Vec<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let route = AppRoute::DataPackEdit {
        name: name.clone(),
        path: path.clone(),
    };
    let at_root = path.is_empty();
    let breadcrumb = format!("/{}", path.join("/"));

    let listing = {
        let name = name.clone();
        let sub_path = path.join("/");
        LocalResource::new(move || {
            let name = name.clone();
            let sub_path = sub_path.clone();
            async move { ctx.project_dir(&name, &sub_path).await }
        })
    };

    let up_route = route.parent_dir();
    let go_up = move |_: leptos::ev::MouseEvent| {
        up_route.push();
    };

    let project_name = name.clone();
    let back_to_project = move |_: leptos::ev::MouseEvent| {
        AppRoute::ProjectEdit {
            name: project_name.clone(),
        }
        .push();
    };

    let open_route = route.clone();
    let on_open = Callback::new(move |entry: DirEntry| {
        if entry.is_folder() {
            open_route.enter_dir(entry.name()).push();
        }
    });

    view! {
        <div class=css::page>
            <header class=css::header>
                <button class=css::navBtn on:click=back_to_project>
                    <Icon icon=ic::CHEVRON_LEFT />
                    {name.clone()}
                </button>
                <span class=css::breadcrumb>{breadcrumb}</span>
                {(!at_root).then(|| view! {
                    <button class=css::navBtn on:click=go_up>"Up"</button>
                })}
            </header>

            <Suspense fallback=move || view! { <p class=css::loading>"Loading listing..."</p> }>
                {move || listing.get().map(|result| match result {
                    Ok(entries) => view! {
                        <FileList entries=entries on_open=on_open />
                    }.into_any(),
                    Err(err) => view! {
                        <p class=css::error>{format!("Failed to load directory: {}", err)}</p>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}
