//! Single-project editor page.
//!
//! Loads the project record, injects the block workspace into its
//! container, and previews the text generated from the block tree.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_icons::Icon;
use serde_json::json;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::WORKSPACE_CONTAINER_ID;
use crate::core::{BlockEditor, BlocklyWorkspace};
use crate::models::{AppRoute, ProjectType};

stylance::import_crate_style!(css, "src/components/editor/editor.module.css");

#[component]
pub fn ProjectEditPage(name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let project = {
        let name = name.clone();
        LocalResource::new(move || {
            let name = name.clone();
            async move { ctx.project_data(&name).await }
        })
    };

    let workspace = StoredValue::new_local(Rc::new(BlocklyWorkspace::new()));
    let generated = RwSignal::new(None::<String>);
    let workspace_error = RwSignal::new(None::<String>);

    // Inject once the container is in the DOM.
    Effect::new(move |_| {
        if !BlocklyWorkspace::library_available() {
            workspace_error.set(Some("block editor library is not loaded".to_string()));
            return;
        }
        let ws = workspace.get_value();
        let options = json!({
            "trashcan": true,
            "scrollbars": true,
            "sounds": false,
        });
        if let Err(err) = ws.inject(WORKSPACE_CONTAINER_ID, &options) {
            workspace_error.set(Some(err.to_string()));
            return;
        }
        let listening = Rc::clone(&ws);
        let result = ws.on_change(Box::new(move || {
            // Regenerate the preview on every workspace edit.
            match listening.generate_code() {
                Ok(code) => generated.set(Some(code)),
                Err(err) => workspace_error.set(Some(err.to_string())),
            }
        }));
        if let Err(err) = result {
            workspace_error.set(Some(err.to_string()));
        }
    });

    let regenerate = move |_: leptos::ev::MouseEvent| {
        match workspace.get_value().generate_code() {
            Ok(code) => generated.set(Some(code)),
            Err(err) => workspace_error.set(Some(err.to_string())),
        }
    };

    let home = move |_: leptos::ev::MouseEvent| {
        AppRoute::Home.push();
    };

    let browse_name = name.clone();
    let browse_files = move |_: leptos::ev::MouseEvent| {
        AppRoute::DataPackEdit {
            name: browse_name.clone(),
            path: vec![],
        }
        .push();
    };

    view! {
        <div class=css::page>
            <header class=css::header>
                <button class=css::navBtn on:click=home>
                    <Icon icon=ic::CHEVRON_LEFT />
                    "Projects"
                </button>
                <span class=css::pageTitle>{name.clone()}</span>
            </header>

            <Suspense fallback=move || view! { <p class=css::loading>"Loading project..."</p> }>
                {move || project.get().map(|result| match result {
                    Ok(project) => view! {
                        <div class=css::meta>
                            <span>{project.project_type.label()}</span>
                            <span>{project.version.clone()}</span>
                            <span>{project.namespace.clone()}</span>
                            {project.description.clone().map(|d| view! {
                                <span class=css::metaDesc>{d}</span>
                            })}
                            {(project.project_type == ProjectType::DataPack).then(|| view! {
                                <button class=css::navBtn on:click=browse_files.clone()>
                                    <Icon icon=ic::FOLDER />
                                    "Browse files"
                                </button>
                            })}
                        </div>
                    }.into_any(),
                    Err(err) => view! {
                        <p class=css::error>{format!("Failed to load project: {}", err)}</p>
                    }.into_any(),
                })}
            </Suspense>

            <div id=WORKSPACE_CONTAINER_ID class=css::workspace></div>

            <div class=css::output>
                <button class=css::navBtn on:click=regenerate>"Generate"</button>
                {move || workspace_error.get().map(|err| view! {
                    <p class=css::error>{err}</p>
                })}
                {move || generated.get().map(|code| view! {
                    <pre class=css::code>{code}</pre>
                })}
            </div>
        </div>
    }
}
