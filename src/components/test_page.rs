//! Diagnostic view.
//!
//! Exercises the pieces that are awkward to observe from the regular
//! pages: service reachability, version schema compatibility, and the
//! block-editor capability surface.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::{API_BASE_URL, APP_NAME, APP_VERSION};
use crate::core::BlocklyWorkspace;
use crate::models::{AppRoute, VersionInfo};

stylance::import_crate_style!(css, "src/components/editor/editor.module.css");

/// A version entry as the service's format table would carry it; used to
/// confirm the schema decodes.
const SAMPLE_VERSION_INFO: &str = r#"{"version":"1.21","resource":34,"data":48}"#;

#[component]
pub fn TestPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let ping_result = RwSignal::new(None::<String>);

    let ping = move |_: leptos::ev::MouseEvent| {
        ping_result.set(Some("pinging...".to_string()));
        spawn_local(async move {
            let message = match ctx.version_list().await {
                Ok(versions) => format!("service ok, {} versions", versions.len()),
                Err(err) => format!("service unreachable: {}", err),
            };
            ping_result.set(Some(message));
        });
    };

    let schema_check = match serde_json::from_str::<VersionInfo>(SAMPLE_VERSION_INFO) {
        Ok(info) => format!(
            "version schema ok: {} (resource {}, data {})",
            info.version, info.resource, info.data
        ),
        Err(err) => format!("version schema broken: {}", err),
    };

    let editor_check = if BlocklyWorkspace::library_available() {
        "block editor library loaded"
    } else {
        "block editor library missing"
    };

    let home = move |_: leptos::ev::MouseEvent| {
        AppRoute::Home.push();
    };

    view! {
        <div class=css::page>
            <header class=css::header>
                <button class=css::navBtn on:click=home>"Back"</button>
                <span class=css::pageTitle>{format!("{} {} diagnostics", APP_NAME, APP_VERSION)}</span>
            </header>

            <ul class=css::diagnostics>
                <li>{format!("service address: {}", API_BASE_URL)}</li>
                <li>{schema_check}</li>
                <li>{editor_check}</li>
                <li>
                    <button class=css::navBtn on:click=ping>"Ping service"</button>
                    {move || ping_result.get()}
                </li>
            </ul>
        </div>
    }
}
