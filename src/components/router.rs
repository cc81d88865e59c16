//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native hashchange
//! events: the URL hash is the single source of truth, so browser
//! back/forward buttons and in-app `AppRoute::push` both land in the same
//! listener.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::editor::{DataPackEditPage, ProjectEditPage};
use crate::components::home::HomePage;
use crate::components::test_page::TestPage;
use crate::models::AppRoute;

/// Main application router.
///
/// Routes:
/// - `#/` → project list
/// - `#/project/{name}` → single-project editor
/// - `#/project/datapack/{name}/{path…}` → data-pack sub-resource editor
/// - `#/test` → diagnostic view
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from the current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up the hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    view! {
        {move || match route_memo.get() {
            AppRoute::Home => view! { <HomePage /> }.into_any(),
            AppRoute::ProjectEdit { name } => view! { <ProjectEditPage name=name /> }.into_any(),
            AppRoute::DataPackEdit { name, path } => {
                view! { <DataPackEditPage name=name path=path /> }.into_any()
            }
            AppRoute::Test => view! { <TestPage /> }.into_any(),
        }}
    }
}
