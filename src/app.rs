//! Root application module.
//!
//! Contains the main App component and the AppContext definition following
//! Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::ApiClient;
use crate::core::error::FetchError;
use crate::models::{DirEntry, Project};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Holds exactly one [`ApiClient`] for the lifetime of the app. The context
/// is created once in [`App`], provided at the root of the component tree,
/// and accessed from any child with `use_context::<AppContext>()` — views
/// never construct their own client.
///
/// Every accessor is a direct pass-through to the client: the result (or
/// failure) is returned unchanged, with no caching, no in-flight
/// deduplication, and no ordering beyond what the transport provides.
/// Concurrent calls are independent requests.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos stored value,
/// which is a cheap handle into the reactive ownership tree.
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient>,
}

impl AppContext {
    /// Creates the context with a client against the default service address.
    pub fn new() -> Self {
        Self::with_client(ApiClient::new())
    }

    /// Creates the context around a specific client (used to point the app
    /// at a non-default service).
    pub fn with_client(client: ApiClient) -> Self {
        Self {
            api: StoredValue::new(client),
        }
    }

    /// The shared client. Cloning is cheap; the clone still targets the
    /// same service with the same configuration.
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub async fn version_list(&self) -> Result<Vec<String>, FetchError> {
        self.api().version_list().await
    }

    pub async fn create_project(&self, project: &Project) -> Result<u16, FetchError> {
        self.api().create_project(project).await
    }

    pub async fn project_list(&self) -> Result<Vec<Project>, FetchError> {
        self.api().project_list().await
    }

    pub async fn download_project(&self, name: &str) -> Result<(), FetchError> {
        self.api().download_project(name).await
    }

    pub async fn delete_project(&self, name: &str) -> Result<u16, FetchError> {
        self.api().delete_project(name).await
    }

    pub async fn project_data(&self, name: &str) -> Result<Project, FetchError> {
        self.api().project_data(name).await
    }

    pub async fn project_dir(&self, name: &str, path: &str) -> Result<Vec<DirEntry>, FetchError> {
        self.api().project_dir(name, path).await
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component.
///
/// Creates and provides the global AppContext, wraps the app in an
/// ErrorBoundary, and renders the router.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="app-error">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        }>
            <AppRouter />
        </ErrorBoundary>
    }
}
