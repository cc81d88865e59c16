//! Typed client for the studio service REST API.
//!
//! Each remote resource operation maps to one method: one request, one
//! typed response, no retries, no local recovery. Failures — network
//! errors, timeouts, non-2xx statuses, decode mismatches — propagate to
//! the caller as [`FetchError`] untouched. The client itself is stateless
//! apart from its base address and timeout, so one instance is safely
//! shared by every view for the lifetime of the app.

use crate::config::{API_BASE_URL, REQUEST_TIMEOUT_MS};
use crate::core::error::FetchError;
use crate::models::{DirEntry, Project};
use crate::utils::download::{filename_from_disposition, save_blob};
use crate::utils::fetch::{ensure_ok, http_request, read_blob, read_json};

/// Client for the studio service.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: i32,
}

impl ApiClient {
    /// Client against the default local service address.
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Client against a specific base address (no trailing slash).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }

    /// Override the uniform request timeout.
    pub fn with_timeout(mut self, timeout_ms: i32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Result<web_sys::Response, FetchError> {
        ensure_ok(http_request("GET", &self.url(path), None, self.timeout_ms).await?)
    }

    /// List the game versions the service can target.
    pub async fn version_list(&self) -> Result<Vec<String>, FetchError> {
        read_json(&self.get("/api/v1/version/list").await?).await
    }

    /// Create a new project. Success is the HTTP status alone; the
    /// response body is not decoded.
    pub async fn create_project(&self, project: &Project) -> Result<u16, FetchError> {
        let body =
            serde_json::to_string(project).map_err(|e| FetchError::DecodeError(e.to_string()))?;
        let response =
            http_request("POST", &self.url("/api/v1/project"), Some(&body), self.timeout_ms)
                .await?;
        Ok(ensure_ok(response)?.status())
    }

    /// List all known projects, in whatever order the service returns.
    pub async fn project_list(&self) -> Result<Vec<Project>, FetchError> {
        read_json(&self.get("/api/v1/project/list").await?).await
    }

    /// Download a project archive and hand it to the browser as a save-as.
    ///
    /// The filename comes from the response's `content-disposition` header
    /// when present, otherwise the project name is used. The transient
    /// object URL backing the save-as is released before returning.
    pub async fn download_project(&self, name: &str) -> Result<(), FetchError> {
        let response = self
            .get(&format!("/api/v1/project/download/{}", name))
            .await?;

        let disposition = response.headers().get("content-disposition").ok().flatten();
        let filename = filename_from_disposition(disposition.as_deref(), name);

        let blob = read_blob(&response).await?;
        save_blob(&blob, &filename)
    }

    /// Delete a project by name. Returns the service's numeric result code.
    pub async fn delete_project(&self, name: &str) -> Result<u16, FetchError> {
        let response = http_request(
            "DELETE",
            &self.url(&format!("/api/v1/project/delete/{}", name)),
            None,
            self.timeout_ms,
        )
        .await?;
        read_json(&ensure_ok(response)?).await
    }

    /// Fetch a single project record.
    pub async fn project_data(&self, name: &str) -> Result<Project, FetchError> {
        read_json(&self.get(&format!("/api/v1/project/data/{}", name)).await?)
            .await
    }

    /// List a directory inside a project archive.
    ///
    /// `path` is the slash-joined sub-path ("" for the archive root). The
    /// returned sequence is the service's verbatim: order kept, `null`
    /// slots preserved as [`DirEntry::Empty`].
    pub async fn project_dir(&self, name: &str, path: &str) -> Result<Vec<DirEntry>, FetchError> {
        read_json(
            &self
                .get(&format!("/api/v1/project/{}/{}", name, path))
                .await?,
        )
        .await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::with_base_url("http://127.0.0.1:5142");
        assert_eq!(
            client.url("/api/v1/version/list"),
            "http://127.0.0.1:5142/api/v1/version/list"
        );
    }

    #[test]
    fn test_default_configuration() {
        let client = ApiClient::new();
        assert_eq!(client.base_url(), API_BASE_URL);
        assert_eq!(client.timeout_ms, REQUEST_TIMEOUT_MS);
        assert_eq!(client.with_timeout(250).timeout_ms, 250);
    }
}
