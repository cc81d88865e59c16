//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - transport, decode, and save-as failures for API calls
//! - [`WorkspaceError`] - block-editor library interop failures
//!
//! Nothing here is retried or recovered locally: callers re-raise these
//! unchanged and the UI layer decides how to present them.

use std::fmt;

/// Failures surfaced by the API client.
///
/// Covers the full taxonomy a caller can observe: transport-level failures
/// (network, timeout, non-2xx status), decode failures, and save-as
/// plumbing failures on binary downloads.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create the HTTP request
    RequestCreationFailed,
    /// Network request failed (unreachable, CORS, aborted)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read the response body
    ResponseReadFailed,
    /// Response body does not match the expected shape
    DecodeError(String),
    /// Request timed out
    Timeout,
    /// Save-as interaction could not be triggered for a download
    SaveFailed,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::DecodeError(msg) => write!(f, "Unexpected response shape: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
            Self::SaveFailed => write!(f, "Failed to start the download"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Block-editor library interop failures.
#[derive(Debug, Clone)]
pub enum WorkspaceError {
    /// Browser window not available
    NoWindow,
    /// The block-editor library global is not loaded
    LibraryMissing,
    /// Workspace injection into the container failed
    InjectFailed(String),
    /// No workspace injected yet, or its block tree could not be read
    TreeUnavailable(String),
    /// Text generation from the block tree failed
    CodegenFailed(String),
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::LibraryMissing => write!(f, "Block editor library is not loaded"),
            Self::InjectFailed(msg) => write!(f, "Workspace injection failed: {}", msg),
            Self::TreeUnavailable(msg) => write!(f, "Workspace tree unavailable: {}", msg),
            Self::CodegenFailed(msg) => write!(f, "Code generation failed: {}", msg),
        }
    }
}

impl std::error::Error for WorkspaceError {}
