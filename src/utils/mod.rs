//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch`] - Fetch API wrappers with timeout racing
//! - [`download`] - save-as plumbing for binary downloads
//! - [`dom`] - window/document access and console logging
//! - [`format`] - display formatting for listings

pub mod dom;
pub mod download;
pub mod fetch;
pub mod format;
