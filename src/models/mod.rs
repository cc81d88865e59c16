//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Project`], [`ProjectType`] - content project records
//! - [`VersionInfo`] - game version format metadata
//! - [`DirEntry`], [`FileNode`], [`FolderNode`] - project directory listings
//! - [`AppRoute`] - hash-based navigation

mod node;
mod project;
mod route;
mod version;

pub use node::{DirEntry, FileNode, FolderNode};
pub use project::{Project, ProjectType};
pub use route::AppRoute;
pub use version::VersionInfo;
