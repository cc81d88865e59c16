//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`home`] - Project list and creation
//! - [`editor`] - Project and data-pack editor pages
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`test_page`] - Diagnostic view

pub mod editor;
pub mod home;
pub mod icons;
pub mod router;
pub mod test_page;

pub use router::AppRouter;
