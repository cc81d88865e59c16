//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "packbench";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base address of the studio service.
pub const API_BASE_URL: &str = "http://127.0.0.1:5142";

/// Request timeout in milliseconds, applied uniformly to every operation.
pub const REQUEST_TIMEOUT_MS: i32 = 5000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Block Editor Configuration
// =============================================================================

/// Name of the block-editor library global on `window`.
pub const BLOCK_LIBRARY_GLOBAL: &str = "Blockly";

/// Key of the code generator object on the library global.
pub const CODE_GENERATOR_KEY: &str = "McFunction";

/// DOM id of the container the workspace is injected into.
pub const WORKSPACE_CONTAINER_ID: &str = "block-workspace";
