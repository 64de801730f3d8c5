//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name registered with Fission. Scopes the app storage path.
pub const APP_NAME: &str = "pwa-generator";

/// Creator (Fission username) that owns the app namespace.
pub const APP_CREATOR: &str = "bgins";

/// Human readable title shown in the header.
pub const APP_TITLE: &str = "PWA Manifest Generator";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Storage Configuration
// =============================================================================

/// Extension of the per-manifest JSON file (`<short_name>/<short_name>.json`).
pub const MANIFEST_EXTENSION: &str = "json";

/// Name of the global object the webnative SDK is exposed as.
pub const WEBNATIVE_GLOBAL: &str = "webnative";

/// Username reported by the offline session in `mock` builds.
#[cfg(feature = "mock")]
pub const MOCK_USERNAME: &str = "guest";

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: log::LevelFilter = if cfg!(debug_assertions) {
    log::LevelFilter::Debug
} else {
    log::LevelFilter::Info
};

// =============================================================================
// UI Configuration
// =============================================================================

/// DOM id of the JSON preview block targeted by the copy button.
pub const PREVIEW_ELEMENT_ID: &str = "manifest-json";

/// How long a status message stays visible, in milliseconds.
pub const STATUS_TIMEOUT_MS: u32 = 4000;

/// Allowed values for the `display` member.
pub const DISPLAY_MODES: &[&str] = &["fullscreen", "standalone", "minimal-ui", "browser"];

/// Allowed values for the `orientation` member.
pub const ORIENTATIONS: &[&str] = &[
    "any",
    "natural",
    "landscape",
    "landscape-primary",
    "landscape-secondary",
    "portrait",
    "portrait-primary",
    "portrait-secondary",
];

/// Field values used for a fresh draft.
pub mod draft_defaults {
    pub const START_URL: &str = "/";
    pub const DISPLAY: &str = "standalone";
    pub const THEME_COLOR: &str = "#ffffff";
    pub const BACKGROUND_COLOR: &str = "#ffffff";
}

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
