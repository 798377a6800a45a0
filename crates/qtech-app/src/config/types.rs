//! Configuration types for the site
//!
//! Defines:
//! - `Settings` - Global application settings (config.toml)
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub contact: ContactSettings,

    #[serde(default)]
    pub links: LinkSettings,
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals, the default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    NerdFonts,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Page identifier to open at startup; unknown ids show the not-found page
    #[serde(default = "default_start_page")]
    pub start_page: String,

    #[serde(default)]
    pub icons: IconMode,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            start_page: default_start_page(),
            icons: IconMode::default(),
        }
    }
}

fn default_start_page() -> String {
    "home".to_string()
}

/// Which submission transport the contact form uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Wait for `simulated_delay_ms` and acknowledge, no I/O
    #[default]
    Simulated,
    /// POST the payload as JSON to `endpoint`
    Http,
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportKind::Simulated => write!(f, "simulated"),
            TransportKind::Http => write!(f, "http"),
        }
    }
}

/// Contact form settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactSettings {
    #[serde(default)]
    pub transport: TransportKind,

    /// Mail-dispatch endpoint, required when `transport = "http"`
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            transport: TransportKind::default(),
            endpoint: None,
            simulated_delay_ms: default_simulated_delay_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Simulated network latency for the stub transport
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1500;

fn default_simulated_delay_ms() -> u64 {
    DEFAULT_SIMULATED_DELAY_MS
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

/// Outbound link settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinkSettings {
    /// Browser command; empty uses the platform opener
    #[serde(default)]
    pub browser: String,
}
