//! Settings loader for `<config dir>/qtech-site/config.toml`

use std::path::{Path, PathBuf};

use qtech_core::prelude::*;
use url::Url;

use super::types::{Settings, TransportKind};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "qtech-site";

/// Default settings file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings, falling back to defaults.
///
/// A missing file is normal. A file that cannot be read or parsed is logged
/// and ignored.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from a path the user named explicitly.
///
/// Unlike [`load_settings`], every problem is an error.
pub fn load_settings_strict(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::ConfigNotFound {
            path: config_path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {:?}", config_path))?;
    let settings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {:?}", config_path))?;
    info!("Loaded settings from {:?}", config_path);
    Ok(settings)
}

/// Check cross-field constraints that serde cannot express
pub fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.contact.transport == TransportKind::Http {
        let endpoint = settings.contact.endpoint.as_deref().ok_or_else(|| {
            Error::config_invalid("contact.transport = \"http\" requires contact.endpoint")
        })?;
        parse_endpoint(endpoint)?;
    }
    Ok(())
}

/// Parse a mail-dispatch endpoint. Only http(s) URLs are accepted.
pub fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| Error::config_invalid(format!("invalid endpoint {:?}: {}", endpoint, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::config_invalid(format!(
            "endpoint scheme must be http or https, got {:?}",
            scheme
        ))),
    }
}

/// Write a commented default config file if none exists
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let default_content = r#"# Q Tech Digital site configuration

[ui]
# Page shown at startup: home, portfolio, contact or about
start_page = "home"
# Icon set: "unicode" or "nerd_fonts"
icons = "unicode"

[contact]
# "simulated" waits and acknowledges; "http" posts JSON to `endpoint`
transport = "simulated"
# endpoint = "https://example.com/sendEmail"
simulated_delay_ms = 1500
request_timeout_ms = 10000

[links]
# Browser command for project links (empty = system default)
browser = ""
"#;

    std::fs::write(config_path, default_content)?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}
