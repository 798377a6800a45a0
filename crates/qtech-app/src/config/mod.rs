//! Configuration file parsing
//!
//! Supports `<config dir>/qtech-site/config.toml` (or an explicit path)
//! with `[ui]`, `[contact]` and `[links]` sections.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, load_settings_strict, parse_endpoint,
    validate_settings,
};
pub use types::*;
