//! Centralized theme for the site.
//!
//! This module provides:
//! - `palette` — Raw color constants, including the navigation accents
//! - `styles` — Semantic style builder functions
//! - `icons` — Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
