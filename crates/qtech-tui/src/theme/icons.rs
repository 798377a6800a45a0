//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` — safe characters that work in all terminals
//! - `IconMode::NerdFonts` — rich Nerd Font glyphs (requires Nerd Font installed)

use qtech_app::config::IconMode;
use qtech_core::NavIcon;

/// Braille spinner frames shown while a submission is in flight
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks per spinner frame (50ms ticks)
const TICKS_PER_FRAME: u64 = 2;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a navigation item
    pub fn nav(&self, icon: NavIcon) -> &'static str {
        match (self.mode, icon) {
            (IconMode::NerdFonts, NavIcon::Home) => "\u{f015}", // nf-fa-home
            (IconMode::NerdFonts, NavIcon::Code) => "\u{f121}", // nf-fa-code
            (IconMode::NerdFonts, NavIcon::Phone) => "\u{f095}", // nf-fa-phone
            (IconMode::NerdFonts, NavIcon::Briefcase) => "\u{f0b1}", // nf-fa-briefcase
            (IconMode::Unicode, NavIcon::Home) => "\u{2302}",  // ⌂
            (IconMode::Unicode, NavIcon::Code) => "</>",
            (IconMode::Unicode, NavIcon::Phone) => "\u{260e}", // ☎
            (IconMode::Unicode, NavIcon::Briefcase) => "\u{25a3}", // ▣
        }
    }

    /// Marker for the selected portfolio entry
    pub fn selected(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{25b6}",   // ▶
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn external_link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f08e}", // nf-fa-external_link
            IconMode::Unicode => "\u{2197}",   // ↗
        }
    }

    /// Spinner frame for the given tick
    pub fn spinner(&self, tick: u64) -> &'static str {
        let index = (tick / TICKS_PER_FRAME) as usize % SPINNER_FRAMES.len();
        SPINNER_FRAMES[index]
    }
}
