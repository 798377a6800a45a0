//! Color palette.

use qtech_core::Accent;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(15, 23, 42); // Page background
pub const CARD_BG: Color = Color::Rgb(30, 41, 59); // Cards and panels

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(71, 85, 105);
pub const BORDER_ACTIVE: Color = Color::Rgb(96, 165, 250);

// --- Brand ---
pub const BRAND: Color = Color::Rgb(96, 165, 250);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(34, 197, 94);
pub const STATUS_RED: Color = Color::Rgb(239, 68, 68);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);

// --- Navigation accents (foreground) ---
pub const ACCENT_BLUE: Color = Color::Rgb(96, 165, 250);
pub const ACCENT_ORANGE: Color = Color::Rgb(251, 146, 60);
pub const ACCENT_GREEN: Color = Color::Rgb(74, 222, 128);
pub const ACCENT_INDIGO: Color = Color::Rgb(129, 140, 248);

// --- Navigation accents (active background) ---
pub const ACCENT_BLUE_BG: Color = Color::Rgb(30, 58, 138);
pub const ACCENT_ORANGE_BG: Color = Color::Rgb(124, 45, 18);
pub const ACCENT_GREEN_BG: Color = Color::Rgb(20, 83, 45);
pub const ACCENT_INDIGO_BG: Color = Color::Rgb(49, 46, 129);

// --- Inputs ---
pub const INPUT_BG: Color = Color::Rgb(51, 65, 85);
pub const INPUT_DISABLED_BG: Color = Color::Rgb(38, 50, 68);

/// Foreground color for an accent token
pub fn accent_fg(accent: Accent) -> Color {
    match accent {
        Accent::Blue => ACCENT_BLUE,
        Accent::Orange => ACCENT_ORANGE,
        Accent::Green => ACCENT_GREEN,
        Accent::Indigo => ACCENT_INDIGO,
    }
}

/// Background color for an accent token
pub fn accent_bg(accent: Accent) -> Color {
    match accent {
        Accent::Blue => ACCENT_BLUE_BG,
        Accent::Orange => ACCENT_ORANGE_BG,
        Accent::Green => ACCENT_GREEN_BG,
        Accent::Indigo => ACCENT_INDIGO_BG,
    }
}
