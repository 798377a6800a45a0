//! Semantic style builders.

use qtech_core::Accent;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn headline() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn brand_bold() -> Style {
    Style::default()
        .fg(palette::BRAND)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Navigation ---

/// Active navigation item: the item's accent on its tinted background
pub fn nav_active(color: Accent, active_bg: Accent) -> Style {
    Style::default()
        .fg(palette::accent_fg(color))
        .bg(palette::accent_bg(active_bg))
        .add_modifier(Modifier::BOLD)
}

pub fn nav_inactive() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

/// Extra emphasis for the item under the keyboard cursor
pub fn nav_cursor(base: Style) -> Style {
    base.add_modifier(Modifier::UNDERLINED)
}

// --- Inputs ---
pub fn input(focused: bool, enabled: bool) -> Style {
    let bg = if enabled {
        palette::INPUT_BG
    } else {
        palette::INPUT_DISABLED_BG
    };
    let fg = match (enabled, focused) {
        (false, _) => palette::TEXT_MUTED,
        (true, true) => palette::TEXT_BRIGHT,
        (true, false) => palette::TEXT_PRIMARY,
    };
    Style::default().fg(fg).bg(bg)
}

pub fn button(focused: bool, enabled: bool) -> Style {
    let style = Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::ACCENT_GREEN_BG)
        .add_modifier(Modifier::BOLD);
    match (enabled, focused) {
        (false, _) => style.fg(palette::TEXT_MUTED).bg(palette::INPUT_DISABLED_BG),
        (true, true) => style.add_modifier(Modifier::REVERSED),
        (true, false) => style,
    }
}

// --- Blocks ---

/// Rounded container used for every panel
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}
