//! Screen layout definitions for the TUI
//!
//! The shell is a fixed stack: header, navigation bar, one body, footer.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: border + company name + tagline + border
pub const HEADER_HEIGHT: u16 = 4;
/// Navigation bar: border + items + border
pub const NAV_HEIGHT: u16 = 3;
/// Footer: copyright + key hint / notice
pub const FOOTER_HEIGHT: u16 = 2;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub nav: Rect,
    /// The mounted view
    pub body: Rect,
    pub footer: Rect,
}

/// Split the terminal into the shell's areas
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        nav: chunks[1],
        body: chunks[2],
        footer: chunks[3],
    }
}
