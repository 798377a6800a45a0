//! Fallback body for unknown routes

use qtech_core::content::NOT_FOUND;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct NotFoundView<'a> {
    /// The identifier that failed to resolve
    requested: &'a str,
}

impl<'a> NotFoundView<'a> {
    pub fn new(requested: &'a str) -> Self {
        Self { requested }
    }
}

impl Widget for NotFoundView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(NOT_FOUND, styles::status_red())),
        ];
        if !self.requested.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("No page named \"{}\"", self.requested),
                styles::text_muted(),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(styles::glass_block(false))
            .render(area, buf);
    }
}
