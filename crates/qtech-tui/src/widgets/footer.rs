//! Footer: copyright line and a key hint or transient notice

use qtech_app::state::{Notice, NoticeLevel};
use qtech_core::content::footer_text;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

pub struct Footer<'a> {
    year: i32,
    hint: &'a str,
    notice: Option<&'a Notice>,
    icons: IconSet,
}

impl<'a> Footer<'a> {
    pub fn new(year: i32, hint: &'a str, icons: IconSet) -> Self {
        Self {
            year,
            hint,
            notice: None,
            icons,
        }
    }

    /// A notice replaces the key hint while it is active
    pub fn notice(mut self, notice: Option<&'a Notice>) -> Self {
        self.notice = notice;
        self
    }

    fn second_line(&self) -> Line<'a> {
        match self.notice {
            Some(notice) => {
                let (icon, style) = match notice.level {
                    NoticeLevel::Info => (self.icons.external_link(), styles::status_green()),
                    NoticeLevel::Error => (self.icons.alert(), styles::status_red()),
                };
                Line::from(vec![
                    Span::styled(icon, style),
                    Span::raw(" "),
                    Span::styled(notice.message.clone(), style),
                ])
            }
            None => Line::from(Span::styled(self.hint, styles::text_muted())),
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(footer_text(self.year), styles::text_secondary())),
            self.second_line(),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
