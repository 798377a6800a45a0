//! About page: mission statement and core values

use qtech_core::content::{ABOUT_HEADLINE, ABOUT_MISSION, ABOUT_VALUES, ABOUT_VALUES_TITLE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::text::emphasis_line;
use crate::theme::{icons::IconSet, styles};

pub struct AboutView {
    icons: IconSet,
}

impl AboutView {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for AboutView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(ABOUT_HEADLINE, styles::headline())),
            Line::default(),
            Line::from(Span::styled(ABOUT_MISSION, styles::text_primary())),
            Line::default(),
            Line::from(Span::styled(ABOUT_VALUES_TITLE, styles::brand_bold())),
        ];

        for value in ABOUT_VALUES {
            let mut line = emphasis_line(value, styles::text_secondary());
            line.spans.insert(
                0,
                Span::styled(format!(" {} ", self.icons.check()), styles::status_green()),
            );
            lines.push(line);
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(styles::glass_block(false))
            .render(area, buf);
    }
}
