//! Navigation bar: one control per navigation item

use qtech_core::{Page, NAV_ITEMS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

pub struct NavBar {
    /// Page whose item is rendered active; `None` on the not-found page
    current: Option<Page>,
    cursor: usize,
    focused: bool,
    icons: IconSet,
}

impl NavBar {
    pub fn new(current: Option<Page>, icons: IconSet) -> Self {
        Self {
            current,
            cursor: 0,
            focused: false,
            icons,
        }
    }

    /// Show the keyboard cursor (only while the bar has focus)
    pub fn cursor(mut self, cursor: usize, focused: bool) -> Self {
        self.cursor = cursor;
        self.focused = focused;
        self
    }

    fn items_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];

        for (index, item) in NAV_ITEMS.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }

            let mut style = if self.current == Some(item.page) {
                styles::nav_active(item.color, item.active_bg)
            } else {
                styles::nav_inactive()
            };
            if self.focused && index == self.cursor {
                style = styles::nav_cursor(style);
            }

            spans.push(Span::styled(
                format!(
                    " {} {} {} ",
                    index + 1,
                    self.icons.nav(item.icon),
                    item.name
                ),
                style,
            ));
        }

        Line::from(spans)
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(self.items_line()).render(inner, buf);
    }
}
