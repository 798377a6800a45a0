//! Site header: company name and tagline

use qtech_core::content::{COMPANY_NAME, COMPANY_TAGLINE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

/// Persistent header rendered above every page
pub struct SiteHeader {
    icons: IconSet,
}

impl SiteHeader {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for SiteHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.nav(qtech_core::NavIcon::Code), styles::brand_bold()),
            Span::raw(" "),
            Span::styled(COMPANY_NAME, styles::brand_bold()),
        ]);
        let tagline = Line::from(vec![
            Span::raw("   "),
            Span::styled(COMPANY_TAGLINE, styles::text_secondary()),
        ]);

        Paragraph::new(vec![title, tagline]).render(inner, buf);
    }
}
