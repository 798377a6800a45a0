//! Home page: headline, introduction and the service cards

use qtech_core::content::{Card, HOME_HEADLINE, HOME_INTRO, HOME_SERVICES};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::text::emphasis_line;
use crate::theme::styles;

const CARD_HEIGHT: u16 = 7;
const MIN_HEIGHT_FOR_CARDS: u16 = 12;

pub struct HomeView;

impl Widget for HomeView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let intro = Paragraph::new(vec![
            emphasis_line(HOME_HEADLINE, styles::headline()),
            Line::default(),
            emphasis_line(HOME_INTRO, styles::text_primary()),
        ])
        .wrap(Wrap { trim: true });

        // Cards only when there is room left for the introduction
        let cards_height = if inner.height >= MIN_HEIGHT_FOR_CARDS {
            CARD_HEIGHT
        } else {
            0
        };
        let [intro_area, cards_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(cards_height)]).areas(inner);

        intro.render(intro_area, buf);

        let card_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(cards_area);
        for (card, card_area) in HOME_SERVICES.iter().zip(card_areas.iter()) {
            render_card(card, *card_area, buf);
        }
    }
}

fn render_card(card: &Card, area: Rect, buf: &mut Buffer) {
    if area.height < 3 {
        return;
    }

    let block = styles::glass_block(false).title(Span::styled(card.title, styles::brand_bold()));
    Paragraph::new(Span::styled(card.body, styles::text_secondary()))
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, buf);
}
