//! Main render/view function (View in TEA pattern)

use qtech_app::contact::SubmissionStatus;
use qtech_app::state::{ActiveView, AppState, Focus};
use qtech_core::content::current_year;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets;

/// Render the complete UI: header, navigation, the mounted body and footer.
///
/// Pure with respect to `state`; exactly one body widget is drawn per frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let icons = IconSet::new(state.settings.ui.icons);
    let areas = layout::create(area);

    frame.render_widget(widgets::SiteHeader::new(icons), areas.header);
    frame.render_widget(
        widgets::NavBar::new(state.current_page(), icons)
            .cursor(state.nav_cursor, state.focus == Focus::Nav),
        areas.nav,
    );

    let body_focused = state.focus == Focus::Body;
    match state.view() {
        ActiveView::Home => frame.render_widget(widgets::HomeView, areas.body),
        ActiveView::Portfolio(portfolio) => frame.render_widget(
            widgets::PortfolioView::new(portfolio, body_focused, icons),
            areas.body,
        ),
        ActiveView::Contact(contact) => frame.render_widget(
            widgets::ContactView::new(contact, body_focused, icons).tick(state.tick),
            areas.body,
        ),
        ActiveView::About => frame.render_widget(widgets::AboutView::new(icons), areas.body),
        ActiveView::NotFound(requested) => {
            frame.render_widget(widgets::NotFoundView::new(requested), areas.body)
        }
    }

    frame.render_widget(
        widgets::Footer::new(current_year(), key_hint(state), icons).notice(state.notice.as_ref()),
        areas.footer,
    );
}

/// Key hint for whatever currently has focus
pub fn key_hint(state: &AppState) -> &'static str {
    if state.focus == Focus::Nav {
        return "←/→ move · Enter open · 1-4 jump · Tab page · q quit";
    }

    match state.view() {
        ActiveView::Portfolio(_) => "↑/↓ move · Enter select · p preview · g repository · Esc menu",
        ActiveView::Contact(contact) => match contact.status {
            SubmissionStatus::Submitted => "Enter new inquiry · Esc menu",
            SubmissionStatus::Sending => "Sending... · Esc menu",
            SubmissionStatus::Idle | SubmissionStatus::Failed(_) => {
                "Tab next field · Ctrl+S submit · Esc menu"
            }
        },
        _ => "Esc menu",
    }
}
