//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{contact, keys::handle_key, navigation, portfolio, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.advance_tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate { route } => navigation::handle_navigate(state, route),
        Message::NavNext => {
            state.nav_next();
            UpdateResult::none()
        }
        Message::NavPrevious => {
            state.nav_previous();
            UpdateResult::none()
        }
        Message::NavActivate => navigation::handle_nav_activate(state),
        Message::FocusBody => navigation::handle_focus_body(state),
        Message::FocusNav => navigation::handle_focus_nav(state),

        // ─────────────────────────────────────────────────────────
        // Portfolio Messages
        // ─────────────────────────────────────────────────────────
        Message::PortfolioCursorUp => portfolio::handle_cursor_up(state),
        Message::PortfolioCursorDown => portfolio::handle_cursor_down(state),
        Message::PortfolioSelectAtCursor => portfolio::handle_select_at_cursor(state),
        Message::SelectProject { id } => portfolio::handle_select_project(state, &id),
        Message::OpenProjectLink { link } => portfolio::handle_open_link(state, link),
        Message::LinkOpened { url } => portfolio::handle_link_opened(state, url),
        Message::LinkOpenFailed { url, error } => {
            portfolio::handle_link_open_failed(state, url, error)
        }

        // ─────────────────────────────────────────────────────────
        // Contact Messages
        // ─────────────────────────────────────────────────────────
        Message::ContactFocusNext => contact::handle_focus_next(state),
        Message::ContactFocusPrevious => contact::handle_focus_previous(state),
        Message::ContactInput { field, value } => contact::handle_input(state, field, value),
        Message::ContactSubmit => contact::handle_submit(state),
        Message::ContactSubmissionFinished { view_id, result } => {
            contact::handle_submission_finished(state, view_id, result)
        }
        Message::ContactStartOver => contact::handle_start_over(state),
    }
}
