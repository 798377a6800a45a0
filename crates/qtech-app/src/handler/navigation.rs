//! Router and navigation bar handlers

use qtech_core::Route;
use tracing::debug;

use crate::state::{AppState, Focus};

use super::UpdateResult;

/// Route to a destination; same-route navigation keeps the mounted view
pub fn handle_navigate(state: &mut AppState, route: Route) -> UpdateResult {
    let from = state.route.id().to_string();
    if state.navigate(route) {
        debug!(
            "Navigated {} -> {} ({})",
            from,
            state.route.id(),
            state.view_id()
        );
    }
    UpdateResult::none()
}

pub fn handle_nav_activate(state: &mut AppState) -> UpdateResult {
    let route = Route::Page(state.nav_target());
    handle_navigate(state, route)
}

/// Move focus into the body, if the mounted view takes input
pub fn handle_focus_body(state: &mut AppState) -> UpdateResult {
    if state.view().is_interactive() {
        state.focus = Focus::Body;
    }
    UpdateResult::none()
}

pub fn handle_focus_nav(state: &mut AppState) -> UpdateResult {
    state.focus = Focus::Nav;
    UpdateResult::none()
}
