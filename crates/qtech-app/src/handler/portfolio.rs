//! Portfolio handlers: cursor, selection and outbound links

use qtech_core::ProjectLink;
use tracing::{debug, info, warn};

use crate::state::{AppState, NoticeLevel};

use super::{UpdateAction, UpdateResult};

pub fn handle_cursor_up(state: &mut AppState) -> UpdateResult {
    if let Some(portfolio) = state.portfolio_mut() {
        portfolio.cursor_up();
    }
    UpdateResult::none()
}

pub fn handle_cursor_down(state: &mut AppState) -> UpdateResult {
    if let Some(portfolio) = state.portfolio_mut() {
        portfolio.cursor_down();
    }
    UpdateResult::none()
}

pub fn handle_select_at_cursor(state: &mut AppState) -> UpdateResult {
    let id = state
        .portfolio()
        .and_then(|portfolio| portfolio.project_at_cursor())
        .map(|project| project.id);

    match id {
        Some(id) => handle_select_project(state, id),
        None => UpdateResult::none(),
    }
}

pub fn handle_select_project(state: &mut AppState, id: &str) -> UpdateResult {
    if let Some(portfolio) = state.portfolio_mut() {
        if portfolio.select_project(id) {
            debug!("Selected project {}", id);
        }
    }
    UpdateResult::none()
}

/// Open the selected project's preview or repository URL
pub fn handle_open_link(state: &mut AppState, link: ProjectLink) -> UpdateResult {
    let Some(project) = state.portfolio().and_then(|p| p.selected()) else {
        return UpdateResult::none();
    };

    UpdateResult::action(UpdateAction::OpenUrl {
        url: project.link(link).to_string(),
        browser: state.settings.links.browser.clone(),
    })
}

pub fn handle_link_opened(state: &mut AppState, url: String) -> UpdateResult {
    info!("Opened {}", url);
    state.set_notice(format!("Opened {}", url), NoticeLevel::Info);
    UpdateResult::none()
}

pub fn handle_link_open_failed(state: &mut AppState, url: String, error: String) -> UpdateResult {
    warn!("Failed to open {}: {}", url, error);
    state.set_notice(format!("Could not open {}", url), NoticeLevel::Error);
    UpdateResult::none()
}
