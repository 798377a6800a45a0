//! Contact form handlers

use tracing::{debug, info, warn};

use crate::contact::FormField;
use crate::state::{AppState, ViewId};
use crate::transport::SubmissionAck;

use super::{UpdateAction, UpdateResult};

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    if let Some(contact) = state.contact_mut() {
        contact.focus_next();
    }
    UpdateResult::none()
}

pub fn handle_focus_previous(state: &mut AppState) -> UpdateResult {
    if let Some(contact) = state.contact_mut() {
        contact.focus_previous();
    }
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, field: FormField, value: String) -> UpdateResult {
    if let Some(contact) = state.contact_mut() {
        contact.update_field(field, value);
    }
    UpdateResult::none()
}

/// Validate and hand the payload to the transport
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let view_id = state.view_id();
    let Some(contact) = state.contact_mut() else {
        return UpdateResult::none();
    };

    match contact.begin_submit() {
        Some(payload) => {
            info!("Submitting contact request ({})", view_id);
            UpdateResult::action(UpdateAction::SubmitContact { view_id, payload })
        }
        None => {
            if let Some(err) = contact.validation {
                debug!("Contact form rejected: {}", err);
            }
            UpdateResult::none()
        }
    }
}

/// Apply a transport result, unless its view has been unmounted
pub fn handle_submission_finished(
    state: &mut AppState,
    view_id: ViewId,
    result: Result<SubmissionAck, String>,
) -> UpdateResult {
    let Some(contact) = state.contact_for(view_id) else {
        debug!("Dropping stale submission result for {}", view_id);
        return UpdateResult::none();
    };

    match &result {
        Ok(_) => info!("Contact request submitted ({})", view_id),
        Err(e) => warn!("Contact request failed ({}): {}", view_id, e),
    }
    contact.finish_submit(result);
    UpdateResult::none()
}

pub fn handle_start_over(state: &mut AppState) -> UpdateResult {
    if let Some(contact) = state.contact_mut() {
        contact.start_over();
    }
    UpdateResult::none()
}
