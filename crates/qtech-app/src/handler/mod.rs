//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focus and view
//! - `navigation`: Router and navigation bar handlers
//! - `portfolio`: Project selection and link handlers
//! - `contact`: Contact form handlers

pub(crate) mod contact;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod portfolio;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use crate::state::ViewId;
use crate::transport::ContactPayload;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Hand a validated payload to the submission transport.
    ///
    /// The completion is reported as `Message::ContactSubmissionFinished`
    /// carrying the same `view_id`.
    SubmitContact {
        view_id: ViewId,
        payload: ContactPayload,
    },

    /// Open a URL in the system browser.
    ///
    /// Fire-and-forget OS call. If `browser` is empty, the platform default
    /// opener is used.
    OpenUrl { url: String, browser: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
