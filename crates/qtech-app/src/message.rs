//! Message types for the application (TEA pattern)

use qtech_core::{ProjectLink, Route};

use crate::contact::FormField;
use crate::input_key::InputKey;
use crate::state::ViewId;
use crate::transport::SubmissionAck;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner, notice expiry)
    Tick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Route to a page id or fallback
    Navigate { route: Route },

    /// Move the navigation cursor right
    NavNext,

    /// Move the navigation cursor left
    NavPrevious,

    /// Navigate to the item under the navigation cursor
    NavActivate,

    /// Move key focus into the mounted view
    FocusBody,

    /// Return key focus to the navigation bar
    FocusNav,

    // ─────────────────────────────────────────────────────────
    // Portfolio Messages
    // ─────────────────────────────────────────────────────────
    PortfolioCursorUp,
    PortfolioCursorDown,

    /// Select the project under the cursor
    PortfolioSelectAtCursor,

    /// Select a project by id
    SelectProject { id: String },

    /// Open one of the selected project's links
    OpenProjectLink { link: ProjectLink },

    /// The system opener accepted the URL
    LinkOpened { url: String },

    /// The system opener could not be started
    LinkOpenFailed { url: String, error: String },

    // ─────────────────────────────────────────────────────────
    // Contact Messages
    // ─────────────────────────────────────────────────────────
    ContactFocusNext,
    ContactFocusPrevious,

    /// Replace a field value
    ContactInput { field: FormField, value: String },

    /// Validate and send the form
    ContactSubmit,

    /// Transport finished for the contact view mounted as `view_id`
    ContactSubmissionFinished {
        view_id: ViewId,
        result: Result<SubmissionAck, String>,
    },

    /// Dismiss the success banner
    ContactStartOver,
}
