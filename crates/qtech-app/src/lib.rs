//! qtech-app - Application state and orchestration for the Q Tech Digital site
//!
//! This crate implements the TEA (The Elm Architecture) pattern: the
//! [`AppState`] model, the [`Message`] enum, and [`handler::update`]. It also
//! owns per-view state (portfolio selection, the contact form state machine),
//! the contact submission transport, settings loading and action dispatch.
//!
//! Nothing here depends on the terminal library; keys arrive as
//! [`input_key::InputKey`].

pub mod actions;
pub mod config;
pub mod contact;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod portfolio;
pub mod process;
pub mod signals;
pub mod state;
pub mod transport;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, ViewId};
pub use transport::{SubmissionTransport, Transport};
