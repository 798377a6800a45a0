//! qtech-tui - Terminal UI for the Q Tech Digital site
//!
//! This crate provides the View layer of the TEA pattern:
//! - [`render::view`] draws the shell and the mounted page
//! - [`widgets`] holds one widget per page plus the shared chrome
//! - [`run`] owns the terminal and the event loop

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
