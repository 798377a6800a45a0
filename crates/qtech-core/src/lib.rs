//! # qtech-core - Core Domain Types
//!
//! Foundation crate for the Q Tech Digital site. Provides the static domain
//! data, routing types, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Routing (`types`)
//! - [`Page`] - The four top-level pages
//! - [`Route`] - Router destination, including the not-found fallback
//! - [`NavigationItem`], [`NAV_ITEMS`] - Fixed navigation destinations
//!
//! ### Catalog (`catalog`)
//! - [`ProjectRecord`], [`CATALOG`] - The read-only portfolio
//!
//! ### Content (`content`)
//! - Copy for the header, footer and static pages
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use qtech_core::prelude::*;
//! ```

pub mod catalog;
pub mod content;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all workspace crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{find_project, ProjectLink, ProjectRecord, CATALOG};
pub use error::{Error, Result, ResultExt};
pub use types::{nav_index, Accent, AppPhase, NavIcon, NavigationItem, Page, Route, NAV_ITEMS};
