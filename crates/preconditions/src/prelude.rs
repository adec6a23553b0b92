//! Prelude module for convenient imports.
//!
//! `use tiny_preconditions::prelude::*;` brings in every check, both forms,
//! plus the error and message types they return.
//!
//! # Examples
//!
//! ```rust
//! use tiny_preconditions::prelude::*;
//!
//! fn rename(id: Option<&u64>, name: &str) -> PreconditionResult<()> {
//!     not_null("id", id)?;
//!     respects_value("name", name, |n| !n.trim().is_empty(), "must not be blank")?;
//!     Ok(())
//! }
//!
//! assert!(rename(Some(&7), "ops").is_ok());
//! assert!(rename(Some(&7), "  ").is_err());
//! ```

pub use crate::checks::{
    Pattern, in_range, in_range_or_else, matches, matches_or_else, no_null_values,
    no_null_values_or_else, not_empty, not_empty_or_else, not_null, not_null_or_else, respects,
    respects_or_else, respects_value, respects_value_or_else,
};
pub use crate::config::CatalogConfig;
pub use crate::error::{CatalogError, PreconditionError, PreconditionResult};
pub use crate::message::MessageKind;
