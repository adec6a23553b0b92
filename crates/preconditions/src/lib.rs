//! # tiny-preconditions
//!
//! Argument precondition checks with localized failure messages.
//!
//! Each check replaces an `if ... { return Err(...) }` guard at the top of a
//! function. On failure it either returns a [`PreconditionError`] whose
//! message comes from the message catalogue, or hands the inputs to a
//! caller-supplied factory (the `_or_else` forms).
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use tiny_preconditions::prelude::*;
//!
//! fn register(
//!     name: Option<&str>,
//!     age: u32,
//!     roles: &[&str],
//!     settings: &HashMap<String, Option<String>>,
//! ) -> PreconditionResult<()> {
//!     not_null("name", name)?;
//!     in_range("age", Some(age), 18, 130)?;
//!     not_empty("roles", Some(roles))?;
//!     no_null_values("settings", settings)?;
//!     Ok(())
//! }
//!
//! assert!(register(Some("ada"), 36, &["admin"], &HashMap::new()).is_ok());
//!
//! let error = register(Some("ada"), 12, &["admin"], &HashMap::new()).unwrap_err();
//! assert_eq!(error.kind(), MessageKind::ShouldBeBetween);
//! assert_eq!(error.param("actual"), Some("12"));
//! ```
//!
//! ## Custom errors
//!
//! ```rust
//! use tiny_preconditions::checks::in_range_or_else;
//!
//! #[derive(Debug, PartialEq)]
//! enum BookingError {
//!     Nights(Option<u32>),
//! }
//!
//! let result = in_range_or_else("nights", Some(40), 1, 30, |_, n| BookingError::Nights(n));
//! assert_eq!(result, Err(BookingError::Nights(Some(40))));
//! ```
//!
//! ## Messages
//!
//! Messages are looked up per [`MessageKind`] in `.properties` bundles
//! (English and French are embedded). The process-wide catalogue is built
//! once, either explicitly with [`message::catalog::init`] or lazily on the
//! first failure, using the locale from [`CatalogConfig::from_env`].

// PreconditionError carries its rendered message and parameters inline and is
// only built on the failure path.
#![allow(clippy::result_large_err)]

pub mod checks;
pub mod config;
pub mod error;
pub mod message;
pub mod prelude;

pub use checks::Pattern;
pub use config::CatalogConfig;
pub use error::{CatalogError, PreconditionError, PreconditionResult, TemplateSyntaxError};
pub use message::MessageKind;
