//! Built-in precondition checks
//!
//! Every rule comes as a pair of functions:
//!
//! - the **default form** (`not_null`, `in_range`, ...) returns a
//!   [`PreconditionError`] with a localized message on failure;
//! - the **`_or_else` form** calls a caller-supplied factory on failure and
//!   returns whatever it builds, so domain error types can be used with the
//!   same check logic. The factory is only called when the check fails.
//!
//! All checks are pure and fail fast: the first violation is returned.
//!
//! # Categories
//!
//! - **Nullable**: [`not_null`]
//! - **Range**: [`in_range`]
//! - **Collection**: [`not_empty`], [`no_null_values`]
//! - **Pattern**: [`matches`] with a [`Pattern`]
//! - **Condition**: [`respects`], [`respects_value`]
//!
//! # Examples
//!
//! ```
//! use tiny_preconditions::checks::{in_range, not_null};
//! use tiny_preconditions::PreconditionResult;
//!
//! fn book(guest: Option<&str>, nights: u32) -> PreconditionResult<()> {
//!     not_null("guest", guest)?;
//!     in_range("nights", Some(nights), 1, 30)?;
//!     Ok(())
//! }
//!
//! assert!(book(Some("ada"), 3).is_ok());
//! assert!(book(None, 3).is_err());
//! assert!(book(Some("ada"), 0).is_err());
//! ```

use std::fmt::Display;

use crate::error::PreconditionError;
use crate::message::{MessageKind, catalog};

pub mod collection;
pub mod condition;
pub mod map;
pub mod nullable;
pub mod pattern;
pub mod range;

pub use collection::{not_empty, not_empty_or_else};
pub use condition::{respects, respects_or_else, respects_value, respects_value_or_else};
pub use map::{no_null_values, no_null_values_or_else};
pub use nullable::{not_null, not_null_or_else};
pub use pattern::{Pattern, matches, matches_or_else};
pub use range::{in_range, in_range_or_else};

/// Builds the default error for a failed check.
///
/// `args` are the message arguments, argument name first.
pub(crate) fn violation(
    kind: MessageKind,
    argument: &str,
    args: &[&dyn Display],
) -> PreconditionError {
    let message = match catalog::global().render(kind, args) {
        Ok(message) => message,
        Err(error) => {
            tracing::error!(%error, code = kind.code(), "failed to render precondition message");
            let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
            format!("{kind}: {}", rendered.join(", "))
        }
    };

    tracing::debug!(argument, code = kind.code(), "precondition violated");
    PreconditionError::new(kind, argument, message)
}
