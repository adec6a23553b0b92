//! Null checks
//!
//! A missing value is modelled as `None`. Pass borrowed values with
//! `Option::as_ref` / `Option::as_deref`.

use crate::checks::violation;
use crate::error::PreconditionResult;
use crate::message::MessageKind;

/// Fails if `value` is `None`.
///
/// # Examples
///
/// ```
/// use tiny_preconditions::checks::not_null;
///
/// let name: Option<String> = Some("ada".into());
/// assert!(not_null("name", name.as_deref()).is_ok());
/// assert!(not_null("name", None::<&str>).is_err());
/// ```
pub fn not_null<T: ?Sized>(name: &str, value: Option<&T>) -> PreconditionResult<()> {
    if value.is_some() {
        Ok(())
    } else {
        Err(violation(MessageKind::ShouldNotBeNull, name, &[&name]))
    }
}

/// Fails with `error(name)` if `value` is `None`.
pub fn not_null_or_else<T: ?Sized, E>(
    name: &str,
    value: Option<&T>,
    error: impl FnOnce(&str) -> E,
) -> Result<(), E> {
    if value.is_some() {
        Ok(())
    } else {
        Err(error(name))
    }
}
