//! Arbitrary boolean conditions
//!
//! `message` is caller text describing the condition. It is interpolated into
//! the rendered message verbatim and kept as the `message` parameter.

use crate::checks::violation;
use crate::error::{PreconditionError, PreconditionResult};
use crate::message::MessageKind;

fn condition_violation(name: &str, message: &str) -> PreconditionError {
    violation(MessageKind::ShouldRespectBooleanCondition, name, &[&name, &message])
        .with_param("message", message)
}

/// Fails unless `check()` returns true.
///
/// # Examples
///
/// ```
/// use tiny_preconditions::checks::respects;
///
/// let (start, end) = (3, 7);
/// assert!(respects("end", || end > start, "end must come after start").is_ok());
/// assert!(respects("end", || start > end, "start must come after end").is_err());
/// ```
pub fn respects(name: &str, check: impl FnOnce() -> bool, message: &str) -> PreconditionResult<()> {
    if check() {
        Ok(())
    } else {
        Err(condition_violation(name, message))
    }
}

/// Fails with `error(name)` unless `check()` returns true.
pub fn respects_or_else<E>(
    name: &str,
    check: impl FnOnce() -> bool,
    error: impl FnOnce(&str) -> E,
) -> Result<(), E> {
    if check() { Ok(()) } else { Err(error(name)) }
}

/// Fails unless `predicate(value)` returns true.
///
/// # Examples
///
/// ```
/// use tiny_preconditions::checks::respects_value;
///
/// let port = 8080_u16;
/// assert!(respects_value("port", &port, |p| *p >= 1024, "must not be privileged").is_ok());
/// assert!(respects_value("port", &80_u16, |p| *p >= 1024, "must not be privileged").is_err());
/// ```
pub fn respects_value<T: ?Sized>(
    name: &str,
    value: &T,
    predicate: impl FnOnce(&T) -> bool,
    message: &str,
) -> PreconditionResult<()> {
    if predicate(value) {
        Ok(())
    } else {
        Err(condition_violation(name, message))
    }
}

/// Fails with `error(name, value)` unless `predicate(value)` returns true.
pub fn respects_value_or_else<T: ?Sized, E>(
    name: &str,
    value: &T,
    predicate: impl FnOnce(&T) -> bool,
    error: impl FnOnce(&str, &T) -> E,
) -> Result<(), E> {
    if predicate(value) {
        Ok(())
    } else {
        Err(error(name, value))
    }
}
