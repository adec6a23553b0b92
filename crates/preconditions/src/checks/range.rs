//! Inclusive range checks

use std::fmt::Display;

use crate::checks::violation;
use crate::error::PreconditionResult;
use crate::message::MessageKind;

fn contains<T: PartialOrd>(value: Option<&T>, min: &T, max: &T) -> bool {
    value.is_some_and(|v| v >= min && v <= max)
}

/// Fails unless `value` is `Some(v)` with `min <= v <= max`.
///
/// `None` counts as out of range. Values that do not compare (such as a NaN
/// float) are out of range as well, and so is everything when `min > max`.
///
/// # Examples
///
/// ```
/// use tiny_preconditions::checks::in_range;
///
/// assert!(in_range("percent", Some(100), 0, 100).is_ok());
/// assert!(in_range("percent", Some(101), 0, 100).is_err());
/// assert!(in_range("percent", None, 0, 100).is_err());
/// ```
pub fn in_range<T>(name: &str, value: Option<T>, min: T, max: T) -> PreconditionResult<()>
where
    T: PartialOrd + Display,
{
    if contains(value.as_ref(), &min, &max) {
        return Ok(());
    }

    let error = violation(MessageKind::ShouldBeBetween, name, &[&name, &min, &max])
        .with_param("min", &min)
        .with_param("max", &max);
    Err(match value {
        Some(actual) => error.with_param("actual", actual),
        None => error,
    })
}

/// Fails with `error(name, value)` unless `value` is within `min..=max`.
pub fn in_range_or_else<T, E>(
    name: &str,
    value: Option<T>,
    min: T,
    max: T,
    error: impl FnOnce(&str, Option<T>) -> E,
) -> Result<(), E>
where
    T: PartialOrd,
{
    if contains(value.as_ref(), &min, &max) {
        Ok(())
    } else {
        Err(error(name, value))
    }
}
