//! Collection emptiness checks
//!
//! Works with anything whose reference iterates: `Vec`, slices, arrays,
//! `HashMap`, `BTreeSet`, `VecDeque`, and so on.

use crate::checks::violation;
use crate::error::PreconditionResult;
use crate::message::MessageKind;

fn has_elements<C>(collection: Option<&C>) -> bool
where
    C: ?Sized,
    for<'a> &'a C: IntoIterator,
{
    collection.is_some_and(|c| c.into_iter().next().is_some())
}

/// Fails if `collection` is `None` or yields no element.
///
/// Both cases produce the same error.
///
/// # Examples
///
/// ```
/// use tiny_preconditions::checks::not_empty;
///
/// let tags = vec!["rust"];
/// assert!(not_empty("tags", Some(&tags)).is_ok());
/// assert!(not_empty("tags", Some(&Vec::<&str>::new())).is_err());
/// assert!(not_empty("tags", None::<&Vec<&str>>).is_err());
/// ```
pub fn not_empty<C>(name: &str, collection: Option<&C>) -> PreconditionResult<()>
where
    C: ?Sized,
    for<'a> &'a C: IntoIterator,
{
    if has_elements(collection) {
        Ok(())
    } else {
        Err(violation(MessageKind::ShouldNotBeEmpty, name, &[&name]))
    }
}

/// Fails with `error(name)` if `collection` is `None` or empty.
pub fn not_empty_or_else<C, E>(
    name: &str,
    collection: Option<&C>,
    error: impl FnOnce(&str) -> E,
) -> Result<(), E>
where
    C: ?Sized,
    for<'a> &'a C: IntoIterator,
{
    if has_elements(collection) {
        Ok(())
    } else {
        Err(error(name))
    }
}
