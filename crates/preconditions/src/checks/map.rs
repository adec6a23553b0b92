//! Map value checks
//!
//! A map "contains null" when one of its values is `None`. Anything that
//! iterates as `(&K, &Option<V>)` pairs is accepted, so `&HashMap`,
//! `&BTreeMap` and iterators over such pairs all work.

use std::fmt::Display;

use crate::checks::violation;
use crate::error::PreconditionResult;
use crate::message::MessageKind;

fn first_null_key<'a, K, V, M>(map: M) -> Option<&'a K>
where
    K: ?Sized + 'a,
    V: 'a,
    M: IntoIterator<Item = (&'a K, &'a Option<V>)>,
{
    map.into_iter()
        .find_map(|(key, value)| value.is_none().then_some(key))
}

/// Fails on the first entry whose value is `None`.
///
/// Entries are visited in the map's own iteration order; use an ordered map
/// when the reported key has to be deterministic.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use tiny_preconditions::checks::no_null_values;
///
/// let mut headers = BTreeMap::new();
/// headers.insert("accept", Some("text/plain"));
/// assert!(no_null_values("headers", &headers).is_ok());
///
/// headers.insert("host", None);
/// let error = no_null_values("headers", &headers).unwrap_err();
/// assert_eq!(error.param("key"), Some("host"));
/// ```
pub fn no_null_values<'a, K, V, M>(name: &str, map: M) -> PreconditionResult<()>
where
    K: Display + ?Sized + 'a,
    V: 'a,
    M: IntoIterator<Item = (&'a K, &'a Option<V>)>,
{
    match first_null_key(map) {
        None => Ok(()),
        Some(key) => Err(
            violation(MessageKind::MapShouldNotContainAnyNullReference, name, &[&name, &key])
                .with_param("key", key),
        ),
    }
}

/// Fails with `error(name, key)` for the first entry whose value is `None`.
pub fn no_null_values_or_else<'a, K, V, M, E>(
    name: &str,
    map: M,
    error: impl FnOnce(&str, &'a K) -> E,
) -> Result<(), E>
where
    K: ?Sized + 'a,
    V: 'a,
    M: IntoIterator<Item = (&'a K, &'a Option<V>)>,
{
    match first_null_key(map) {
        None => Ok(()),
        Some(key) => Err(error(name, key)),
    }
}
