//! `_or_else` forms: the returned error is exactly what the factory built.

use std::cell::RefCell;
use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use thiserror::Error;
use tiny_preconditions::prelude::*;

use crate::common::english;

#[derive(Debug, PartialEq, Error)]
enum AccountError {
    #[error("{0} is required")]
    Missing(String),
    #[error("{field} out of range: {value:?}")]
    OutOfRange { field: String, value: Option<i32> },
    #[error("{0} has no entries")]
    Empty(String),
    #[error("{field} is malformed: {value}")]
    Malformed { field: String, value: String },
    #[error("{0} is inconsistent")]
    Inconsistent(String),
    #[error("{field} has no value for {key}")]
    NullEntry { field: String, key: String },
}

#[test]
fn not_null_or_else_returns_factory_error() {
    english();
    let result = not_null_or_else("owner", None::<&str>, |name| AccountError::Missing(name.into()));
    assert_eq!(result, Err(AccountError::Missing("owner".into())));
    assert_eq!(result.unwrap_err().to_string(), "owner is required");
}

#[test]
fn in_range_or_else_receives_name_and_value() {
    english();
    let seen = RefCell::new(Vec::new());
    let result = in_range_or_else("dummy", Some(0), 1, 10, |name, value| {
        seen.borrow_mut().push((name.to_string(), value));
        AccountError::OutOfRange {
            field: name.into(),
            value,
        }
    });

    assert_eq!(seen.into_inner(), vec![("dummy".to_string(), Some(0))]);
    assert_eq!(
        result,
        Err(AccountError::OutOfRange {
            field: "dummy".into(),
            value: Some(0),
        })
    );
}

#[test]
fn in_range_or_else_passes_missing_value_through() {
    english();
    let result = in_range_or_else("dummy", None, 1, 10, |name, value| AccountError::OutOfRange {
        field: name.into(),
        value,
    });
    assert_eq!(
        result,
        Err(AccountError::OutOfRange {
            field: "dummy".into(),
            value: None,
        })
    );
}

#[test]
fn not_empty_or_else_returns_factory_error() {
    english();
    let roles: Vec<&str> = Vec::new();
    let result = not_empty_or_else("roles", Some(&roles), |name| AccountError::Empty(name.into()));
    assert_eq!(result, Err(AccountError::Empty("roles".into())));
}

#[test]
fn matches_or_else_receives_offending_value() {
    english();
    let iban = Pattern::new("[A-Z]{2}[0-9]{2}[A-Z0-9]{4,30}").unwrap();
    let result = matches_or_else("iban", "not an iban", &iban, |field, value| {
        AccountError::Malformed {
            field: field.into(),
            value: value.into(),
        }
    });
    assert_eq!(
        result,
        Err(AccountError::Malformed {
            field: "iban".into(),
            value: "not an iban".into(),
        })
    );
}

#[test]
fn respects_forms_return_factory_error() {
    english();
    let balance = -5;
    let result = respects_or_else("balance", || balance >= 0, |name| {
        AccountError::Inconsistent(name.into())
    });
    assert_eq!(result, Err(AccountError::Inconsistent("balance".into())));

    let limit = 500;
    let result = respects_value_or_else("withdrawal", &800, |amount| *amount <= limit, |name, amount| {
        AccountError::OutOfRange {
            field: name.into(),
            value: Some(*amount),
        }
    });
    assert_eq!(
        result,
        Err(AccountError::OutOfRange {
            field: "withdrawal".into(),
            value: Some(800),
        })
    );
}

#[test]
fn no_null_values_or_else_receives_key() {
    english();
    let map = BTreeMap::from([("currency", Some("EUR")), ("owner", None), ("region", None)]);
    let result = no_null_values_or_else("account", &map, |name, key| AccountError::NullEntry {
        field: name.into(),
        key: key.to_string(),
    });
    assert_eq!(
        result,
        Err(AccountError::NullEntry {
            field: "account".into(),
            key: "owner".into(),
        })
    );
}

#[test]
fn factories_are_not_called_on_success() {
    english();
    let pattern = Pattern::new("ok").unwrap();
    let never = |_: &str| -> AccountError { panic!("factory called on success") };

    assert!(not_null_or_else("a", Some(&1), never).is_ok());
    assert!(not_empty_or_else("b", Some(&[1]), never).is_ok());
    assert!(respects_or_else("c", || true, never).is_ok());
    assert!(matches_or_else("d", "ok", &pattern, |_, _| -> AccountError { unreachable!() }).is_ok());
    assert!(in_range_or_else("e", Some(5), 1, 10, |_, _| -> AccountError { unreachable!() }).is_ok());
}
