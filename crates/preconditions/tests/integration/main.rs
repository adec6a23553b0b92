//! Integration tests for tiny-preconditions.
//!
//! All modules share one process and therefore one global catalogue; every
//! test that looks at rendered text calls [`common::english`] first.

mod catalog;
mod checks;
mod common;
mod custom_errors;
