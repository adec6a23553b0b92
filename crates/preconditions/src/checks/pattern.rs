//! Regular expression checks
//!
//! Matching is always against the whole input: `[A-Z]{3}` accepts `"ABC"`
//! but neither `"AB"` nor `"ABCD"`. Compile patterns once, for example in a
//! `static LazyLock<Pattern>`, and reuse them.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use regex_syntax::hir::{Hir, Look};

use crate::checks::violation;
use crate::error::PreconditionResult;
use crate::message::MessageKind;

/// A compiled regular expression that matches whole strings.
///
/// Keeps the source text so failure messages show the pattern as written.
///
/// # Examples
///
/// ```
/// use tiny_preconditions::checks::Pattern;
///
/// let pattern = Pattern::new("[A-Z]{3}").unwrap();
/// assert!(pattern.is_full_match("ABC"));
/// assert!(!pattern.is_full_match("ABCD"));
/// assert_eq!(pattern.as_str(), "[A-Z]{3}");
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    anchored: Regex,
}

impl Pattern {
    /// Compiles `source`.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source)?;
        let anchored = Regex::new(&anchor(source)?.to_string())?;
        Ok(Self {
            source: source.to_string(),
            anchored,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if the pattern matches all of `input`.
    pub fn is_full_match(&self, input: &str) -> bool {
        self.anchored.is_match(input)
    }
}

/// Wraps the parsed source between `\A` and `\z`.
///
/// Anchoring the syntax tree instead of the text keeps flags and trailing
/// `(?x)` comments in the source from reaching the anchors.
fn anchor(source: &str) -> Result<Hir, regex::Error> {
    let hir = regex_syntax::Parser::new()
        .parse(source)
        .map_err(|error| regex::Error::Syntax(error.to_string()))?;
    Ok(Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]))
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = regex::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Fails unless `pattern` matches the whole of `value`.
///
/// # Examples
///
/// ```
/// use tiny_preconditions::checks::{Pattern, matches};
///
/// let currency = Pattern::new("[A-Z]{3}").unwrap();
/// assert!(matches("currency", "EUR", &currency).is_ok());
/// assert!(matches("currency", "euro", &currency).is_err());
/// ```
pub fn matches(name: &str, value: &str, pattern: &Pattern) -> PreconditionResult<()> {
    if pattern.is_full_match(value) {
        Ok(())
    } else {
        Err(
            violation(MessageKind::ShouldMatchRegexp, name, &[&name, &pattern.as_str()])
                .with_param("pattern", pattern.as_str()),
        )
    }
}

/// Fails with `error(name, value)` unless `pattern` matches the whole of `value`.
pub fn matches_or_else<E>(
    name: &str,
    value: &str,
    pattern: &Pattern,
    error: impl FnOnce(&str, &str) -> E,
) -> Result<(), E> {
    if pattern.is_full_match(value) {
        Ok(())
    } else {
        Err(error(name, value))
    }
}
