//! Error types
//!
//! [`PreconditionError`] is what the default-message checks return. It keeps
//! the rendered message together with the structured data it was built from
//! (message kind, argument name, interpolated parameters), in the spirit of a
//! structured validation error with a code and params.
//!
//! [`CatalogError`] covers everything that can go wrong while loading or
//! rendering the message catalogue.

use std::borrow::Cow;
use std::fmt::Display;
use std::path::PathBuf;

use smallvec::SmallVec;
use thiserror::Error;

use crate::message::MessageKind;

// ============================================================================
// PRECONDITION ERROR
// ============================================================================

/// A violated precondition: the generic "invalid argument" failure.
///
/// `Display` prints the localized message only, so the error can be shown
/// to a user or logged as-is.
///
/// # Examples
///
/// ```
/// use tiny_preconditions::{MessageKind, checks::in_range};
///
/// let error = in_range("age", Some(150), 0, 130).unwrap_err();
/// assert_eq!(error.kind(), MessageKind::ShouldBeBetween);
/// assert_eq!(error.argument(), "age");
/// assert_eq!(error.param("max"), Some("130"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PreconditionError {
    kind: MessageKind,
    argument: String,
    message: String,
    /// Ordered key-value pairs, at most three for the built-in checks.
    params: SmallVec<[(Cow<'static, str>, String); 3]>,
}

impl PreconditionError {
    /// Creates an error from an already rendered message.
    pub fn new(kind: MessageKind, argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            argument: argument.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter describing the violated constraint.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: impl Into<Cow<'static, str>>, value: impl Display) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// The message kind this failure was rendered from.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Stable snake_case code, suitable for programmatic matching.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Name of the offending argument.
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// The rendered, localized message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over the parameters in insertion order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Converts the error to a JSON value (for structured logs and APIs).
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.clone())))
            .collect();

        json!({
            "code": self.code(),
            "argument": self.argument,
            "message": self.message,
            "params": params,
        })
    }
}

/// Result of a default-message check.
pub type PreconditionResult<T> = Result<T, PreconditionError>;

// ============================================================================
// TEMPLATE SYNTAX ERROR
// ============================================================================

/// A message template that could not be parsed.
///
/// Positions are byte offsets into the template source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateSyntaxError {
    /// A `'` opened a literal section that never closes.
    #[error("unterminated quote starting at byte {position}")]
    UnterminatedQuote {
        /// Offset of the opening quote.
        position: usize,
    },

    /// A `{` without a matching `}`.
    #[error("unclosed placeholder starting at byte {position}")]
    UnclosedPlaceholder {
        /// Offset of the opening brace.
        position: usize,
    },

    /// A `}` outside of any placeholder.
    #[error("unmatched '}}' at byte {position}")]
    UnmatchedBrace {
        /// Offset of the closing brace.
        position: usize,
    },

    /// A placeholder whose content is not an argument index.
    #[error("placeholder '{{{text}}}' at byte {position} is not an argument index")]
    InvalidIndex {
        /// Offset of the opening brace.
        position: usize,
        /// Raw placeholder content.
        text: String,
    },
}

// ============================================================================
// CATALOG ERROR
// ============================================================================

/// Failure while loading or rendering the message catalogue.
///
/// Load-time variants are reported once, when the catalogue is built;
/// a catalogue that built successfully can only fail to render when the
/// caller supplies the wrong number of arguments.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The base bundle does not define a template for a message kind.
    #[error("base message bundle has no template for {key}")]
    MissingKey {
        /// Resource key of the missing kind.
        key: &'static str,
    },

    /// A bundle defines a key that is not a known message kind (strict mode).
    #[error("unknown message key `{key}` in {origin}")]
    UnknownKey {
        /// Where the bundle came from.
        origin: String,
        /// The offending key.
        key: String,
    },

    /// A string that does not name any message kind.
    #[error("`{key}` is not a message kind")]
    UnknownKind {
        /// The offending identifier.
        key: String,
    },

    /// A template that does not parse.
    #[error("malformed template for {key} in {origin}: {source}")]
    MalformedTemplate {
        /// Where the bundle came from.
        origin: String,
        /// Resource key of the template.
        key: &'static str,
        /// What is wrong with it.
        source: TemplateSyntaxError,
    },

    /// A template referencing more arguments than its kind supplies.
    #[error("template for {key} in {origin} uses argument {{{index}}} but the message has {arity} argument(s)")]
    PlaceholderOutOfRange {
        /// Where the bundle came from.
        origin: String,
        /// Resource key of the template.
        key: &'static str,
        /// Highest index referenced.
        index: usize,
        /// Number of arguments the kind supplies.
        arity: usize,
    },

    /// A bundle that is not valid `.properties` syntax.
    #[error("invalid properties syntax in {origin} at line {line}: {reason}")]
    Syntax {
        /// Where the bundle came from.
        origin: String,
        /// One-based line number.
        line: usize,
        /// What is wrong.
        reason: String,
    },

    /// A locale tag that cannot be parsed.
    #[error("invalid locale tag `{tag}`")]
    InvalidLocale {
        /// The offending tag.
        tag: String,
    },

    /// Reading a bundle file or directory failed.
    #[error("failed to read message bundles from {path}: {source}")]
    Io {
        /// File or directory being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Rendering was called with the wrong number of arguments.
    #[error("{key} expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        /// Resource key of the kind being rendered.
        key: &'static str,
        /// Arity of the kind.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// A template referenced an argument that was not supplied.
    #[error("template uses argument {{{index}}} but only {supplied} argument(s) were supplied")]
    MissingArgument {
        /// Index referenced by the template.
        index: usize,
        /// Number of arguments supplied.
        supplied: usize,
    },

    /// The process-wide catalogue was installed (or lazily built) already.
    #[error("the global message catalogue is already initialized")]
    AlreadyInitialized,
}

impl CatalogError {
    /// Creates a properties syntax error.
    pub fn syntax(origin: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        Self::Syntax {
            origin: origin.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Creates an I/O error for a bundle path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error happened while loading, as opposed to rendering.
    pub fn is_load_error(&self) -> bool {
        !matches!(
            self,
            Self::ArgumentCount { .. } | Self::MissingArgument { .. } | Self::UnknownKind { .. }
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
