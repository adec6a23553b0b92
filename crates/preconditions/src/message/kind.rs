//! The closed set of failure messages

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Identifies one message template in the catalogue.
///
/// Each kind has a resource key (the identifier used in `.properties`
/// bundles), a stable snake_case code, and a fixed number of positional
/// arguments. Argument `{0}` is always the name of the offending argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum MessageKind {
    /// `{0}` argument name.
    ShouldNotBeNull,
    /// `{0}` argument name.
    ShouldNotBeEmpty,
    /// `{0}` argument name, `{1}` lower bound, `{2}` upper bound.
    ShouldBeBetween,
    /// `{0}` argument name, `{1}` pattern source.
    ShouldMatchRegexp,
    /// `{0}` argument name, `{1}` caller-supplied description.
    ShouldRespectBooleanCondition,
    /// `{0}` argument name, `{1}` key holding the null value.
    MapShouldNotContainAnyNullReference,
}

impl MessageKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::ShouldNotBeNull,
        Self::ShouldNotBeEmpty,
        Self::ShouldBeBetween,
        Self::ShouldMatchRegexp,
        Self::ShouldRespectBooleanCondition,
        Self::MapShouldNotContainAnyNullReference,
    ];

    /// Resource key used in message bundles.
    pub const fn key(self) -> &'static str {
        match self {
            Self::ShouldNotBeNull => "SHOULD_NOT_BE_NULL",
            Self::ShouldNotBeEmpty => "SHOULD_NOT_BE_EMPTY",
            Self::ShouldBeBetween => "SHOULD_BE_BETWEEN",
            Self::ShouldMatchRegexp => "SHOULD_MATCH_REGEXP",
            Self::ShouldRespectBooleanCondition => "SHOULD_RESPECT_BOOLEAN_CONDITION",
            Self::MapShouldNotContainAnyNullReference => {
                "MAP_SHOULD_NOT_CONTAIN_ANY_NULL_REFERENCE"
            }
        }
    }

    /// Stable snake_case code for programmatic handling.
    pub const fn code(self) -> &'static str {
        match self {
            Self::ShouldNotBeNull => "should_not_be_null",
            Self::ShouldNotBeEmpty => "should_not_be_empty",
            Self::ShouldBeBetween => "should_be_between",
            Self::ShouldMatchRegexp => "should_match_regexp",
            Self::ShouldRespectBooleanCondition => "should_respect_boolean_condition",
            Self::MapShouldNotContainAnyNullReference => {
                "map_should_not_contain_any_null_reference"
            }
        }
    }

    /// Number of positional arguments the message is rendered with.
    pub const fn arity(self) -> usize {
        match self {
            Self::ShouldNotBeNull | Self::ShouldNotBeEmpty => 1,
            Self::ShouldBeBetween => 3,
            Self::ShouldMatchRegexp
            | Self::ShouldRespectBooleanCondition
            | Self::MapShouldNotContainAnyNullReference => 2,
        }
    }

    /// Position in [`MessageKind::ALL`].
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Looks a kind up by its resource key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Renders this message with the process-wide catalogue.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiny_preconditions::MessageKind;
    ///
    /// let message = MessageKind::ShouldNotBeNull.format(&[&"user"]).unwrap();
    /// assert!(message.contains("user"));
    /// ```
    pub fn format(self, args: &[&dyn fmt::Display]) -> Result<String, CatalogError> {
        crate::message::catalog::global().render(self, args)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MessageKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| CatalogError::UnknownKind { key: s.to_string() })
    }
}
