//! Catalogue configuration
//!
//! Controls which locale the process-wide catalogue renders in, where
//! override bundles are read from, and whether unknown keys are rejected.
//! Values come from code, from a deserialized config section, or from the
//! environment:
//!
//! | Variable | Field |
//! |---|---|
//! | `PRECONDITIONS_LOCALE` | [`CatalogConfig::locale`] |
//! | `PRECONDITIONS_BUNDLE_DIR` | [`CatalogConfig::bundle_dir`] |
//! | `PRECONDITIONS_STRICT` | [`CatalogConfig::strict`] |

use std::path::PathBuf;

use crate::error::CatalogError;
use crate::message::Locale;

/// Environment variable selecting the message locale.
pub const ENV_LOCALE: &str = "PRECONDITIONS_LOCALE";
/// Environment variable pointing at a directory of override bundles.
pub const ENV_BUNDLE_DIR: &str = "PRECONDITIONS_BUNDLE_DIR";
/// Environment variable enabling strict bundle loading.
pub const ENV_STRICT: &str = "PRECONDITIONS_STRICT";

/// How to build a [`MessageCatalog`](crate::message::MessageCatalog).
///
/// # Examples
///
/// ```
/// use tiny_preconditions::CatalogConfig;
///
/// let config = CatalogConfig::default().with_locale("fr").strict(true);
/// assert_eq!(config.locale.as_deref(), Some("fr"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct CatalogConfig {
    /// Locale tag such as `fr` or `fr_CA`. When unset, the process locale
    /// (`LC_ALL`, `LC_MESSAGES`, `LANG`) is used.
    pub locale: Option<String>,

    /// Directory holding `tiny-preconditions*.properties` files. Entries in
    /// these files override the embedded bundles key by key.
    pub bundle_dir: Option<PathBuf>,

    /// Reject keys that are not message kinds instead of ignoring them.
    pub strict: bool,
}

impl CatalogConfig {
    /// Reads the configuration from `PRECONDITIONS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            locale: non_empty(ENV_LOCALE),
            bundle_dir: non_empty(ENV_BUNDLE_DIR).map(PathBuf::from),
            strict: non_empty(ENV_STRICT).is_some_and(|v| parse_flag(&v)),
        }
    }

    /// Sets the locale tag.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the override bundle directory.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_bundle_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bundle_dir = Some(dir.into());
        self
    }

    /// Enables or disables strict loading.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The locale to render in.
    ///
    /// An explicit tag must parse; the process locale is resolved leniently.
    pub fn resolved_locale(&self) -> Result<Locale, CatalogError> {
        match &self.locale {
            Some(tag) => Locale::parse(tag),
            None => Ok(Locale::from_env()),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
