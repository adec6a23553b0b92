//! Locale tags and bundle fallback chains

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Environment variables consulted for the process locale, in order.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// A language with an optional country, e.g. `fr` or `fr_CA`.
///
/// The root locale (no language) selects the base bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Locale {
    language: Option<String>,
    country: Option<String>,
}

impl Locale {
    /// The root locale, served by the base bundle.
    pub const fn root() -> Self {
        Self {
            language: None,
            country: None,
        }
    }

    /// Parses a locale tag.
    ///
    /// Accepts `ll`, `ll_CC`, `ll-CC`, and POSIX forms with an encoding or
    /// modifier suffix (`fr_FR.UTF-8`, `de_DE@euro`). Empty tags, `C` and
    /// `POSIX` are the root locale. Language is normalized to lowercase and
    /// country to uppercase.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiny_preconditions::message::Locale;
    ///
    /// let locale = Locale::parse("fr_CA.UTF-8").unwrap();
    /// assert_eq!(locale.language(), Some("fr"));
    /// assert_eq!(locale.country(), Some("CA"));
    /// assert!(Locale::parse("C").unwrap().is_root());
    /// ```
    pub fn parse(tag: &str) -> Result<Self, CatalogError> {
        let invalid = || CatalogError::InvalidLocale {
            tag: tag.to_string(),
        };

        let base = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();
        if base.is_empty() || base == "C" || base == "POSIX" {
            return Ok(Self::root());
        }

        let mut parts = base.split(['_', '-']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(invalid());
        }
        let country = match country {
            None => None,
            Some(c) if is_country(c) => Some(c.to_ascii_uppercase()),
            Some(_) => return Err(invalid()),
        };

        Ok(Self {
            language: Some(language.to_ascii_lowercase()),
            country,
        })
    }

    /// Resolves the process locale from `LC_ALL`, `LC_MESSAGES` and `LANG`.
    ///
    /// The first non-empty variable wins. An unparseable value falls back to
    /// the root locale with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let Some((name, tag)) = LOCALE_ENV_VARS
            .iter()
            .find_map(|name| lookup(name).filter(|v| !v.is_empty()).map(|v| (*name, v)))
        else {
            return Self::root();
        };

        match Self::parse(&tag) {
            Ok(locale) => locale,
            Err(error) => {
                tracing::warn!(variable = name, %error, "ignoring unparseable locale, using root");
                Self::root()
            }
        }
    }

    /// Language code, lowercase.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Country code, uppercase.
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Returns true for the root locale.
    pub fn is_root(&self) -> bool {
        self.language.is_none()
    }

    /// Lookup chain from most to least specific, always ending at root.
    ///
    /// `fr_CA` yields `[fr_CA, fr, root]`.
    pub fn fallback_chain(&self) -> Vec<Self> {
        let mut chain = Vec::with_capacity(3);
        if let Some(language) = &self.language {
            if self.country.is_some() {
                chain.push(self.clone());
            }
            chain.push(Self {
                language: Some(language.clone()),
                country: None,
            });
        }
        chain.push(Self::root());
        chain
    }

    /// Suffix appended to a bundle's base name: `""`, `"_fr"`, `"_fr_CA"`.
    pub fn bundle_suffix(&self) -> String {
        match (&self.language, &self.country) {
            (None, _) => String::new(),
            (Some(language), None) => format!("_{language}"),
            (Some(language), Some(country)) => format!("_{language}_{country}"),
        }
    }
}

fn is_country(code: &str) -> bool {
    (code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()))
        || (code.len() == 3 && code.bytes().all(|b| b.is_ascii_digit()))
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.language, &self.country) {
            (None, _) => f.write_str("root"),
            (Some(language), None) => f.write_str(language),
            (Some(language), Some(country)) => write!(f, "{language}_{country}"),
        }
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// TESTS
// ============================================================================
