//! Localized failure messages
//!
//! - [`MessageKind`]: the closed set of messages the checks can produce
//! - [`Template`]: a parsed `{0}`-style positional template
//! - [`Locale`]: language/country tags and their fallback chain
//! - [`MessageCatalog`]: kind × locale → template, loaded once
//!
//! # Examples
//!
//! ```
//! use tiny_preconditions::message::{Locale, MessageCatalog, MessageKind};
//!
//! let catalog = MessageCatalog::embedded(Locale::root()).unwrap();
//! let message = catalog
//!     .render(MessageKind::ShouldBeBetween, &[&"port", &1, &65535])
//!     .unwrap();
//! assert_eq!(message, "port should be between 1 and 65535 (inclusive)");
//! ```

pub mod catalog;
mod kind;
mod locale;
mod properties;
mod template;

pub use catalog::{BUNDLE_NAME, MessageCatalog, MessageCatalogBuilder};
pub use kind::MessageKind;
pub use locale::{LOCALE_ENV_VARS, Locale};
pub use template::Template;
