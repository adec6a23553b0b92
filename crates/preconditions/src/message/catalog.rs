//! The message catalogue
//!
//! A [`MessageCatalog`] maps every [`MessageKind`] to a parsed [`Template`]
//! per locale. It is built once from `.properties` bundles and is immutable
//! afterwards, so it can be shared freely between threads.
//!
//! Bundles are named `tiny-preconditions{suffix}.properties` where the
//! suffix is empty for the base bundle, `_fr` for French, `_fr_CA` for
//! Canadian French, and so on. Lookups walk the locale's fallback chain
//! key by key, so a locale bundle may translate only some messages. The
//! base bundle must define every kind.
//!
//! The process-wide catalogue used by the checks is either installed
//! explicitly with [`init`] / [`install`] at startup, or built lazily on
//! first use from the embedded bundles and [`CatalogConfig::from_env`].

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::message::properties::parse_properties;
use crate::message::{Locale, MessageKind, Template};

/// Base name shared by all bundle files.
pub const BUNDLE_NAME: &str = "tiny-preconditions";

const BUNDLE_EXTENSION: &str = ".properties";

/// Bundles compiled into the library, keyed by locale tag.
const EMBEDDED_BUNDLES: [(&str, &str); 2] = [
    (
        "",
        include_str!("../../resources/tiny-preconditions.properties"),
    ),
    (
        "fr",
        include_str!("../../resources/tiny-preconditions_fr.properties"),
    ),
];

// ============================================================================
// CATALOG
// ============================================================================

/// Immutable lookup table from message kind and locale to template.
///
/// # Examples
///
/// ```
/// use tiny_preconditions::message::{Locale, MessageCatalog, MessageKind};
///
/// let catalog = MessageCatalog::embedded(Locale::parse("fr").unwrap()).unwrap();
/// let message = catalog.render(MessageKind::ShouldNotBeNull, &[&"client"]).unwrap();
/// assert_eq!(message, "client ne doit pas être null");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: Locale,
    /// Indexed by `MessageKind::index`; always complete.
    base: Vec<Template>,
    localized: HashMap<Locale, HashMap<MessageKind, Template>>,
}

impl MessageCatalog {
    /// Starts an empty builder.
    pub fn builder() -> MessageCatalogBuilder {
        MessageCatalogBuilder::new()
    }

    /// Builds a catalogue from the embedded bundles only.
    pub fn embedded(locale: Locale) -> Result<Self, CatalogError> {
        Self::builder().locale(locale).embedded().build()
    }

    /// Builds a catalogue as described by `config`: embedded bundles, then
    /// any bundles found in `config.bundle_dir`.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = Self::builder()
            .locale(config.resolved_locale()?)
            .strict(config.strict)
            .embedded();
        if let Some(dir) = &config.bundle_dir {
            builder = builder.bundle_dir(dir)?;
        }
        builder.build()
    }

    /// Locale used by [`render`](Self::render) and [`template`](Self::template).
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Every locale with at least one template, root included, sorted.
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.localized.keys().cloned().collect();
        locales.push(Locale::root());
        locales.sort();
        locales
    }

    /// Template for `kind` in the catalogue's locale.
    pub fn template(&self, kind: MessageKind) -> &Template {
        self.template_in(&self.locale, kind)
    }

    /// Template for `kind` in `locale`, falling back along its chain.
    pub fn template_in(&self, locale: &Locale, kind: MessageKind) -> &Template {
        locale
            .fallback_chain()
            .iter()
            .filter(|candidate| !candidate.is_root())
            .find_map(|candidate| self.localized.get(candidate)?.get(&kind))
            .unwrap_or(&self.base[kind.index()])
    }

    /// Renders `kind` in the catalogue's locale.
    pub fn render(
        &self,
        kind: MessageKind,
        args: &[&dyn fmt::Display],
    ) -> Result<String, CatalogError> {
        self.render_in(&self.locale, kind, args)
    }

    /// Renders `kind` in `locale`.
    ///
    /// `args` must hold exactly [`MessageKind::arity`] values.
    pub fn render_in(
        &self,
        locale: &Locale,
        kind: MessageKind,
        args: &[&dyn fmt::Display],
    ) -> Result<String, CatalogError> {
        if args.len() != kind.arity() {
            return Err(CatalogError::ArgumentCount {
                key: kind.key(),
                expected: kind.arity(),
                actual: args.len(),
            });
        }
        self.template_in(locale, kind).render(args)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

#[derive(Debug, Clone)]
struct BundleSource {
    locale: Locale,
    origin: String,
    content: String,
}

/// Collects bundle sources and validates them into a [`MessageCatalog`].
///
/// Sources are applied in the order they were added; a later source for the
/// same locale overrides earlier ones key by key.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalogBuilder {
    locale: Locale,
    strict: bool,
    sources: Vec<BundleSource>,
}

impl MessageCatalogBuilder {
    /// Creates a builder rendering in the root locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale the catalogue renders in by default.
    #[must_use = "builder methods must be chained or built"]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Rejects unknown keys instead of logging and skipping them.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Adds a bundle from its text.
    #[must_use = "builder methods must be chained or built"]
    pub fn bundle(
        mut self,
        locale: Locale,
        origin: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.sources.push(BundleSource {
            locale,
            origin: origin.into(),
            content: content.into(),
        });
        self
    }

    /// Adds the bundles shipped with the library.
    #[must_use = "builder methods must be chained or built"]
    pub fn embedded(mut self) -> Self {
        for (tag, content) in EMBEDDED_BUNDLES {
            let locale = Locale::parse(tag).unwrap_or_default();
            let origin = format!("embedded:{BUNDLE_NAME}{}{BUNDLE_EXTENSION}", locale.bundle_suffix());
            self = self.bundle(locale, origin, content);
        }
        self
    }

    /// Adds every `tiny-preconditions*.properties` file found in `dir`.
    ///
    /// Other files are ignored. Bundles are added from least to most
    /// specific locale. When several files name the same locale (`_fr_CA`
    /// and `_fr-CA`), they are applied in file name order, so the last name
    /// overrides the others key by key.
    pub fn bundle_dir(mut self, dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| CatalogError::io(dir, e))?;

        let mut found = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| CatalogError::io(dir, e))?.path();
            let Some(locale) = bundle_locale(&path) else {
                continue;
            };
            let content = fs::read_to_string(&path).map_err(|e| CatalogError::io(&path, e))?;
            found.push(BundleSource {
                locale,
                origin: path.display().to_string(),
                content,
            });
        }
        found.sort_by(|a, b| a.locale.cmp(&b.locale).then_with(|| a.origin.cmp(&b.origin)));
        for pair in found.windows(2) {
            if pair[0].locale == pair[1].locale {
                tracing::warn!(
                    locale = %pair[1].locale,
                    kept = %pair[1].origin,
                    overridden = %pair[0].origin,
                    "several bundles for one locale, the last file name wins"
                );
            }
        }

        tracing::debug!(dir = %dir.display(), bundles = found.len(), "found message bundles");
        self.sources.extend(found);
        Ok(self)
    }

    /// Parses and validates every source.
    ///
    /// Fails on properties syntax errors, malformed templates, templates
    /// referencing more arguments than their kind has, unknown keys in
    /// strict mode, and base bundles missing a kind.
    pub fn build(self) -> Result<MessageCatalog, CatalogError> {
        let mut base: Vec<Option<Template>> = vec![None; MessageKind::ALL.len()];
        let mut localized: HashMap<Locale, HashMap<MessageKind, Template>> = HashMap::new();

        for source in &self.sources {
            let mut defined = 0usize;
            for property in parse_properties(&source.content, &source.origin)? {
                let Some(kind) = MessageKind::from_key(&property.key) else {
                    if self.strict {
                        return Err(CatalogError::UnknownKey {
                            origin: source.origin.clone(),
                            key: property.key,
                        });
                    }
                    tracing::warn!(
                        origin = %source.origin,
                        line = property.line,
                        key = %property.key,
                        "ignoring unknown message key"
                    );
                    continue;
                };

                let template = compile(kind, &property.value, &source.origin)?;
                if source.locale.is_root() {
                    base[kind.index()] = Some(template);
                } else {
                    localized
                        .entry(source.locale.clone())
                        .or_default()
                        .insert(kind, template);
                }
                defined += 1;
            }
            tracing::debug!(
                origin = %source.origin,
                locale = %source.locale,
                templates = defined,
                "loaded message bundle"
            );
        }

        let base = base
            .into_iter()
            .zip(MessageKind::ALL)
            .map(|(template, kind)| template.ok_or(CatalogError::MissingKey { key: kind.key() }))
            .collect::<Result<Vec<_>, _>>()?;

        let has_translation = self
            .locale
            .fallback_chain()
            .iter()
            .any(|candidate| localized.contains_key(candidate));
        if !self.locale.is_root() && !has_translation {
            tracing::warn!(locale = %self.locale, "no message bundle for locale, using base messages");
        }

        Ok(MessageCatalog {
            locale: self.locale,
            base,
            localized,
        })
    }
}

fn compile(kind: MessageKind, source: &str, origin: &str) -> Result<Template, CatalogError> {
    let template = Template::parse(source).map_err(|source| CatalogError::MalformedTemplate {
        origin: origin.to_string(),
        key: kind.key(),
        source,
    })?;

    if let Some(index) = template.max_index().filter(|&index| index >= kind.arity()) {
        return Err(CatalogError::PlaceholderOutOfRange {
            origin: origin.to_string(),
            key: kind.key(),
            index,
            arity: kind.arity(),
        });
    }
    Ok(template)
}

/// Locale of a bundle file, or `None` if the file is not a bundle.
fn bundle_locale(path: &Path) -> Option<Locale> {
    let name = path.file_name()?.to_str()?;
    let stem = name
        .strip_suffix(BUNDLE_EXTENSION)?
        .strip_prefix(BUNDLE_NAME)?;

    if stem.is_empty() {
        return Some(Locale::root());
    }
    let tag = stem.strip_prefix('_')?;
    match Locale::parse(tag) {
        Ok(locale) => Some(locale),
        Err(error) => {
            tracing::warn!(file = %path.display(), %error, "skipping bundle with invalid locale suffix");
            None
        }
    }
}

// ============================================================================
// PROCESS-WIDE CATALOG
// ============================================================================

static GLOBAL: OnceLock<MessageCatalog> = OnceLock::new();

/// Loads the catalogue described by `config` and installs it process-wide.
///
/// Call this once at startup to surface bundle errors early. Fails with
/// [`CatalogError::AlreadyInitialized`] if a catalogue is already in place,
/// including one built lazily by an earlier check.
pub fn init(config: &CatalogConfig) -> Result<&'static MessageCatalog, CatalogError> {
    install(MessageCatalog::load(config)?)
}

/// Installs an already built catalogue process-wide.
pub fn install(catalog: MessageCatalog) -> Result<&'static MessageCatalog, CatalogError> {
    let locale = catalog.locale().clone();
    GLOBAL
        .set(catalog)
        .map_err(|_| CatalogError::AlreadyInitialized)?;
    tracing::debug!(%locale, "installed message catalogue");
    Ok(global())
}

/// The process-wide catalogue, built on first use if none was installed.
///
/// The lazy build reads [`CatalogConfig::from_env`]. If the configured
/// bundles fail to load, the error is logged and the embedded bundles are
/// used instead; call [`init`] to treat that as fatal.
pub fn global() -> &'static MessageCatalog {
    GLOBAL.get_or_init(|| {
        let config = CatalogConfig::from_env();
        MessageCatalog::load(&config).unwrap_or_else(|error| {
            tracing::error!(%error, "failed to load message bundles, falling back to embedded ones");
            let locale = config.resolved_locale().unwrap_or_default();
            MessageCatalog::embedded(locale).expect("embedded message bundles are well-formed")
        })
    })
}

// ============================================================================
// TESTS
// ============================================================================
