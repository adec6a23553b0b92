//! Catalogue loading and locale selection through the public API.

use std::fs;

use pretty_assertions::assert_eq;
use tiny_preconditions::message::{Locale, MessageCatalog, catalog};
use tiny_preconditions::{CatalogConfig, CatalogError, MessageKind};

use crate::common::english;

#[test]
fn message_kind_formats_with_global_catalogue() {
    english();
    let message = MessageKind::ShouldRespectBooleanCondition
        .format(&[&"dummy", &"it's fine"])
        .unwrap();
    assert_eq!(message, "dummy should respect the condition: it's fine");
}

#[test]
fn global_catalogue_rejects_wrong_argument_count() {
    english();
    let error = MessageKind::ShouldBeBetween.format(&[&"dummy", &1]).unwrap_err();
    assert!(matches!(
        error,
        CatalogError::ArgumentCount {
            expected: 3,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn second_initialization_is_rejected() {
    english();
    assert!(matches!(
        catalog::init(&CatalogConfig::default()),
        Err(CatalogError::AlreadyInitialized)
    ));
}

#[test]
fn french_catalogue_from_config() {
    english();
    let config = CatalogConfig::default().with_locale("fr_FR.UTF-8");
    let french = MessageCatalog::load(&config).unwrap();
    insta::assert_snapshot!(
        french.render(MessageKind::ShouldMatchRegexp, &[&"code", &"[A-Z]{3}"]).unwrap(),
        @"code doit respecter l'expression régulière [A-Z]{3}"
    );
}

#[test]
fn custom_bundle_directory_overrides_messages() {
    english();
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("tiny-preconditions_de.properties"),
        "# German\n\
         SHOULD_NOT_BE_NULL = {0} darf nicht null sein\n\
         SHOULD_BE_BETWEEN = {0} muss zwischen {1} und {2} liegen\n",
    )
    .unwrap();

    let config = CatalogConfig::default()
        .with_locale("de_AT")
        .with_bundle_dir(dir.path());
    let german = MessageCatalog::load(&config).unwrap();

    assert_eq!(german.locale(), &Locale::parse("de_AT").unwrap());
    assert_eq!(
        german.render(MessageKind::ShouldNotBeNull, &[&"name"]).unwrap(),
        "name darf nicht null sein"
    );
    // Keys missing from the German bundle come from the base bundle.
    assert_eq!(
        german.render(MessageKind::ShouldNotBeEmpty, &[&"tags"]).unwrap(),
        "tags should not be null nor empty"
    );
}

#[test]
fn strict_mode_rejects_unknown_keys_from_files() {
    english();
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("tiny-preconditions_it.properties"),
        "SHOULD_BE_ODD = {0} deve essere dispari\n",
    )
    .unwrap();

    let lenient = CatalogConfig::default()
        .with_locale("it")
        .with_bundle_dir(dir.path());
    assert!(MessageCatalog::load(&lenient).is_ok());

    let strict = lenient.strict(true);
    let error = MessageCatalog::load(&strict).unwrap_err();
    assert!(error.is_load_error());
    assert!(matches!(error, CatalogError::UnknownKey { ref key, .. } if key == "SHOULD_BE_ODD"));
}

#[test]
fn malformed_file_template_reports_origin() {
    english();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny-preconditions_nl.properties");
    fs::write(&path, "SHOULD_NOT_BE_NULL = {0 mag niet null zijn\n").unwrap();

    let config = CatalogConfig::default()
        .with_locale("nl")
        .with_bundle_dir(dir.path());
    match MessageCatalog::load(&config) {
        Err(CatalogError::MalformedTemplate { origin, key, .. }) => {
            assert_eq!(origin, path.display().to_string());
            assert_eq!(key, "SHOULD_NOT_BE_NULL");
        }
        other => panic!("expected a malformed template error, got {other:?}"),
    }
}

#[test]
fn invalid_locale_in_config_is_rejected() {
    english();
    let config = CatalogConfig::default().with_locale("not a locale");
    assert!(matches!(
        MessageCatalog::load(&config),
        Err(CatalogError::InvalidLocale { .. })
    ));
}

#[cfg(feature = "serde")]
#[test]
fn config_deserializes_from_json() {
    english();
    let config: CatalogConfig =
        serde_json::from_str(r#"{ "locale": "fr", "strict": true }"#).unwrap();
    assert_eq!(config.locale.as_deref(), Some("fr"));
    assert!(config.strict);
    assert_eq!(config.bundle_dir, None);

    let unknown = serde_json::from_str::<CatalogConfig>(r#"{ "language": "fr" }"#);
    assert!(unknown.is_err());
}
