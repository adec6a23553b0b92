use tiny_preconditions::CatalogError;
use tiny_preconditions::message::{Locale, MessageCatalog, catalog};

/// Installs the English base catalogue process-wide, whatever `LANG` says.
pub fn english() {
    let catalog = MessageCatalog::embedded(Locale::root()).unwrap();
    match catalog::install(catalog) {
        Ok(_) | Err(CatalogError::AlreadyInitialized) => {}
        Err(other) => panic!("unexpected install error: {other}"),
    }
    assert!(catalog::global().locale().is_root());
}
