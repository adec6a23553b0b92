//! Basic usage example for tiny-preconditions
//!
//! Run with `RUST_LOG=tiny_preconditions=debug` to see failing checks logged,
//! and `PRECONDITIONS_LOCALE=fr` to get French messages.

use std::collections::BTreeMap;
use std::fmt;

use tiny_preconditions::CatalogConfig;
use tiny_preconditions::message::catalog;
use tiny_preconditions::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
#[error("invalid reservation: {field} {reason}")]
struct ReservationError {
    field: String,
    reason: &'static str,
}

fn report<E: fmt::Display>(label: &str, result: Result<(), E>) {
    match result {
        Ok(()) => println!("✓ {label}"),
        Err(e) => println!("✗ {label}: {e}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(error) = catalog::init(&CatalogConfig::from_env()) {
        eprintln!("could not load message bundles: {error}");
        return;
    }

    report("not_null", not_null("dummy", None::<&str>));
    report("in_range", in_range("dummy", Some(0), 1, 10));
    report("not_empty", not_empty("emptyList", Some(&Vec::<String>::new())));

    let mut settings = BTreeMap::new();
    for i in 1..=4 {
        let value = (i != 2).then(|| format!("value-{i:02}"));
        settings.insert(format!("key-{i:02}"), value);
    }
    report("no_null_values", no_null_values("settings", &settings));

    let currency = match Pattern::new("[A-Z]{3}") {
        Ok(pattern) => pattern,
        Err(error) => {
            eprintln!("bad pattern: {error}");
            return;
        }
    };
    report("matches", matches("currency", "EURO", &currency));
    let (check_in, check_out) = (3, 1);
    report(
        "respects",
        respects("checkout", || check_out > check_in, "checkout must come after check-in"),
    );

    // Domain error instead of the default one
    report(
        "in_range_or_else",
        in_range_or_else("nights", Some(45), 1, 30, |name, _| ReservationError {
            field: name.to_string(),
            reason: "is out of range",
        }),
    );

    if let Err(error) = in_range("dummy", Some(42), 1, 10) {
        println!("\ncode: {}", error.code());
        for (key, value) in error.params() {
            println!("  {key} = {value}");
        }
    }
}
