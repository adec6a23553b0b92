//! `.properties` bundle parsing
//!
//! Supports the subset message bundles need: `#`/`!` comments, backslash
//! line continuations, and the usual escapes (`\t`, `\n`, `\r`, `\f`,
//! `\\`, `\uXXXX`, and `\x` for any other `x`). The key ends at the first
//! unescaped `=`, `:` or whitespace, so `KEY = value`, `KEY: value` and
//! `KEY value` are all accepted, and a line holding only a key has an empty
//! value. Files are read as UTF-8.

use crate::error::CatalogError;

/// One `key = value` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Property {
    /// One-based line the entry starts on.
    pub line: usize,
    pub key: String,
    pub value: String,
}

/// Parses bundle content into entries, in file order.
///
/// Duplicate keys are kept; the caller decides which one wins.
pub(crate) fn parse_properties(content: &str, origin: &str) -> Result<Vec<Property>, CatalogError> {
    let mut properties = Vec::new();
    let mut lines = content.lines().enumerate();

    while let Some((line_num, raw)) = lines.next() {
        let line = raw.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        // Join continuation lines; leading whitespace of each continued line is dropped.
        let mut logical = line.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (raw_key, raw_value) = split_entry(&logical);
        let key = unescape(raw_key, origin, line_num + 1)?;
        let value = unescape(raw_value, origin, line_num + 1)?;
        if key.is_empty() {
            return Err(CatalogError::syntax(origin, line_num + 1, "empty key"));
        }

        properties.push(Property {
            line: line_num + 1,
            key,
            value,
        });
    }

    Ok(properties)
}

/// A line continues when it ends with an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000C}')
}

/// Splits a logical line at the first unescaped `=`, `:` or blank.
///
/// Blanks around the separator are skipped, along with one `=` or `:`
/// following a blank.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '=' | ':' => return (&line[..i], line[i + 1..].trim_start_matches(is_blank)),
            c if is_blank(c) => {
                let rest = line[i..].trim_start_matches(is_blank);
                let rest = rest
                    .strip_prefix(['=', ':'])
                    .map_or(rest, |value| value.trim_start_matches(is_blank));
                return (&line[..i], rest);
            }
            _ => {}
        }
    }
    (line, "")
}

fn unescape(text: &str, origin: &str, line: usize) -> Result<String, CatalogError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = (hex.len() == 4)
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        CatalogError::syntax(origin, line, format!("invalid escape \\u{hex}"))
                    })?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

// ============================================================================
// TESTS
// ============================================================================
