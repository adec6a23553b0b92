//! Positional message templates
//!
//! Template syntax:
//!
//! - `{n}` is replaced by the `n`-th argument (zero-based); placeholders may
//!   repeat and appear in any order.
//! - `'` starts a literal section that runs until the next `'`, so `'{0}'`
//!   renders as the text `{0}`.
//! - `''` is a literal apostrophe, inside or outside a literal section.
//!
//! Templates are parsed once, when a bundle is loaded, so syntax errors
//! surface at startup instead of on the failing path of a check.

use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, TemplateSyntaxError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Argument(usize),
}

/// A parsed message template.
///
/// # Examples
///
/// ```
/// use tiny_preconditions::message::Template;
///
/// let template = Template::parse("{0} should be between {1} and {2}").unwrap();
/// let message = template.render(&[&"age", &18, &130]).unwrap();
/// assert_eq!(message, "age should be between 18 and 130");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template.
    pub fn parse(source: &str) -> Result<Self, TemplateSyntaxError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut quote_start: Option<usize> = None;
        let mut chars = source.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            match c {
                '\'' => {
                    if chars.next_if(|&(_, next)| next == '\'').is_some() {
                        literal.push('\'');
                    } else if quote_start.is_some() {
                        quote_start = None;
                    } else {
                        quote_start = Some(position);
                    }
                }
                _ if quote_start.is_some() => literal.push(c),
                '{' => {
                    let mut text = String::new();
                    let mut closed = false;
                    for (_, next) in chars.by_ref() {
                        if next == '}' {
                            closed = true;
                            break;
                        }
                        text.push(next);
                    }
                    if !closed {
                        return Err(TemplateSyntaxError::UnclosedPlaceholder { position });
                    }

                    let index = parse_index(&text)
                        .ok_or(TemplateSyntaxError::InvalidIndex { position, text })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Argument(index));
                }
                '}' => return Err(TemplateSyntaxError::UnmatchedBrace { position }),
                _ => literal.push(c),
            }
        }

        if let Some(position) = quote_start {
            return Err(TemplateSyntaxError::UnterminatedQuote { position });
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The template text as written in the bundle.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Highest argument index referenced, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Argument(index) => Some(*index),
                Segment::Literal(_) => None,
            })
            .max()
    }

    /// Renders the template with positional arguments.
    ///
    /// Extra arguments are ignored; a referenced argument that is missing
    /// is an error.
    pub fn render(&self, args: &[&dyn fmt::Display]) -> Result<String, CatalogError> {
        let mut out = String::with_capacity(self.source.len() + 32);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Argument(index) => {
                    let arg = args.get(*index).ok_or(CatalogError::MissingArgument {
                        index: *index,
                        supplied: args.len(),
                    })?;
                    out.push_str(&arg.to_string());
                }
            }
        }
        Ok(out)
    }
}

/// Parses the inside of a placeholder: ASCII digits, optionally padded.
fn parse_index(text: &str) -> Option<usize> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Template {
    type Err = TemplateSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// TESTS
// ============================================================================
