//! TOML corpus parser
//!
//! TOML is the corpus' authoring format: chapters and sections are table
//! headers, paragraphs are sub-tables.
//!
//! ```toml
//! [1.4.a]
//! premises = "p > q, p"
//! conclusion = "q"
//! holds = true
//! ```
//!
//! Duplicate keys are a syntax error in TOML, so the validator never sees
//! them from this parser.

use super::{DocumentFormat, DocumentParser};
use crate::error::ParseError;
use crate::raw::RawValue;

/// TOML parser
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlParser;

impl TomlParser {
    /// Create new TOML parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentParser for TomlParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Toml
    }

    fn parse(&self, content: &str) -> Result<RawValue, ParseError> {
        ::toml::from_str(content)
            .map_err(|e| ParseError::syntax(DocumentFormat::Toml, e.to_string()))
    }

    fn extensions(&self) -> &[&str] {
        &["toml"]
    }
}
