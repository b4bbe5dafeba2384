//! YAML corpus parser
//!
//! Numeric keys (`1:`) are accepted and stringified, so chapter and section
//! numbers need no quoting.

use super::{DocumentFormat, DocumentParser};
use crate::error::ParseError;
use crate::raw::RawValue;

/// YAML parser
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl DocumentParser for YamlParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Yaml
    }

    fn parse(&self, content: &str) -> Result<RawValue, ParseError> {
        let value: RawValue = serde_yaml::from_str(content)
            .map_err(|e| ParseError::syntax(DocumentFormat::Yaml, e.to_string()))?;

        if matches!(value, RawValue::Null) {
            return Err(ParseError::Empty(DocumentFormat::Yaml));
        }
        Ok(value)
    }

    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
