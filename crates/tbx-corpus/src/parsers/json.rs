//! JSON corpus parser

use super::{DocumentFormat, DocumentParser};
use crate::error::ParseError;
use crate::raw::RawValue;

/// JSON parser
///
/// Duplicate object keys are kept so the validator can report them.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl DocumentParser for JsonParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Json
    }

    fn parse(&self, content: &str) -> Result<RawValue, ParseError> {
        if content.trim().is_empty() {
            return Err(ParseError::Empty(DocumentFormat::Json));
        }
        serde_json::from_str(content)
            .map_err(|e| ParseError::syntax(DocumentFormat::Json, e.to_string()))
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_object() {
        let raw = JsonParser.parse(r#"{"1": {"2": {"a": {"conclusion": "p"}}}}"#).unwrap();
        assert!(raw.as_table().is_some_and(|t| t.contains_key("1")));
    }

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(JsonParser.parse("  \n"), Err(ParseError::Empty(DocumentFormat::Json))));
    }

    #[test]
    fn syntax_error() {
        let err = JsonParser.parse("{").unwrap_err();
        assert!(err.to_string().starts_with("syntax error in json document"));
    }
}
