//! Error types for the corpus
//!
//! Provides error handling for:
//! - Parse operations (text → RawValue)
//! - Schema validation (RawValue → Corpus, and `kind` payloads)

use crate::parsers::DocumentFormat;
use crate::path::{CorpusPath, Level};

/// Errors while turning document text into a [`crate::RawValue`]
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No parser registered for file extension
    #[error("no parser registered for extension: '{0}'")]
    NoParserForExtension(String),

    /// Syntax error in the document
    #[error("syntax error in {format} document: {message}")]
    Syntax {
        format: DocumentFormat,
        message: String,
    },

    /// Document has no content
    #[error("empty {0} document")]
    Empty(DocumentFormat),
}

impl ParseError {
    /// Create syntax error for format
    pub fn syntax(format: DocumentFormat, message: impl Into<String>) -> Self {
        Self::Syntax {
            format,
            message: message.into(),
        }
    }
}

/// A value does not match the expected shape at a given path
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// Wrong value type
    #[error("{level} level: expected {expected} at {path}, found {found}")]
    TypeMismatch {
        level: Level,
        path: CorpusPath,
        expected: &'static str,
        found: &'static str,
    },

    /// Required field absent
    #[error("missing required field `{field}` at {path}")]
    MissingField {
        path: CorpusPath,
        field: &'static str,
    },

    /// Empty string used as a key
    #[error("{level} level: empty key at {path}")]
    EmptyKey { level: Level, path: CorpusPath },

    /// Paragraph is neither an example nor a map of examples
    #[error("paragraph at {path} is neither an example ({as_example}) nor a map of examples ({as_variants})")]
    InvalidParagraph {
        path: CorpusPath,
        as_example: Box<SchemaError>,
        as_variants: Box<SchemaError>,
    },
}

impl SchemaError {
    /// Create type mismatch error
    pub fn type_mismatch(
        level: Level,
        path: CorpusPath,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            level,
            path,
            expected,
            found,
        }
    }

    /// Path of the offending node
    #[must_use]
    pub fn path(&self) -> &CorpusPath {
        match self {
            Self::TypeMismatch { path, .. }
            | Self::MissingField { path, .. }
            | Self::EmptyKey { path, .. }
            | Self::InvalidParagraph { path, .. } => path,
        }
    }

    /// Tree level the check applied to
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            Self::TypeMismatch { level, .. } | Self::EmptyKey { level, .. } => *level,
            Self::MissingField { .. } => Level::Example,
            Self::InvalidParagraph { .. } => Level::Paragraph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = ParseError::NoParserForExtension("ini".to_string());
        assert_eq!(err.to_string(), "no parser registered for extension: 'ini'");
    }

    #[test]
    fn schema_error_display_names_level_and_path() {
        let err = SchemaError::type_mismatch(
            Level::Chapter,
            CorpusPath::root(),
            "table",
            "string",
        );
        assert_eq!(
            err.to_string(),
            "chapter level: expected table at <root>, found string"
        );
        assert_eq!(err.level(), Level::Chapter);
    }

    #[test]
    fn missing_field_is_example_level() {
        let err = SchemaError::MissingField {
            path: CorpusPath::paragraph_of("1", "1", "a"),
            field: "conclusion",
        };
        assert_eq!(err.level(), Level::Example);
        assert_eq!(err.path().to_string(), "1/1/a");
    }
}
