//! Error types for the playground core
//!
//! Provides error handling for:
//! - Configuration loading
//! - Corpus loading (fatal to startup)
//! - Navigation and per-example resolution (local to one lookup)

use std::path::{Path, PathBuf};
use tbx_corpus::{CorpusPath, ParseError, SchemaError, SchemaWarning};
use tbx_logic::{ChapterIndex, ResolveError};
use tbx_symbol::CatalogError;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML configuration
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// A setting has an unusable value
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Create I/O error for path
    pub fn io_error(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create invalid value error
    pub fn invalid_value(key: impl Into<String>, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Corpus loading errors
///
/// Every variant aborts startup; no partial corpus is served.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Symbol catalog ordering would corrupt text
    #[error("invalid symbol catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Corpus file could not be read
    #[error("failed to read corpus {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Corpus file exceeds the configured size limit
    #[error("corpus too large: {size} bytes (max: {max})")]
    TooLarge { size: u64, max: u64 },

    /// Document text could not be parsed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Document does not match the corpus shape
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Warnings were raised and `deny_warnings` is set
    #[error(
        "{} schema warning(s) denied; first: {}",
        .warnings.len(),
        .warnings.first().map(ToString::to_string).unwrap_or_default()
    )]
    DeniedWarnings { warnings: Vec<SchemaWarning> },
}

impl LoadError {
    /// Create I/O error for path
    pub fn io_error(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Navigation errors
///
/// Local to one lookup; sibling lookups are unaffected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NavError {
    /// Chapter segment is not a supported chapter number
    #[error("invalid chapter: '{0}'")]
    InvalidChapter(String),

    /// Supported chapter with no entries in the corpus
    #[error("chapter {0} not found")]
    ChapterNotFound(ChapterIndex),

    /// No such section in the chapter
    #[error("section not found: {path}")]
    SectionNotFound { path: CorpusPath },

    /// No such paragraph in the section
    #[error("example not found: {path}")]
    ParagraphNotFound { path: CorpusPath },

    /// Variant missing, or requested from a single-example paragraph
    #[error("variant not found: {path}")]
    VariantNotFound { path: CorpusPath },

    /// Logic parameters could not be resolved
    #[error("resolution failed: {0}")]
    Resolve(#[from] ResolveError),
}

impl NavError {
    /// HTTP status a route layer should answer with
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidChapter(_) => 400,
            Self::ChapterNotFound(_)
            | Self::SectionNotFound { .. }
            | Self::ParagraphNotFound { .. }
            | Self::VariantNotFound { .. } => 404,
            Self::Resolve(err) if err.is_invalid_chapter() => 400,
            Self::Resolve(_) => 500,
        }
    }

    /// Check if this is a "not found" condition
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status_code() == 404
    }
}
