//! Document parsers
//!
//! Turn corpus text into a [`RawValue`]:
//! - TOML (the corpus' native format) via `toml`
//! - JSON via `serde_json`
//! - YAML via `serde_yaml`

use crate::error::ParseError;
use crate::raw::RawValue;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

mod json;
mod toml;
mod yaml;

pub use self::json::JsonParser;
pub use self::toml::TomlParser;
pub use self::yaml::YamlParser;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// TOML
    Toml,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

impl DocumentFormat {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl Display for DocumentFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(ParseError::NoParserForExtension(other.to_owned())),
        }
    }
}

/// Parser trait for converting document text into a raw value
///
/// Implement this trait to add support for new formats.
pub trait DocumentParser: Send + Sync + 'static {
    /// Format handled by this parser
    fn format(&self) -> DocumentFormat;

    /// Parse document text
    ///
    /// # Errors
    /// `ParseError::Syntax` or `ParseError::Empty`
    fn parse(&self, content: &str) -> Result<RawValue, ParseError>;

    /// Supported file extensions (without dot)
    fn extensions(&self) -> &[&str];

    /// Check if this parser can handle the given path
    fn can_parse(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}

/// Parser lookup by path or format
pub struct ParserRegistry {
    parsers: Vec<Box<dyn DocumentParser>>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        default_parsers()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parser_count", &self.parsers.len())
            .field("extensions", &self.all_extensions())
            .finish()
    }
}

impl ParserRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Register a parser; later registrations win for the same format
    pub fn register<P: DocumentParser>(&mut self, parser: P) {
        self.parsers.insert(0, Box::new(parser));
    }

    /// Find parser for path by extension
    #[must_use]
    pub fn find_for_path(&self, path: &Path) -> Option<&dyn DocumentParser> {
        self.parsers.iter().find(|p| p.can_parse(path)).map(|p| &**p)
    }

    /// Find parser for an explicit format
    #[must_use]
    pub fn find_for_format(&self, format: DocumentFormat) -> Option<&dyn DocumentParser> {
        self.parsers.iter().find(|p| p.format() == format).map(|p| &**p)
    }

    /// Parse `content`, choosing the parser from `format` or else `path`
    ///
    /// # Errors
    /// `ParseError::NoParserForExtension` if nothing matches, otherwise
    /// whatever the chosen parser reports
    pub fn parse(
        &self,
        content: &str,
        path: &Path,
        format: Option<DocumentFormat>,
    ) -> Result<RawValue, ParseError> {
        let parser = match format {
            Some(format) => self.find_for_format(format),
            None => self.find_for_path(path),
        }
        .ok_or_else(|| {
            let extension = format.map_or_else(
                || path.extension().and_then(|e| e.to_str()).unwrap_or("").to_owned(),
                |f| f.to_string(),
            );
            ParseError::NoParserForExtension(extension)
        })?;

        tracing::debug!(
            format = %parser.format(),
            path = %path.display(),
            "parsing corpus document"
        );
        parser.parse(content)
    }

    /// Get all registered extensions
    #[must_use]
    pub fn all_extensions(&self) -> Vec<&str> {
        self.parsers
            .iter()
            .flat_map(|p| p.extensions())
            .copied()
            .collect()
    }
}

/// Create registry with the TOML, JSON and YAML parsers
#[must_use]
pub fn default_parsers() -> ParserRegistry {
    let mut registry = ParserRegistry::new();
    registry.register(YamlParser);
    registry.register(JsonParser);
    registry.register(TomlParser);
    registry
}
