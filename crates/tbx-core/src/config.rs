//! Playground configuration
//!
//! Sources, lowest precedence first: [`Default`], a TOML file
//! ([`PlaygroundConfig::from_toml_file`]), environment variables
//! ([`PlaygroundConfig::with_env_overrides`]), command-line flags.
//!
//! ```toml
//! corpus_path = "data/examples.toml"
//! normalize_stage = "fields"
//! max_file_size = 1048576
//! deny_warnings = true
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tbx_corpus::parsers::DocumentFormat;

/// Environment variable holding the corpus file path
pub const CORPUS_PATH_ENV: &str = "EXAMPLES_GRAHAM_PRIEST_PATH";

/// Environment variable selecting the [`NormalizeStage`]
pub const NORMALIZE_STAGE_ENV: &str = "TBX_NORMALIZE_STAGE";

/// Default corpus size limit (10MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// When symbol normalization runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeStage {
    /// Whole document text, before parsing
    ///
    /// Mnemonics such as `[]` are also rewritten in keys and syntax.
    Source,
    /// Only `premises` and `conclusion`, after validation
    #[default]
    Fields,
}

impl NormalizeStage {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Fields => "fields",
        }
    }
}

impl Display for NormalizeStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizeStage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "source" => Ok(Self::Source),
            "fields" => Ok(Self::Fields),
            _ => Err(ConfigError::invalid_value(
                "normalize_stage",
                s,
                "expected 'source' or 'fields'",
            )),
        }
    }
}

/// Playground configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaygroundConfig {
    /// Corpus file
    pub corpus_path: PathBuf,
    /// Document format; inferred from the file extension when `None`
    pub format: Option<DocumentFormat>,
    /// When symbol normalization runs
    pub normalize_stage: NormalizeStage,
    /// Maximum corpus size in bytes
    pub max_file_size: u64,
    /// Treat schema warnings as load errors
    pub deny_warnings: bool,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from("examples.toml"),
            format: None,
            normalize_stage: NormalizeStage::default(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            deny_warnings: false,
        }
    }
}

impl PlaygroundConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by the environment
    ///
    /// # Errors
    /// `ConfigError::InvalidValue` if a variable holds an unusable value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Read a TOML configuration file; missing keys keep their defaults
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - `ConfigError::Toml` if it is not valid configuration
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML configuration text
    ///
    /// # Errors
    /// `ConfigError::Toml` if it is not valid configuration
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply [`CORPUS_PATH_ENV`] and [`NORMALIZE_STAGE_ENV`] when set
    ///
    /// # Errors
    /// `ConfigError::InvalidValue` if a variable holds an unusable value
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// # Errors
    /// `ConfigError::InvalidValue` if a variable holds an unusable value
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = lookup(CORPUS_PATH_ENV) {
            if path.trim().is_empty() {
                return Err(ConfigError::invalid_value(CORPUS_PATH_ENV, &path, "empty path"));
            }
            self.corpus_path = PathBuf::from(path);
        }
        if let Some(stage) = lookup(NORMALIZE_STAGE_ENV) {
            self.normalize_stage = stage.parse()?;
        }
        Ok(self)
    }

    /// With corpus path
    #[inline]
    #[must_use]
    pub fn with_corpus_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corpus_path = path.into();
        self
    }

    /// With explicit document format
    #[inline]
    #[must_use]
    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// With normalization stage
    #[inline]
    #[must_use]
    pub fn with_normalize_stage(mut self, stage: NormalizeStage) -> Self {
        self.normalize_stage = stage;
        self
    }

    /// With maximum corpus size
    #[inline]
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// With warnings treated as errors
    #[inline]
    #[must_use]
    pub fn with_deny_warnings(mut self, deny: bool) -> Self {
        self.deny_warnings = deny;
        self
    }
}
