//! Corpus loader
//!
//! The one component that touches the filesystem. Runs once at startup:
//!
//! ```text
//! read → (normalize source) → parse → validate → (normalize fields) → ExampleLibrary
//! ```
//!
//! Any failure aborts the load; no partially validated corpus escapes.

use crate::config::{NormalizeStage, PlaygroundConfig};
use crate::error::LoadError;
use crate::library::ExampleLibrary;
use serde::Serialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tbx_corpus::parsers::{default_parsers, DocumentFormat, DocumentParser, ParserRegistry};
use tbx_corpus::{SchemaValidator, Validated};
use tbx_symbol::{normalize, normalize_with_report, BuiltinCatalog, CatalogValidator, SymbolCatalog};

/// Where the corpus came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceMetadata {
    /// File path, `None` for in-memory text
    pub path: Option<PathBuf>,
    /// Raw text length in bytes
    pub bytes: usize,
    /// BLAKE3 of the raw text, hex encoded
    pub checksum: String,
}

impl SourceMetadata {
    /// Describe raw corpus text
    #[must_use]
    pub fn compute(path: Option<&Path>, content: &str) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            bytes: content.len(),
            checksum: blake3::hash(content.as_bytes()).to_hex().to_string(),
        }
    }
}

/// Corpus loader
///
/// Owns the parser registry, the schema validator and the symbol catalog.
#[derive(Debug)]
pub struct CorpusLoader<C = BuiltinCatalog> {
    config: PlaygroundConfig,
    parsers: ParserRegistry,
    validator: SchemaValidator,
    catalog: C,
}

impl CorpusLoader {
    /// Create loader with the built-in symbol catalog
    #[inline]
    #[must_use]
    pub fn new(config: PlaygroundConfig) -> Self {
        Self::with_catalog(config, BuiltinCatalog)
    }
}

impl<C: SymbolCatalog> CorpusLoader<C> {
    /// Create loader with a custom symbol catalog
    #[must_use]
    pub fn with_catalog(config: PlaygroundConfig, catalog: C) -> Self {
        Self {
            config,
            parsers: default_parsers(),
            validator: SchemaValidator::new(),
            catalog,
        }
    }

    /// Register an additional document parser
    #[must_use]
    pub fn with_parser<P: DocumentParser>(mut self, parser: P) -> Self {
        self.parsers.register(parser);
        self
    }

    /// With schema validator
    #[inline]
    #[must_use]
    pub fn with_validator(mut self, validator: SchemaValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    /// Load the configured corpus file
    ///
    /// # Errors
    /// See [`CorpusLoader::load_path`]
    pub async fn load(&self) -> Result<ExampleLibrary, LoadError> {
        self.load_path(&self.config.corpus_path).await
    }

    /// Load a corpus file
    ///
    /// # Errors
    /// - `LoadError::Catalog` if the symbol catalog is misordered
    /// - `LoadError::Io` if the file cannot be read
    /// - `LoadError::TooLarge` if it exceeds `max_file_size`
    /// - `LoadError::Parse` or `LoadError::Schema` for malformed content
    /// - `LoadError::DeniedWarnings` if warnings exist and `deny_warnings` is set
    pub async fn load_path(&self, path: impl AsRef<Path>) -> Result<ExampleLibrary, LoadError> {
        let path = path.as_ref();

        let size = tokio::fs::metadata(path)
            .await
            .map_err(|e| LoadError::io_error(path, e))?
            .len();
        if size > self.config.max_file_size {
            return Err(LoadError::TooLarge {
                size,
                max: self.config.max_file_size,
            });
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoadError::io_error(path, e))?;

        self.build(&content, Some(path), self.config.format)
    }

    /// Load corpus text already in memory
    ///
    /// # Errors
    /// Same as [`CorpusLoader::load_path`], minus I/O
    pub fn load_str(
        &self,
        content: &str,
        format: DocumentFormat,
    ) -> Result<ExampleLibrary, LoadError> {
        self.build(content, None, Some(format))
    }

    fn build(
        &self,
        content: &str,
        path: Option<&Path>,
        format: Option<DocumentFormat>,
    ) -> Result<ExampleLibrary, LoadError> {
        CatalogValidator::new().validate(&self.catalog)?;

        let metadata = SourceMetadata::compute(path, content);
        let stage = self.config.normalize_stage;

        let text = match stage {
            NormalizeStage::Source => {
                let (text, report) = normalize_with_report(content, &self.catalog);
                tracing::debug!(
                    rules = report.rules_applied,
                    replacements = report.replacements,
                    "normalized corpus source"
                );
                Cow::Owned(text)
            }
            NormalizeStage::Fields => Cow::Borrowed(content),
        };

        let raw = self
            .parsers
            .parse(&text, path.unwrap_or_else(|| Path::new("")), format)?;
        let Validated { corpus, warnings } = self.validator.validate(&raw)?;

        for warning in &warnings {
            tracing::warn!(path = %warning.path(), "{warning}");
        }
        if self.config.deny_warnings && !warnings.is_empty() {
            return Err(LoadError::DeniedWarnings { warnings });
        }

        let corpus = match stage {
            NormalizeStage::Fields => corpus.map_text(|field| normalize(field, &self.catalog)),
            NormalizeStage::Source => corpus,
        };

        tracing::info!(
            chapters = corpus.len(),
            examples = corpus.example_count(),
            warnings = warnings.len(),
            checksum = %metadata.checksum,
            %stage,
            "loaded example corpus"
        );

        Ok(ExampleLibrary::new(corpus, metadata, warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tbx_symbol::PairCatalog;

    const CORPUS: &str = r#"
[1.1.a]
premises = "p > q, p"
conclusion = "q"
holds = true

[2.3.b.first]
conclusion = "[]p > <>p"
"#;

    fn loader(stage: NormalizeStage) -> CorpusLoader {
        CorpusLoader::new(PlaygroundConfig::new().with_normalize_stage(stage))
    }

    #[test]
    fn fields_stage_normalizes_text_fields() {
        let library = loader(NormalizeStage::Fields)
            .load_str(CORPUS, DocumentFormat::Toml)
            .unwrap();
        let examples = library.corpus().examples();

        let (_, first) = &examples[0];
        assert_eq!(first.premises(), Some("p ⊃ q, p"));

        let (path, second) = &examples[1];
        assert_eq!(path.to_string(), "2/3/b#first");
        assert_eq!(second.conclusion(), "□p ⊃ ◇p");
    }

    #[test]
    fn both_stages_agree_on_plain_corpus() {
        let fields = loader(NormalizeStage::Fields).load_str(CORPUS, DocumentFormat::Toml).unwrap();
        let source = loader(NormalizeStage::Source).load_str(CORPUS, DocumentFormat::Toml).unwrap();
        assert_eq!(fields.corpus(), source.corpus());
    }

    #[test]
    fn source_stage_rewrites_syntax() {
        let doc = "[1.1.a]\nconclusion = \"p\"\nkind = []\n";
        let fields = loader(NormalizeStage::Fields).load_str(doc, DocumentFormat::Toml);
        let source = loader(NormalizeStage::Source).load_str(doc, DocumentFormat::Toml);
        assert!(fields.is_ok());
        assert!(matches!(source, Err(LoadError::Parse(_))));
    }

    #[test]
    fn metadata_checksum() {
        let library = loader(NormalizeStage::Fields)
            .load_str(CORPUS, DocumentFormat::Toml)
            .unwrap();
        let metadata = library.metadata();
        assert_eq!(metadata.path, None);
        assert_eq!(metadata.bytes, CORPUS.len());
        assert_eq!(metadata.checksum, blake3::hash(CORPUS.as_bytes()).to_hex().to_string());
    }

    #[test]
    fn misordered_catalog_is_rejected() {
        let catalog = PairCatalog::new().with_pair(">", "⊃").with_pair("<>", "◇");
        let loader = CorpusLoader::with_catalog(PlaygroundConfig::new(), catalog);
        assert!(matches!(
            loader.load_str(CORPUS, DocumentFormat::Toml),
            Err(LoadError::Catalog(_))
        ));
    }

    #[test]
    fn deny_warnings() {
        let doc = "[1.1.a]\nconclusion = \"p\"\nnote = \"x\"\n";
        let lenient = CorpusLoader::new(PlaygroundConfig::new())
            .load_str(doc, DocumentFormat::Toml)
            .unwrap();
        assert_eq!(lenient.warnings().len(), 1);

        let strict = CorpusLoader::new(PlaygroundConfig::new().with_deny_warnings(true));
        assert!(matches!(
            strict.load_str(doc, DocumentFormat::Toml),
            Err(LoadError::DeniedWarnings { .. })
        ));
    }

    #[test]
    fn schema_error_aborts_load() {
        let doc = "[1.1.a]\npremises = \"p\"\n";
        let err = loader(NormalizeStage::Fields).load_str(doc, DocumentFormat::Toml).unwrap_err();
        assert!(matches!(err, LoadError::Schema(_)));
    }
}
