//! Corpus schema validation
//!
//! Checks an untyped [`RawValue`] against the corpus shape and builds the
//! typed tree:
//!
//! ```text
//! chapter → section → paragraph → Example | { variant → Example }
//! ```
//!
//! A paragraph value is first read as a single [`Example`]; only if that
//! fails is it read as a map of named variants. A table that has a
//! `conclusion` key is therefore always an example, never a variant map.
//!
//! `kind` is kept unvalidated: its shape depends on the chapter, which is
//! not known here. [`FieldReader`] is public so chapter-aware code checks it
//! with the same rules.

use crate::error::SchemaError;
use crate::model::{Chapter, Corpus, Example, ParagraphEntry, Section};
use crate::path::{CorpusPath, Level};
use crate::raw::{RawTable, RawValue};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

/// Fields an example record may carry
pub const EXAMPLE_FIELDS: [&str; 4] = ["premises", "conclusion", "holds", "kind"];

/// Validation result: the typed corpus plus non-fatal findings
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    /// The validated tree
    pub corpus: Corpus,
    /// Findings that did not prevent validation
    pub warnings: Vec<SchemaWarning>,
}

impl Validated {
    /// Whether any warnings were raised
    #[inline]
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Drop the warnings
    #[inline]
    #[must_use]
    pub fn into_corpus(self) -> Corpus {
        self.corpus
    }
}

/// Non-fatal schema findings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum SchemaWarning {
    /// The same key appears more than once; the last occurrence wins
    DuplicateKey { level: Level, path: CorpusPath },

    /// An example carries a field that is not part of the schema
    UnknownField { path: CorpusPath, field: String },

    /// A paragraph is an empty map of variants
    EmptyVariants { path: CorpusPath },
}

impl SchemaWarning {
    /// Path the warning refers to
    #[must_use]
    pub fn path(&self) -> &CorpusPath {
        match self {
            Self::DuplicateKey { path, .. }
            | Self::UnknownField { path, .. }
            | Self::EmptyVariants { path } => path,
        }
    }
}

impl Display for SchemaWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey { level, path } => {
                write!(f, "duplicate {level} key at {path}; keeping the last occurrence")
            }
            Self::UnknownField { path, field } => {
                write!(f, "unknown field `{field}` at {path} is ignored")
            }
            Self::EmptyVariants { path } => write!(f, "paragraph at {path} has no examples"),
        }
    }
}

/// Typed access to the fields of a table-shaped value
///
/// Lookups follow last-write-wins. Type errors point at `path.field`.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    table: &'a RawTable,
    level: Level,
    path: CorpusPath,
}

impl<'a> FieldReader<'a> {
    /// Wrap a value that must be a table
    ///
    /// # Errors
    /// `SchemaError::TypeMismatch` if `value` is not a table
    pub fn new(value: &'a RawValue, level: Level, path: CorpusPath) -> Result<Self, SchemaError> {
        let table = expect_table(value, level, &path)?;
        Ok(Self { table, level, path })
    }

    /// Path of the table being read
    #[inline]
    #[must_use]
    pub fn path(&self) -> &CorpusPath {
        &self.path
    }

    /// Required string field
    ///
    /// # Errors
    /// `MissingField` when absent, `TypeMismatch` when not a string
    pub fn required_str(&self, field: &'static str) -> Result<&'a str, SchemaError> {
        match self.table.get(field) {
            None => Err(SchemaError::MissingField {
                path: self.path.clone(),
                field,
            }),
            Some(value) => value
                .as_str()
                .ok_or_else(|| self.mismatch(field, "string", value)),
        }
    }

    /// Optional string field
    ///
    /// # Errors
    /// `TypeMismatch` when present but not a string
    pub fn optional_str(&self, field: &str) -> Result<Option<&'a str>, SchemaError> {
        self.table
            .get(field)
            .map(|value| value.as_str().ok_or_else(|| self.mismatch(field, "string", value)))
            .transpose()
    }

    /// Optional boolean field
    ///
    /// # Errors
    /// `TypeMismatch` when present but not a boolean
    pub fn optional_bool(&self, field: &str) -> Result<Option<bool>, SchemaError> {
        self.table
            .get(field)
            .map(|value| value.as_bool().ok_or_else(|| self.mismatch(field, "boolean", value)))
            .transpose()
    }

    /// Optional field of any shape
    #[inline]
    #[must_use]
    pub fn optional(&self, field: &str) -> Option<&'a RawValue> {
        self.table.get(field)
    }

    /// Fields not listed in `known`, each reported once
    #[must_use]
    pub fn unknown_fields(&self, known: &[&str]) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.table
            .keys()
            .filter(|key| !known.contains(key) && seen.insert(*key))
            .collect()
    }

    /// Fields that appear more than once, each reported once
    #[must_use]
    pub fn duplicate_keys(&self) -> Vec<&'a str> {
        duplicates(self.table.keys())
    }

    fn mismatch(&self, field: &str, expected: &'static str, value: &RawValue) -> SchemaError {
        SchemaError::type_mismatch(self.level, self.path.field(field), expected, value.type_name())
    }
}

/// Recursive corpus schema validator
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator {
    report_unknown_fields: bool,
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self {
            report_unknown_fields: true,
        }
    }
}

impl SchemaValidator {
    /// Create new validator instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether unknown example fields produce a warning (default: yes)
    #[inline]
    #[must_use]
    pub fn report_unknown_fields(mut self, report: bool) -> Self {
        self.report_unknown_fields = report;
        self
    }

    /// Validate a raw document into a [`Corpus`]
    ///
    /// No partial corpus is returned: the first structural error aborts.
    ///
    /// # Errors
    /// - `TypeMismatch` with level `chapter` if the root is not a table
    /// - `TypeMismatch`, `MissingField` or `EmptyKey` at the offending path
    /// - `InvalidParagraph` if a paragraph matches neither union arm
    pub fn validate(&self, raw: &RawValue) -> Result<Validated, SchemaError> {
        let mut warnings = Vec::new();
        let root = CorpusPath::root();
        let table = expect_table(raw, Level::Chapter, &root)?;

        let chapters =
            self.collect_level(table, Level::Chapter, &root, &mut warnings, Self::parse_chapter)?;

        let corpus = Corpus::new(chapters);
        tracing::debug!(
            chapters = corpus.len(),
            examples = corpus.example_count(),
            warnings = warnings.len(),
            "corpus schema validated"
        );

        Ok(Validated { corpus, warnings })
    }

    /// Read every entry of one tree level, rejecting empty keys and
    /// reporting duplicates
    fn collect_level<T, F>(
        &self,
        table: &RawTable,
        level: Level,
        parent: &CorpusPath,
        warnings: &mut Vec<SchemaWarning>,
        mut parse: F,
    ) -> Result<IndexMap<String, T>, SchemaError>
    where
        F: FnMut(&Self, &CorpusPath, &RawValue, &mut Vec<SchemaWarning>) -> Result<T, SchemaError>,
    {
        let mut out = IndexMap::with_capacity(table.len());

        for (key, value) in table.iter() {
            let path = match level {
                Level::Variant => parent.variant(key),
                _ => parent.child(key),
            };
            if key.is_empty() {
                return Err(SchemaError::EmptyKey { level, path });
            }

            let parsed = parse(self, &path, value, warnings)?;
            if out.insert(key.to_owned(), parsed).is_some() {
                warnings.push(SchemaWarning::DuplicateKey { level, path });
            }
        }

        Ok(out)
    }

    fn parse_chapter(
        &self,
        path: &CorpusPath,
        value: &RawValue,
        warnings: &mut Vec<SchemaWarning>,
    ) -> Result<Chapter, SchemaError> {
        let table = expect_table(value, Level::Section, path)?;
        let sections =
            self.collect_level(table, Level::Section, path, warnings, Self::parse_section)?;
        Ok(Chapter::new(sections))
    }

    fn parse_section(
        &self,
        path: &CorpusPath,
        value: &RawValue,
        warnings: &mut Vec<SchemaWarning>,
    ) -> Result<Section, SchemaError> {
        let table = expect_table(value, Level::Paragraph, path)?;
        let paragraphs =
            self.collect_level(table, Level::Paragraph, path, warnings, Self::parse_entry)?;
        Ok(Section::new(paragraphs))
    }

    fn parse_entry(
        &self,
        path: &CorpusPath,
        value: &RawValue,
        warnings: &mut Vec<SchemaWarning>,
    ) -> Result<ParagraphEntry, SchemaError> {
        let table = expect_table(value, Level::Example, path)?;

        let mut attempt = Vec::new();
        let as_example = match self.parse_example(path, value, &mut attempt) {
            Ok(example) => {
                warnings.append(&mut attempt);
                return Ok(ParagraphEntry::Single(example));
            }
            Err(err) => err,
        };

        attempt.clear();
        match self.collect_level(table, Level::Variant, path, &mut attempt, Self::parse_example) {
            Ok(variants) => {
                if variants.is_empty() {
                    attempt.push(SchemaWarning::EmptyVariants { path: path.clone() });
                }
                warnings.append(&mut attempt);
                Ok(ParagraphEntry::Variants(variants))
            }
            Err(as_variants) => Err(SchemaError::InvalidParagraph {
                path: path.clone(),
                as_example: Box::new(as_example),
                as_variants: Box::new(as_variants),
            }),
        }
    }

    fn parse_example(
        &self,
        path: &CorpusPath,
        value: &RawValue,
        warnings: &mut Vec<SchemaWarning>,
    ) -> Result<Example, SchemaError> {
        let reader = FieldReader::new(value, Level::Example, path.clone())?;

        let mut example = Example::new(reader.required_str("conclusion")?);
        if let Some(premises) = reader.optional_str("premises")? {
            example = example.with_premises(premises);
        }
        if let Some(holds) = reader.optional_bool("holds")? {
            example = example.with_holds(holds);
        }
        if let Some(kind) = reader.optional("kind") {
            if let Some(table) = kind.as_table() {
                let kind_path = path.field("kind");
                for key in duplicates(table.keys()) {
                    warnings.push(SchemaWarning::DuplicateKey {
                        level: Level::Kind,
                        path: kind_path.field(key),
                    });
                }
            }
            example = example.with_kind(kind.clone());
        }

        for key in reader.duplicate_keys() {
            warnings.push(SchemaWarning::DuplicateKey {
                level: Level::Example,
                path: path.field(key),
            });
        }
        if self.report_unknown_fields {
            for field in reader.unknown_fields(&EXAMPLE_FIELDS) {
                warnings.push(SchemaWarning::UnknownField {
                    path: path.clone(),
                    field: field.to_owned(),
                });
            }
        }

        Ok(example)
    }
}

/// Validate a raw document with the default [`SchemaValidator`]
///
/// # Errors
/// See [`SchemaValidator::validate`]
pub fn validate(raw: &RawValue) -> Result<Validated, SchemaError> {
    SchemaValidator::new().validate(raw)
}

fn expect_table<'a>(
    value: &'a RawValue,
    level: Level,
    path: &CorpusPath,
) -> Result<&'a RawTable, SchemaError> {
    value
        .as_table()
        .ok_or_else(|| SchemaError::type_mismatch(level, path.clone(), "table", value.type_name()))
}

fn duplicates<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    keys.filter(|key| !seen.insert(*key) && reported.insert(*key))
        .collect()
}
