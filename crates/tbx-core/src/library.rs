//! Immutable example library
//!
//! Built once by [`crate::CorpusLoader`]; clones share the same corpus.

use crate::error::NavError;
use crate::loader::SourceMetadata;
use serde::Serialize;
use std::sync::Arc;
use tbx_corpus::{Chapter, Corpus, CorpusPath, Example, ParagraphEntry, SchemaWarning, Section};
use tbx_logic::{resolve_at, ChapterIndex, LogicParams};

#[derive(Debug)]
struct LibraryInner {
    corpus: Corpus,
    metadata: SourceMetadata,
    warnings: Vec<SchemaWarning>,
}

/// Validated corpus shared read-only across consumers
#[derive(Debug, Clone)]
pub struct ExampleLibrary {
    inner: Arc<LibraryInner>,
}

/// An example with its logic parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedExample<'a> {
    /// Full address, including the variant if any
    pub path: CorpusPath,
    /// The example
    pub example: &'a Example,
    /// Parameters for the logic evaluator
    pub params: LogicParams,
}

impl ExampleLibrary {
    /// Wrap a validated corpus
    #[must_use]
    pub fn new(corpus: Corpus, metadata: SourceMetadata, warnings: Vec<SchemaWarning>) -> Self {
        Self {
            inner: Arc::new(LibraryInner {
                corpus,
                metadata,
                warnings,
            }),
        }
    }

    /// The whole corpus
    #[inline]
    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.inner.corpus
    }

    /// Source description
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &SourceMetadata {
        &self.inner.metadata
    }

    /// Warnings raised while validating
    #[inline]
    #[must_use]
    pub fn warnings(&self) -> &[SchemaWarning] {
        &self.inner.warnings
    }

    /// Chapter by index
    ///
    /// # Errors
    /// `NavError::ChapterNotFound` if the corpus has no such chapter
    pub fn chapter(&self, chapter: ChapterIndex) -> Result<&Chapter, NavError> {
        self.corpus()
            .chapter(&chapter.to_string())
            .ok_or(NavError::ChapterNotFound(chapter))
    }

    /// Section of a chapter
    ///
    /// # Errors
    /// `ChapterNotFound` or `SectionNotFound`
    pub fn section(&self, chapter: ChapterIndex, section: &str) -> Result<&Section, NavError> {
        self.chapter(chapter)?
            .section(section)
            .ok_or_else(|| NavError::SectionNotFound {
                path: CorpusPath::root().child(chapter.to_string()).child(section),
            })
    }

    /// Paragraph entry of a section
    ///
    /// # Errors
    /// `ChapterNotFound`, `SectionNotFound` or `ParagraphNotFound`
    pub fn paragraph(
        &self,
        chapter: ChapterIndex,
        section: &str,
        paragraph: &str,
    ) -> Result<&ParagraphEntry, NavError> {
        self.section(chapter, section)?
            .paragraph(paragraph)
            .ok_or_else(|| NavError::ParagraphNotFound {
                path: paragraph_path(chapter, section, paragraph),
            })
    }

    /// One example of a paragraph
    ///
    /// `variant` must be `None` for a single example and name an existing
    /// variant for a variant map.
    ///
    /// # Errors
    /// Lookup errors as [`ExampleLibrary::paragraph`], or `VariantNotFound`
    pub fn example(
        &self,
        chapter: ChapterIndex,
        section: &str,
        paragraph: &str,
        variant: Option<&str>,
    ) -> Result<(CorpusPath, &Example), NavError> {
        let entry = self.paragraph(chapter, section, paragraph)?;
        let path = paragraph_path(chapter, section, paragraph);

        match (entry, variant) {
            (ParagraphEntry::Single(example), None) => Ok((path, example)),
            (ParagraphEntry::Variants(_), Some(name)) => {
                let path = path.variant(name);
                entry
                    .variant(name)
                    .map(|example| (path.clone(), example))
                    .ok_or(NavError::VariantNotFound { path })
            }
            (ParagraphEntry::Single(_), Some(name)) => Err(NavError::VariantNotFound {
                path: path.variant(name),
            }),
            (ParagraphEntry::Variants(_), None) => Err(NavError::VariantNotFound { path }),
        }
    }

    /// Look up an example and resolve its logic parameters
    ///
    /// # Errors
    /// Lookup errors as [`ExampleLibrary::example`], or `NavError::Resolve`
    /// if the example's `kind` is malformed for its chapter
    pub fn resolve(
        &self,
        chapter: ChapterIndex,
        section: &str,
        paragraph: &str,
        variant: Option<&str>,
    ) -> Result<ResolvedExample<'_>, NavError> {
        let (path, example) = self.example(chapter, section, paragraph, variant)?;
        let params = resolve_at(chapter.get(), example, &path)?;
        Ok(ResolvedExample {
            path,
            example,
            params,
        })
    }
}

fn paragraph_path(chapter: ChapterIndex, section: &str, paragraph: &str) -> CorpusPath {
    CorpusPath::paragraph_of(&chapter.to_string(), section, paragraph)
}
