//! Corpus addressing
//!
//! Provides [`CorpusPath`] for locating a node (and optionally a field
//! inside an example) in the chapter → section → paragraph → variant tree.

use serde::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

/// Level of the corpus tree whose keys or fields were being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Map of chapters (the document root)
    Chapter,
    /// Map of sections inside a chapter
    Section,
    /// Map of paragraphs inside a section
    Paragraph,
    /// Map of named variants inside a paragraph
    Variant,
    /// Fields of an example record
    Example,
    /// Fields of a chapter-specific `kind` payload
    Kind,
}

impl Level {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chapter => "chapter",
            Self::Section => "section",
            Self::Paragraph => "paragraph",
            Self::Variant => "variant",
            Self::Example => "example",
            Self::Kind => "kind",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path within the corpus tree
///
/// Rendered as `chapter/section/paragraph#variant.field`, e.g.
/// `3/2/7#relaxed.kind.reflexive`. The root renders as `<root>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CorpusPath {
    segments: Vec<String>,
    variant: Option<String>,
    fields: Vec<String>,
}

impl CorpusPath {
    /// Empty path (document root)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Path to a paragraph
    #[must_use]
    pub fn paragraph_of(chapter: &str, section: &str, paragraph: &str) -> Self {
        Self::root().child(chapter).child(section).child(paragraph)
    }

    /// Descend one tree level (chapter, section or paragraph key)
    #[must_use]
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.segments.push(key.into());
        path
    }

    /// Select a named variant of the paragraph
    #[must_use]
    pub fn variant(&self, name: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.variant = Some(name.into());
        path
    }

    /// Point at a field inside the addressed example
    #[must_use]
    pub fn field(&self, name: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.fields.push(name.into());
        path
    }

    /// Tree segments (chapter, section, paragraph)
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Chapter key, if any
    #[inline]
    #[must_use]
    pub fn chapter(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Variant name, if any
    #[inline]
    #[must_use]
    pub fn variant_name(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// Field names, outermost first
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Whether this is the document root
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty() && self.variant.is_none() && self.fields.is_empty()
    }
}

impl Display for CorpusPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        f.write_str(&self.segments.join("/"))?;
        if let Some(variant) = &self.variant {
            write!(f, "#{variant}")?;
        }
        for field in &self.fields {
            write!(f, ".{field}")?;
        }
        Ok(())
    }
}

impl Serialize for CorpusPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
