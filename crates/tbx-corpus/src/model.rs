//! Typed corpus tree
//!
//! Chapter → section → paragraph → [`ParagraphEntry`]. Every map keeps
//! source document order. Values are built by the schema validator and are
//! read-only afterwards.

use crate::path::CorpusPath;
use crate::raw::RawValue;
use indexmap::IndexMap;
use serde::Serialize;

/// Separator between premises in [`Example::premises`]
pub const PREMISE_SEPARATOR: char = ',';

/// Turnstile used by [`Example::argument`]
pub const TURNSTILE: &str = "⊢";

/// One inference: premises, a conclusion and optional metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Example {
    #[serde(skip_serializing_if = "Option::is_none")]
    premises: Option<String>,
    conclusion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    holds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<RawValue>,
}

impl Example {
    /// Create example with only a conclusion
    #[inline]
    #[must_use]
    pub fn new(conclusion: impl Into<String>) -> Self {
        Self {
            premises: None,
            conclusion: conclusion.into(),
            holds: None,
            kind: None,
        }
    }

    /// With premises text
    #[inline]
    #[must_use]
    pub fn with_premises(mut self, premises: impl Into<String>) -> Self {
        self.premises = Some(premises.into());
        self
    }

    /// With expected validity
    #[inline]
    #[must_use]
    pub fn with_holds(mut self, holds: bool) -> Self {
        self.holds = Some(holds);
        self
    }

    /// With chapter-specific kind payload
    #[inline]
    #[must_use]
    pub fn with_kind(mut self, kind: RawValue) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Premises text as written, if any
    #[inline]
    #[must_use]
    pub fn premises(&self) -> Option<&str> {
        self.premises.as_deref()
    }

    /// Conclusion text
    #[inline]
    #[must_use]
    pub fn conclusion(&self) -> &str {
        &self.conclusion
    }

    /// Expected validity of the inference, if stated
    #[inline]
    #[must_use]
    pub fn holds(&self) -> Option<bool> {
        self.holds
    }

    /// Unvalidated kind payload; interpret it with the owning chapter
    #[inline]
    #[must_use]
    pub fn kind(&self) -> Option<&RawValue> {
        self.kind.as_ref()
    }

    /// Individual premises, trimmed, blanks dropped
    ///
    /// Absent premises mean zero premises.
    #[must_use]
    pub fn premise_list(&self) -> Vec<&str> {
        self.premises
            .as_deref()
            .map(|text| {
                text.split(PREMISE_SEPARATOR)
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The inference written as `Σ ⊢ A`
    #[must_use]
    pub fn argument(&self) -> String {
        let premises = self.premise_list().join(", ");
        if premises.is_empty() {
            format!("{TURNSTILE} {}", self.conclusion)
        } else {
            format!("{premises} {TURNSTILE} {}", self.conclusion)
        }
    }

    fn map_text(self, f: &mut impl FnMut(&str) -> String) -> Self {
        Self {
            premises: self.premises.as_deref().map(&mut *f),
            conclusion: f(&self.conclusion),
            holds: self.holds,
            kind: self.kind,
        }
    }
}

/// Paragraph content: one example or several named variants
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParagraphEntry {
    /// A single example
    Single(Example),
    /// Named alternative examples, in source order
    Variants(IndexMap<String, Example>),
}

impl ParagraphEntry {
    /// Whether this entry is a single example
    #[inline]
    #[must_use]
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// The single example, if this is not a variant map
    #[inline]
    #[must_use]
    pub fn single(&self) -> Option<&Example> {
        match self {
            Self::Single(example) => Some(example),
            Self::Variants(_) => None,
        }
    }

    /// Named variant, if this is a variant map
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&Example> {
        match self {
            Self::Single(_) => None,
            Self::Variants(variants) => variants.get(name),
        }
    }

    /// Examples with their variant names (`None` for a single example)
    #[must_use]
    pub fn examples(&self) -> Vec<(Option<&str>, &Example)> {
        match self {
            Self::Single(example) => vec![(None, example)],
            Self::Variants(variants) => variants
                .iter()
                .map(|(name, example)| (Some(name.as_str()), example))
                .collect(),
        }
    }

    /// Number of examples held
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Variants(variants) => variants.len(),
        }
    }

    /// Whether no examples are held (an empty variant map)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn map_text(self, f: &mut impl FnMut(&str) -> String) -> Self {
        match self {
            Self::Single(example) => Self::Single(example.map_text(f)),
            Self::Variants(variants) => Self::Variants(
                variants
                    .into_iter()
                    .map(|(name, example)| (name, example.map_text(&mut *f)))
                    .collect(),
            ),
        }
    }
}

/// Map of paragraphs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Section {
    paragraphs: IndexMap<String, ParagraphEntry>,
}

impl Section {
    pub(crate) fn new(paragraphs: IndexMap<String, ParagraphEntry>) -> Self {
        Self { paragraphs }
    }

    /// Paragraph by key
    #[inline]
    #[must_use]
    pub fn paragraph(&self, key: &str) -> Option<&ParagraphEntry> {
        self.paragraphs.get(key)
    }

    /// Paragraphs in source order
    pub fn paragraphs(&self) -> impl Iterator<Item = (&str, &ParagraphEntry)> {
        self.paragraphs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Paragraph keys in source order
    pub fn paragraph_keys(&self) -> impl Iterator<Item = &str> {
        self.paragraphs.keys().map(String::as_str)
    }

    /// Number of paragraphs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Whether the section has no paragraphs
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

/// Map of sections
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Chapter {
    sections: IndexMap<String, Section>,
}

impl Chapter {
    pub(crate) fn new(sections: IndexMap<String, Section>) -> Self {
        Self { sections }
    }

    /// Section by key
    #[inline]
    #[must_use]
    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.get(key)
    }

    /// Sections in source order
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Section keys in source order
    pub fn section_keys(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of sections
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the chapter has no sections
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Validated example corpus
///
/// Only [`crate::validate`] constructs a `Corpus`; there is no way to
/// mutate one afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Corpus {
    chapters: IndexMap<String, Chapter>,
}

impl Corpus {
    pub(crate) fn new(chapters: IndexMap<String, Chapter>) -> Self {
        Self { chapters }
    }

    /// Chapter by key
    #[inline]
    #[must_use]
    pub fn chapter(&self, key: &str) -> Option<&Chapter> {
        self.chapters.get(key)
    }

    /// Chapters in source order
    pub fn chapters(&self) -> impl Iterator<Item = (&str, &Chapter)> {
        self.chapters.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Chapter keys in source order
    pub fn chapter_keys(&self) -> impl Iterator<Item = &str> {
        self.chapters.keys().map(String::as_str)
    }

    /// Number of chapters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Whether the corpus has no chapters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Every example with its full path, in source order
    #[must_use]
    pub fn examples(&self) -> Vec<(CorpusPath, &Example)> {
        let mut out = Vec::new();
        for (chapter_key, chapter) in self.chapters() {
            for (section_key, section) in chapter.sections() {
                for (paragraph_key, entry) in section.paragraphs() {
                    let path = CorpusPath::paragraph_of(chapter_key, section_key, paragraph_key);
                    for (variant, example) in entry.examples() {
                        let path = match variant {
                            Some(name) => path.variant(name),
                            None => path.clone(),
                        };
                        out.push((path, example));
                    }
                }
            }
        }
        out
    }

    /// Total number of examples, counting each variant
    #[must_use]
    pub fn example_count(&self) -> usize {
        self.chapters
            .values()
            .flat_map(|c| c.sections.values())
            .flat_map(|s| s.paragraphs.values())
            .map(ParagraphEntry::len)
            .sum()
    }

    /// Rewrite every `premises` and `conclusion` field
    ///
    /// Consumes the corpus; intended for construction-time normalization,
    /// before the corpus is shared.
    #[must_use]
    pub fn map_text(self, mut f: impl FnMut(&str) -> String) -> Self {
        let chapters = self
            .chapters
            .into_iter()
            .map(|(ck, chapter)| {
                let sections = chapter
                    .sections
                    .into_iter()
                    .map(|(sk, section)| {
                        let paragraphs = section
                            .paragraphs
                            .into_iter()
                            .map(|(pk, entry)| (pk, entry.map_text(&mut f)))
                            .collect();
                        (sk, Section::new(paragraphs))
                    })
                    .collect();
                (ck, Chapter::new(sections))
            })
            .collect();
        Self::new(chapters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Corpus {
        let mut variants = IndexMap::new();
        variants.insert("a".to_string(), Example::new("q").with_premises("p > q, p"));
        variants.insert("b".to_string(), Example::new("!p"));

        let mut paragraphs = IndexMap::new();
        paragraphs.insert("1".to_string(), ParagraphEntry::Single(Example::new("p || !p")));
        paragraphs.insert("2".to_string(), ParagraphEntry::Variants(variants));

        let mut sections = IndexMap::new();
        sections.insert("4".to_string(), Section::new(paragraphs));

        let mut chapters = IndexMap::new();
        chapters.insert("1".to_string(), Chapter::new(sections));
        Corpus::new(chapters)
    }

    #[test]
    fn premise_list_splits_and_trims() {
        let example = Example::new("r").with_premises(" p ⊃ q ,q ⊃ r, ");
        assert_eq!(example.premise_list(), ["p ⊃ q", "q ⊃ r"]);
    }

    #[test]
    fn absent_premises_are_zero_premises() {
        assert!(Example::new("p ∨ ¬p").premise_list().is_empty());
    }

    #[test]
    fn argument_rendering() {
        assert_eq!(Example::new("q").with_premises("p, p ⊃ q").argument(), "p, p ⊃ q ⊢ q");
        assert_eq!(Example::new("p ∨ ¬p").argument(), "⊢ p ∨ ¬p");
    }

    #[test]
    fn example_count_includes_variants() {
        assert_eq!(sample().example_count(), 3);
        assert_eq!(sample().examples().len(), 3);
    }

    #[test]
    fn examples_carry_variant_paths() {
        let corpus = sample();
        let paths: Vec<String> = corpus.examples().iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(paths, ["1/4/1", "1/4/2#a", "1/4/2#b"]);
    }

    #[test]
    fn map_text_touches_every_text_field() {
        let corpus = sample().map_text(|s| s.to_uppercase());
        for (_, example) in corpus.examples() {
            assert_eq!(example.conclusion(), example.conclusion().to_uppercase());
            if let Some(premises) = example.premises() {
                assert_eq!(premises, premises.to_uppercase());
            }
        }
        let entry = corpus.chapter("1").unwrap().section("4").unwrap().paragraph("2").unwrap();
        assert_eq!(entry.variant("a").unwrap().premises(), Some("P > Q, P"));
    }

    #[test]
    fn map_text_keeps_structure() {
        let before = sample();
        let after = before.clone().map_text(str::to_owned);
        assert_eq!(before, after);
    }

    #[test]
    fn paragraph_entry_accessors() {
        let single = ParagraphEntry::Single(Example::new("p"));
        assert!(single.is_single());
        assert!(single.single().is_some());
        assert!(single.variant("a").is_none());
        assert_eq!(single.len(), 1);

        let empty = ParagraphEntry::Variants(IndexMap::new());
        assert!(empty.is_empty());
    }
}
