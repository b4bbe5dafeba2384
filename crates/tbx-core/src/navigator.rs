//! Route-level navigation over the example library
//!
//! Takes raw route segments (`/example/{chapter}/{section}/{paragraph}`),
//! validates the chapter, and answers with page data, redirects or a
//! [`NavError`] carrying the status code.

use crate::error::NavError;
use crate::library::ExampleLibrary;
use serde::Serialize;
use tbx_corpus::{Chapter, ParagraphEntry};
use tbx_logic::{ChapterIndex, LogicKind};

/// Parse a chapter route segment
///
/// Invalid input (non-numeric, zero, beyond the last supported chapter) is
/// `None`, never an error.
#[must_use]
pub fn validate_chapter(input: &str) -> Option<ChapterIndex> {
    input.parse().ok()
}

/// Every addressable route, in corpus source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entries {
    /// `/example/{chapter}`
    pub chapters: Vec<ChapterRoute>,
    /// `/example/{chapter}/{section}`
    pub sections: Vec<SectionRoute>,
    /// `/example/{chapter}/{section}/{paragraph}`
    pub paragraphs: Vec<ParagraphRoute>,
}

/// Chapter route parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterRoute {
    /// Chapter key
    pub chapter: String,
}

/// Section route parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRoute {
    /// Chapter key
    pub chapter: String,
    /// Section key
    pub section: String,
}

/// Paragraph route parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParagraphRoute {
    /// Chapter key
    pub chapter: String,
    /// Section key
    pub section: String,
    /// Paragraph key
    pub paragraph: String,
}

/// Where a section route sends the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "to", rename_all = "lowercase")]
pub enum Redirect {
    /// The section's only paragraph
    Paragraph {
        chapter: ChapterIndex,
        section: String,
        paragraph: String,
    },
    /// The chapter listing
    Chapter { chapter: ChapterIndex },
}

impl Redirect {
    /// Target URL path
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            Self::Paragraph {
                chapter,
                section,
                paragraph,
            } => format!("/example/{chapter}/{section}/{paragraph}"),
            Self::Chapter { chapter } => format!("/example/{chapter}/"),
        }
    }

    /// HTTP status (302 Found)
    #[inline]
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        302
    }
}

/// Chapter page data
#[derive(Debug, Clone, Serialize)]
pub struct ChapterPage<'a> {
    pub chapter: ChapterIndex,
    pub logic: LogicKind,
    pub chapter_examples: &'a Chapter,
}

/// Paragraph page data
#[derive(Debug, Clone, Serialize)]
pub struct ParagraphPage<'a> {
    pub chapter: ChapterIndex,
    pub section: String,
    pub paragraph: String,
    pub example_or_examples: &'a ParagraphEntry,
}

/// Navigator over a shared library
#[derive(Debug, Clone)]
pub struct Navigator {
    library: ExampleLibrary,
}

impl Navigator {
    /// Create navigator
    #[inline]
    #[must_use]
    pub fn new(library: ExampleLibrary) -> Self {
        Self { library }
    }

    /// Underlying library
    #[inline]
    #[must_use]
    pub fn library(&self) -> &ExampleLibrary {
        &self.library
    }

    /// Enumerate all chapter, section and paragraph routes
    ///
    /// Keys are listed as they appear in the corpus, including chapters
    /// outside the supported range.
    #[must_use]
    pub fn entries(&self) -> Entries {
        let mut entries = Entries::default();

        for (chapter, sections) in self.library.corpus().chapters() {
            entries.chapters.push(ChapterRoute {
                chapter: chapter.to_owned(),
            });
            for (section, paragraphs) in sections.sections() {
                entries.sections.push(SectionRoute {
                    chapter: chapter.to_owned(),
                    section: section.to_owned(),
                });
                entries
                    .paragraphs
                    .extend(paragraphs.paragraph_keys().map(|paragraph| ParagraphRoute {
                        chapter: chapter.to_owned(),
                        section: section.to_owned(),
                        paragraph: paragraph.to_owned(),
                    }));
            }
        }

        tracing::debug!(
            chapters = entries.chapters.len(),
            sections = entries.sections.len(),
            paragraphs = entries.paragraphs.len(),
            "enumerated example routes"
        );
        entries
    }

    /// `/example/{chapter}`
    ///
    /// # Errors
    /// `InvalidChapter` (400) or `ChapterNotFound` (404)
    pub fn chapter_page(&self, chapter: &str) -> Result<ChapterPage<'_>, NavError> {
        let chapter = parse_chapter(chapter)?;
        Ok(ChapterPage {
            chapter,
            logic: chapter.logic(),
            chapter_examples: self.library.chapter(chapter)?,
        })
    }

    /// `/example/{chapter}/{section}`
    ///
    /// A section with exactly one paragraph redirects to it; any other
    /// section redirects to the chapter listing.
    ///
    /// # Errors
    /// `InvalidChapter` (400), `ChapterNotFound` or `SectionNotFound` (404)
    pub fn section_redirect(&self, chapter: &str, section: &str) -> Result<Redirect, NavError> {
        let chapter = parse_chapter(chapter)?;
        let paragraphs = self.library.section(chapter, section)?;

        let mut keys = paragraphs.paragraph_keys();
        let redirect = match (keys.next(), keys.next()) {
            (Some(paragraph), None) => Redirect::Paragraph {
                chapter,
                section: section.to_owned(),
                paragraph: paragraph.to_owned(),
            },
            _ => Redirect::Chapter { chapter },
        };

        tracing::debug!(location = %redirect.location(), "section redirect");
        Ok(redirect)
    }

    /// `/example/{chapter}/{section}/{paragraph}`
    ///
    /// # Errors
    /// `InvalidChapter` (400), or a 404 for any missing level
    pub fn paragraph_page(
        &self,
        chapter: &str,
        section: &str,
        paragraph: &str,
    ) -> Result<ParagraphPage<'_>, NavError> {
        let chapter = parse_chapter(chapter)?;
        Ok(ParagraphPage {
            chapter,
            section: section.to_owned(),
            paragraph: paragraph.to_owned(),
            example_or_examples: self.library.paragraph(chapter, section, paragraph)?,
        })
    }
}

fn parse_chapter(input: &str) -> Result<ChapterIndex, NavError> {
    validate_chapter(input).ok_or_else(|| NavError::InvalidChapter(input.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CorpusLoader, PlaygroundConfig};
    use tbx_corpus::parsers::DocumentFormat;

    const CORPUS: &str = r#"
[1.1.p1]
conclusion = "p"

[1.2.a]
conclusion = "q"

[1.2.b]
conclusion = "r"

[2.1.a.x]
conclusion = "[]p"

[2.1.a.y]
conclusion = "<>p"
"#;

    fn navigator() -> Navigator {
        let library = CorpusLoader::new(PlaygroundConfig::new())
            .load_str(CORPUS, DocumentFormat::Toml)
            .unwrap();
        Navigator::new(library)
    }

    #[test]
    fn chapter_validation() {
        for invalid in ["0", "4", "abc", "", "1.5"] {
            assert_eq!(validate_chapter(invalid), None, "{invalid:?}");
        }
        for valid in ["1", "2", "3"] {
            assert!(validate_chapter(valid).is_some(), "{valid:?}");
        }
    }

    #[test]
    fn entries_in_source_order() {
        let entries = navigator().entries();
        let chapters: Vec<&str> = entries.chapters.iter().map(|c| c.chapter.as_str()).collect();
        assert_eq!(chapters, ["1", "2"]);

        let sections: Vec<(&str, &str)> = entries
            .sections
            .iter()
            .map(|s| (s.chapter.as_str(), s.section.as_str()))
            .collect();
        assert_eq!(sections, [("1", "1"), ("1", "2"), ("2", "1")]);

        let paragraphs: Vec<String> = entries
            .paragraphs
            .iter()
            .map(|p| format!("{}/{}/{}", p.chapter, p.section, p.paragraph))
            .collect();
        assert_eq!(paragraphs, ["1/1/p1", "1/2/a", "1/2/b", "2/1/a"]);
    }

    #[test]
    fn single_paragraph_section_redirects_to_paragraph() {
        let redirect = navigator().section_redirect("1", "1").unwrap();
        assert_eq!(redirect.location(), "/example/1/1/p1");
        assert_eq!(redirect.status_code(), 302);
    }

    #[test]
    fn multi_paragraph_section_redirects_to_chapter() {
        let redirect = navigator().section_redirect("1", "2").unwrap();
        assert_eq!(redirect.location(), "/example/1/");
    }

    #[test]
    fn empty_section_redirects_to_chapter() {
        let library = CorpusLoader::new(PlaygroundConfig::new())
            .load_str("[1.5]\n[1.1.a]\nconclusion = \"p\"\n", DocumentFormat::Toml)
            .unwrap();
        let redirect = Navigator::new(library).section_redirect("1", "5").unwrap();
        assert_eq!(redirect, Redirect::Chapter { chapter: ChapterIndex::new(1).unwrap() });
        assert_eq!(redirect.location(), "/example/1/");
    }

    #[test]
    fn variant_map_counts_as_one_paragraph() {
        let redirect = navigator().section_redirect("2", "1").unwrap();
        assert_eq!(redirect.location(), "/example/2/1/a");
    }

    #[test]
    fn route_errors() {
        let navigator = navigator();
        assert_eq!(navigator.section_redirect("x", "1").unwrap_err().status_code(), 400);
        assert_eq!(navigator.section_redirect("1", "7").unwrap_err().status_code(), 404);
        assert_eq!(navigator.chapter_page("3").unwrap_err().status_code(), 404);
        assert_eq!(navigator.paragraph_page("1", "2", "c").unwrap_err().status_code(), 404);
    }

    #[test]
    fn pages() {
        let navigator = navigator();
        let chapter = navigator.chapter_page("2").unwrap();
        assert_eq!(chapter.logic, LogicKind::Modal);
        assert_eq!(chapter.chapter_examples.len(), 1);

        let page = navigator.paragraph_page("2", "1", "a").unwrap();
        assert_eq!(page.example_or_examples.len(), 2);
        assert_eq!(
            page.example_or_examples.variant("y").map(|e| e.conclusion()),
            Some("◇p")
        );
    }
}
