//! Supported chapters
//!
//! [`CHAPTER_LOGICS`] is the only place chapter numbers get meaning. Both
//! resolution and chapter-index validation read it, so the two cannot
//! disagree on how many chapters exist.

use crate::error::ChapterParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::num::IntErrorKind;
use std::str::FromStr;

/// Logic system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogicKind {
    /// Classical propositional logic
    Classical,
    /// Basic modal logic K
    Modal,
    /// Normal modal logic with accessibility-relation properties
    NormalModal,
}

/// Logic of each chapter; index 0 is chapter 1
pub const CHAPTER_LOGICS: [LogicKind; 3] =
    [LogicKind::Classical, LogicKind::Modal, LogicKind::NormalModal];

/// Number of supported chapters
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn chapter_count() -> u32 {
    CHAPTER_LOGICS.len() as u32
}

impl LogicKind {
    /// Logic for a 1-based chapter number
    #[must_use]
    pub fn for_chapter(chapter: u32) -> Option<Self> {
        let index = usize::try_from(chapter.checked_sub(1)?).ok()?;
        CHAPTER_LOGICS.get(index).copied()
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classical => "Classical",
            Self::Modal => "Basic modal",
            Self::NormalModal => "Normal Modal",
        }
    }

    /// Name of the evaluator constructor
    #[must_use]
    pub const fn constructor(self) -> &'static str {
        match self {
            Self::Classical => "classical",
            Self::Modal => "modal",
            Self::NormalModal => "normalModal",
        }
    }
}

impl Display for LogicKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A chapter number within `1..=chapter_count()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ChapterIndex(u32);

impl ChapterIndex {
    /// Create index if the chapter is supported
    #[must_use]
    pub fn new(chapter: u32) -> Option<Self> {
        LogicKind::for_chapter(chapter).map(|_| Self(chapter))
    }

    /// Every supported chapter, in order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=chapter_count()).map(Self)
    }

    /// 1-based chapter number
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Logic of this chapter
    #[must_use]
    pub fn logic(self) -> LogicKind {
        // In range by construction.
        CHAPTER_LOGICS[(self.0 - 1) as usize]
    }
}

impl Display for ChapterIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChapterIndex {
    type Err = ChapterParseError;

    /// Parse a route segment such as `"2"`
    ///
    /// Surrounding whitespace is ignored. Anything else that is not a
    /// decimal number in range is rejected, including `"2abc"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let out_of_range = || ChapterParseError::OutOfRange {
            chapter: trimmed.to_owned(),
            max: chapter_count(),
        };
        let chapter = trimmed.parse::<u32>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => out_of_range(),
            _ => ChapterParseError::NotANumber(s.to_owned()),
        })?;
        Self::new(chapter).ok_or_else(out_of_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_table() {
        assert_eq!(LogicKind::for_chapter(1), Some(LogicKind::Classical));
        assert_eq!(LogicKind::for_chapter(2), Some(LogicKind::Modal));
        assert_eq!(LogicKind::for_chapter(3), Some(LogicKind::NormalModal));
        assert_eq!(LogicKind::for_chapter(0), None);
        assert_eq!(LogicKind::for_chapter(4), None);
        assert_eq!(chapter_count(), 3);
    }

    #[test]
    fn names() {
        assert_eq!(LogicKind::Modal.display_name(), "Basic modal");
        assert_eq!(LogicKind::NormalModal.constructor(), "normalModal");
        assert_eq!(LogicKind::NormalModal.to_string(), "Normal Modal");
    }

    #[test]
    fn serde_uses_constructor_names() {
        let json = serde_json::to_string(&LogicKind::NormalModal).unwrap();
        assert_eq!(json, "\"normalModal\"");
    }

    #[test]
    fn parse_chapter() {
        assert_eq!("2".parse::<ChapterIndex>().unwrap().get(), 2);
        assert_eq!(" 3 ".parse::<ChapterIndex>().unwrap().logic(), LogicKind::NormalModal);
        assert!(matches!(
            "4".parse::<ChapterIndex>(),
            Err(ChapterParseError::OutOfRange { ref chapter, max: 3 }) if chapter == "4"
        ));
        assert!(matches!(
            "2abc".parse::<ChapterIndex>(),
            Err(ChapterParseError::NotANumber(_))
        ));
        assert!("-1".parse::<ChapterIndex>().is_err());
    }

    #[test]
    fn overflowing_chapter_is_out_of_range() {
        let err = "4294967296".parse::<ChapterIndex>().unwrap_err();
        assert_eq!(
            err,
            ChapterParseError::OutOfRange {
                chapter: "4294967296".to_owned(),
                max: 3
            }
        );
        assert_eq!(err.to_string(), "chapter 4294967296 out of range 1..=3");
    }

    #[test]
    fn all_chapters() {
        let chapters: Vec<u32> = ChapterIndex::all().map(ChapterIndex::get).collect();
        assert_eq!(chapters, [1, 2, 3]);
    }
}
