//! Error types for logic resolution

use tbx_corpus::SchemaError;

/// Resolution of an example's logic parameters failed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// Chapter is not in the supported table
    #[error("invalid chapter {chapter}: expected 1..={max}", max = crate::chapter_count())]
    InvalidChapter { chapter: u32 },

    /// The example's `kind` does not match the chapter's shape
    #[error("invalid kind: {0}")]
    Kind(#[from] SchemaError),
}

impl ResolveError {
    /// Check if the chapter itself was rejected
    #[inline]
    #[must_use]
    pub fn is_invalid_chapter(&self) -> bool {
        matches!(self, Self::InvalidChapter { .. })
    }
}

/// Chapter route segment is not a supported chapter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChapterParseError {
    /// Not a decimal number
    #[error("chapter is not a number: '{0}'")]
    NotANumber(String),

    /// Number outside the supported chapters
    #[error("chapter {chapter} out of range 1..={max}")]
    OutOfRange { chapter: String, max: u32 },
}
