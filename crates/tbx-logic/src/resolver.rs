//! Logic parameter resolution
//!
//! | chapter | logic | parameters |
//! |---|---|---|
//! | 1 | classical | none |
//! | 2 | modal | none |
//! | 3 | normal modal | [`ModalKind`] read from `kind` |
//!
//! Other chapters fail with [`ResolveError::InvalidChapter`].

use crate::chapter::LogicKind;
use crate::engine::LogicEngine;
use crate::error::ResolveError;
use crate::kind::ModalKind;
use serde::Serialize;
use tbx_corpus::{CorpusPath, Example};

/// Construction parameters of a logic system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "logic", rename_all = "camelCase")]
pub enum LogicParams {
    /// `classical()`
    Classical,
    /// `modal()`
    Modal,
    /// `normalModal(reflexive, symmetric, transitive, extendable)`
    NormalModal(ModalKind),
}

impl LogicParams {
    /// Logic family
    #[must_use]
    pub const fn kind(&self) -> LogicKind {
        match self {
            Self::Classical => LogicKind::Classical,
            Self::Modal => LogicKind::Modal,
            Self::NormalModal(_) => LogicKind::NormalModal,
        }
    }

    /// Modal properties, for normal modal logic
    #[inline]
    #[must_use]
    pub const fn modal_kind(&self) -> Option<ModalKind> {
        match self {
            Self::NormalModal(kind) => Some(*kind),
            Self::Classical | Self::Modal => None,
        }
    }

    /// Call the matching constructor of `engine`
    pub fn instantiate<E: LogicEngine + ?Sized>(&self, engine: &E) -> E::Logic {
        match self {
            Self::Classical => engine.classical(),
            Self::Modal => engine.modal(),
            Self::NormalModal(kind) => engine.normal_modal(
                kind.reflexive,
                kind.symmetric,
                kind.transitive,
                kind.extendable,
            ),
        }
    }
}

/// Resolve logic parameters for an example of `chapter`
///
/// Errors in `kind` are reported relative to the chapter only; use
/// [`resolve_at`] when the example's full path is known.
///
/// # Errors
/// - `ResolveError::InvalidChapter` if `chapter` is not supported
/// - `ResolveError::Kind` if chapter 3's `kind` is malformed
pub fn resolve(chapter: u32, example: &Example) -> Result<LogicParams, ResolveError> {
    resolve_at(chapter, example, &CorpusPath::root().child(chapter.to_string()))
}

/// Resolve logic parameters for the example at `path`
///
/// # Errors
/// Same as [`resolve`]
pub fn resolve_at(
    chapter: u32,
    example: &Example,
    path: &CorpusPath,
) -> Result<LogicParams, ResolveError> {
    let logic = LogicKind::for_chapter(chapter).ok_or(ResolveError::InvalidChapter { chapter })?;

    let params = match logic {
        LogicKind::Classical | LogicKind::Modal => {
            if example.kind().is_some() {
                tracing::debug!(
                    %path,
                    logic = logic.constructor(),
                    "ignoring kind for chapter without modal properties"
                );
            }
            if logic == LogicKind::Classical {
                LogicParams::Classical
            } else {
                LogicParams::Modal
            }
        }
        LogicKind::NormalModal => {
            LogicParams::NormalModal(ModalKind::from_raw(example.kind(), path)?)
        }
    };

    tracing::trace!(%path, chapter, ?params, "resolved logic parameters");
    Ok(params)
}
