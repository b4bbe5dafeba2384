//! Tableaux Logic Resolution
//!
//! Maps a chapter number and an [`Example`](tbx_corpus::Example) to the
//! parameters of the logic system that evaluates it.
//!
//! # Core Concepts
//!
//! - [`CHAPTER_LOGICS`]: The one table of supported chapters
//! - [`ChapterIndex`]: A chapter number known to be in that table
//! - [`ModalKind`]: Accessibility-relation properties for normal modal logic
//! - [`LogicParams`]: Resolved construction parameters
//! - [`LogicEngine`]: Construction interface of an external evaluator
//!
//! # Example
//!
//! ```rust
//! use tbx_corpus::{Example, RawValue};
//! use tbx_logic::{resolve, ConstructorCall};
//!
//! let kind = RawValue::table([("reflexive", RawValue::from(true))]);
//! let example = Example::new("□p ⊃ p").with_kind(kind);
//!
//! let params = resolve(3, &example).unwrap();
//! assert_eq!(
//!     params.instantiate(&ConstructorCall),
//!     "normalModal(true, false, false, false)"
//! );
//! assert!(resolve(4, &example).is_err());
//! ```

#![warn(unreachable_pub)]

pub mod chapter;
pub mod engine;
pub mod error;
pub mod kind;
pub mod resolver;

pub use chapter::{chapter_count, ChapterIndex, LogicKind, CHAPTER_LOGICS};
pub use engine::{ConstructorCall, LogicEngine};
pub use error::{ChapterParseError, ResolveError};
pub use kind::ModalKind;
pub use resolver::{resolve, resolve_at, LogicParams};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for logic resolution
    pub use crate::{
        resolve, ChapterIndex, LogicEngine, LogicKind, LogicParams, ModalKind, ResolveError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
