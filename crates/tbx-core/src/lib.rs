//! Tableaux Playground Core
//!
//! Loads the example corpus once at startup and serves read-only lookups.
//!
//! # Architecture
//!
//! ```text
//! file → CorpusLoader → ExampleLibrary (Arc, immutable) → Navigator
//!                                      ↓
//!                                   resolve → LogicParams
//! ```
//!
//! # Example
//!
//! ```rust
//! use tbx_core::{CorpusLoader, Navigator, PlaygroundConfig, Redirect};
//! use tbx_corpus::parsers::DocumentFormat;
//!
//! let loader = CorpusLoader::new(PlaygroundConfig::new());
//! let library = loader
//!     .load_str("[1.1.a]\nconclusion = \"p || !p\"\n", DocumentFormat::Toml)
//!     .unwrap();
//!
//! let navigator = Navigator::new(library);
//! let redirect = navigator.section_redirect("1", "1").unwrap();
//! assert_eq!(redirect.location(), "/example/1/1/a");
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod library;
pub mod loader;
pub mod navigator;

pub use config::{NormalizeStage, PlaygroundConfig};
pub use error::{ConfigError, LoadError, NavError};
pub use library::{ExampleLibrary, ResolvedExample};
pub use loader::{CorpusLoader, SourceMetadata};
pub use navigator::{
    validate_chapter, ChapterPage, ChapterRoute, Entries, Navigator, ParagraphPage, ParagraphRoute,
    Redirect, SectionRoute,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for playground consumers
    pub use crate::{
        CorpusLoader, ExampleLibrary, LoadError, NavError, Navigator, PlaygroundConfig, Redirect,
    };
    pub use tbx_logic::{ChapterIndex, LogicParams};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
