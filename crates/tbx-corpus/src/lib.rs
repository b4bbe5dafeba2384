//! Tableaux Example Corpus
//!
//! The typed, validated tree of logical-reasoning examples.
//!
//! # Core Concepts
//!
//! - [`RawValue`]: Untyped document as produced by any serde format
//! - [`Corpus`]: Validated chapter → section → paragraph tree
//! - [`ParagraphEntry`]: A single [`Example`] or a map of named variants
//! - [`validate`]: Recursive shape validation with path-addressed errors
//! - [`parsers`]: TOML, JSON and YAML front ends producing [`RawValue`]
//!
//! # Architecture
//!
//! ```text
//! text → DocumentParser → RawValue → validate → Corpus (+ warnings)
//! ```
//!
//! # Example
//!
//! ```rust
//! use tbx_corpus::parsers::{DocumentParser, TomlParser};
//! use tbx_corpus::validate;
//!
//! let raw = TomlParser.parse(r#"
//! [1.1.a]
//! premises = "p, p ⊃ q"
//! conclusion = "q"
//! holds = true
//! "#).unwrap();
//!
//! let validated = validate(&raw).unwrap();
//! assert_eq!(validated.corpus.example_count(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod error;
pub mod model;
pub mod parsers;
pub mod path;
pub mod raw;
pub mod schema;

// Re-exports
pub use error::{ParseError, SchemaError};
pub use model::{Chapter, Corpus, Example, ParagraphEntry, Section};
pub use path::{CorpusPath, Level};
pub use raw::{RawTable, RawValue};
pub use schema::{validate, FieldReader, SchemaValidator, SchemaWarning, Validated};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the corpus
    pub use crate::parsers::{DocumentFormat, DocumentParser, ParserRegistry};
    pub use crate::{
        validate, Corpus, CorpusPath, Example, ParagraphEntry, RawValue, SchemaError,
        SchemaWarning, Validated,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
