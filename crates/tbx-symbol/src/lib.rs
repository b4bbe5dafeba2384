//! Tableaux Symbol System
//!
//! Logical operator catalog and ASCII-to-Unicode normalization.
//!
//! # Overview
//!
//! The symbol system provides:
//! - **Symbol**: The built-in logical operators and their ASCII mnemonics
//! - **SymbolCatalog**: Ordered `(ascii, glyph)` pairs consumed by the normalizer
//! - **normalize**: Sequential, catalog-ordered text substitution
//! - **CatalogValidator**: Detection of orderings that would corrupt longer mnemonics
//!
//! # Example
//!
//! ```rust
//! use tbx_symbol::{normalize, BuiltinCatalog};
//!
//! let text = normalize("[]p > <>p", &BuiltinCatalog);
//! assert_eq!(text, "□p ⊃ ◇p");
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod normalize;
pub mod symbol;
pub mod validation;

// Re-exports
pub use catalog::{BuiltinCatalog, PairCatalog, SymbolCatalog};
pub use normalize::{normalize, normalize_with_report, NormalizeReport};
pub use symbol::Symbol;
pub use validation::{CatalogError, CatalogValidator, ConflictKind, OrderingConflict, Severity};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for symbol operations
    pub use crate::{
        normalize, BuiltinCatalog, CatalogValidator, PairCatalog, Symbol, SymbolCatalog,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
