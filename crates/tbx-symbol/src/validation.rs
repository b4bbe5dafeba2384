//! Catalog ordering validation
//!
//! Sequential substitution is only correct when no mnemonic is replaced
//! before a longer mnemonic that contains it. The validator checks that
//! precondition and reports glyphs that would break idempotence.

use crate::catalog::SymbolCatalog;

/// Catalog ordering validator
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogValidator;

impl CatalogValidator {
    /// Create new validator instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Collect every ordering conflict in the catalog
    ///
    /// # Performance
    /// O(n²) in the number of pairs; catalogs are a handful of operators.
    #[must_use]
    pub fn diagnose<C: SymbolCatalog + ?Sized>(&self, catalog: &C) -> Vec<OrderingConflict> {
        let pairs: Vec<(&str, &str)> = catalog.pairs().collect();
        let mut conflicts = Vec::new();

        for (i, (ascii, glyph)) in pairs.iter().enumerate() {
            if ascii.is_empty() {
                conflicts.push(OrderingConflict {
                    kind: ConflictKind::EmptyAscii,
                    index: i,
                    other_index: None,
                    description: format!("pair {i} has an empty ascii form"),
                });
                continue;
            }

            for (j, (later, _)) in pairs.iter().enumerate().skip(i + 1) {
                if later.len() > ascii.len() && later.contains(ascii) {
                    conflicts.push(OrderingConflict {
                        kind: ConflictKind::Shadowed,
                        index: i,
                        other_index: Some(j),
                        description: format!(
                            "'{ascii}' is replaced before '{later}', which contains it; move '{later}' first"
                        ),
                    });
                }
            }

            for (j, (other, _)) in pairs.iter().enumerate() {
                if !other.is_empty() && glyph.contains(other) {
                    conflicts.push(OrderingConflict {
                        kind: ConflictKind::GlyphReintroducesAscii,
                        index: i,
                        other_index: Some(j),
                        description: format!("glyph '{glyph}' contains ascii form '{other}'"),
                    });
                }
            }
        }

        conflicts
    }

    /// Fail on the first error-severity conflict
    ///
    /// Warnings (see [`Severity`]) are logged and otherwise ignored.
    ///
    /// # Errors
    /// - `CatalogError::EmptyAscii` if a pair has an empty ascii form
    /// - `CatalogError::Shadowed` if a mnemonic is replaced before a longer one containing it
    pub fn validate<C: SymbolCatalog + ?Sized>(&self, catalog: &C) -> Result<(), CatalogError> {
        let pairs: Vec<(&str, &str)> = catalog.pairs().collect();

        for conflict in self.diagnose(catalog) {
            match conflict.kind {
                ConflictKind::EmptyAscii => {
                    return Err(CatalogError::EmptyAscii {
                        index: conflict.index,
                    })
                }
                ConflictKind::Shadowed => {
                    let later = conflict.other_index.unwrap_or(conflict.index);
                    return Err(CatalogError::Shadowed {
                        earlier: pairs[conflict.index].0.to_owned(),
                        later: pairs[later].0.to_owned(),
                    });
                }
                ConflictKind::GlyphReintroducesAscii => {
                    tracing::warn!("{}", conflict.description);
                }
            }
        }

        Ok(())
    }
}

/// A single ordering problem found in a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingConflict {
    /// Kind of conflict
    pub kind: ConflictKind,
    /// Index of the offending pair
    pub index: usize,
    /// Index of the pair it conflicts with, if any
    pub other_index: Option<usize>,
    /// Human-readable description
    pub description: String,
}

impl OrderingConflict {
    /// Severity of this conflict
    #[inline]
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

/// Types of catalog conflicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// Ascii form is the empty string
    EmptyAscii,

    /// A mnemonic is replaced before a longer mnemonic that contains it
    Shadowed,

    /// A glyph contains an ascii form, so normalizing twice changes the text
    GlyphReintroducesAscii,
}

impl ConflictKind {
    /// Severity of this kind of conflict
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::EmptyAscii | Self::Shadowed => Severity::Error,
            Self::GlyphReintroducesAscii => Severity::Warning,
        }
    }
}

/// Conflict severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normalization stays correct but is not idempotent
    Warning,
    /// Normalization would corrupt text
    Error,
}

/// Catalog validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Empty ascii form
    #[error("catalog pair {index} has an empty ascii form")]
    EmptyAscii { index: usize },

    /// Ordering corrupts a longer mnemonic
    #[error("catalog replaces '{earlier}' before '{later}', which contains it")]
    Shadowed { earlier: String, later: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuiltinCatalog, PairCatalog};

    #[test]
    fn builtin_catalog_is_valid() {
        let validator = CatalogValidator::new();
        assert!(validator.diagnose(&BuiltinCatalog).is_empty());
        assert!(validator.validate(&BuiltinCatalog).is_ok());
    }

    #[test]
    fn detects_shadowed_mnemonic() {
        let catalog = PairCatalog::new().with_pair("->", "→").with_pair("<->", "↔");
        let err = CatalogValidator::new().validate(&catalog).unwrap_err();
        assert_eq!(
            err,
            CatalogError::Shadowed {
                earlier: "->".into(),
                later: "<->".into()
            }
        );
    }

    #[test]
    fn longer_first_is_accepted() {
        let catalog = PairCatalog::new().with_pair("<->", "↔").with_pair("->", "→");
        assert!(CatalogValidator::new().validate(&catalog).is_ok());
    }

    #[test]
    fn implication_before_possibility_is_rejected() {
        let catalog = PairCatalog::new().with_pair(">", "⊃").with_pair("<>", "◇");
        let conflicts = CatalogValidator::new().diagnose(&catalog);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].kind, ConflictKind::Shadowed);
        assert_eq!(conflicts[0].other_index, Some(1));
    }

    #[test]
    fn empty_ascii_is_an_error() {
        let catalog = PairCatalog::new().with_pair("", "X");
        assert_eq!(
            CatalogValidator::new().validate(&catalog),
            Err(CatalogError::EmptyAscii { index: 0 })
        );
    }

    #[test]
    fn glyph_containing_ascii_is_only_a_warning() {
        let catalog = PairCatalog::new().with_pair("~", "!~").with_pair("!", "¬");
        let conflicts = CatalogValidator::new().diagnose(&catalog);
        assert!(conflicts
            .iter()
            .all(|c| c.severity() == Severity::Warning));
        assert!(CatalogValidator::new().validate(&catalog).is_ok());
    }
}
