//! Symbol catalogs
//!
//! A catalog is an ordered table of `(ascii, glyph)` pairs. Order is
//! significant: the normalizer applies pairs one after another, so a mnemonic
//! that occurs inside a longer one must come after it.

use crate::symbol::Symbol;

/// Ordered source of `(ascii, glyph)` substitution pairs
///
/// Implementations must enumerate in a deterministic order; every call to
/// [`SymbolCatalog::pairs`] restarts the enumeration from the first pair.
pub trait SymbolCatalog {
    /// Enumerate `(ascii, glyph)` pairs in priority order
    fn pairs(&self) -> impl Iterator<Item = (&str, &str)>;

    /// Number of pairs
    fn len(&self) -> usize {
        self.pairs().count()
    }

    /// Whether the catalog has no pairs
    fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }
}

impl<C: SymbolCatalog + ?Sized> SymbolCatalog for &C {
    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        (**self).pairs()
    }
}

/// Catalog of the built-in [`Symbol`] operators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinCatalog;

impl SymbolCatalog for BuiltinCatalog {
    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        Symbol::iter().map(|symbol| (symbol.ascii(), symbol.glyph()))
    }
}

/// Catalog backed by caller-supplied pairs
///
/// Pairs are kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairCatalog {
    pairs: Vec<(String, String)>,
}

impl PairCatalog {
    /// Create empty catalog
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create catalog from ordered pairs
    #[must_use]
    pub fn from_pairs<A, G>(pairs: impl IntoIterator<Item = (A, G)>) -> Self
    where
        A: Into<String>,
        G: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(ascii, glyph)| (ascii.into(), glyph.into()))
                .collect(),
        }
    }

    /// Append a pair at the lowest priority
    #[must_use]
    pub fn with_pair(mut self, ascii: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.pairs.push((ascii.into(), glyph.into()));
        self
    }
}

impl SymbolCatalog for PairCatalog {
    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(a, g)| (a.as_str(), g.as_str()))
    }
}

impl From<BuiltinCatalog> for PairCatalog {
    fn from(catalog: BuiltinCatalog) -> Self {
        Self::from_pairs(catalog.pairs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_follows_symbol_order() {
        let pairs: Vec<_> = BuiltinCatalog.pairs().collect();
        assert_eq!(pairs.len(), 7);
        assert_eq!(pairs[0], ("!", "¬"));
        assert_eq!(pairs[6], (">", "⊃"));
    }

    #[test]
    fn pair_catalog_keeps_insertion_order() {
        let catalog = PairCatalog::new()
            .with_pair("<->", "↔")
            .with_pair("->", "→");
        let asciis: Vec<_> = catalog.pairs().map(|(a, _)| a).collect();
        assert_eq!(asciis, ["<->", "->"]);
    }

    #[test]
    fn pairs_restart_on_each_call() {
        let catalog = BuiltinCatalog;
        assert_eq!(catalog.len(), catalog.pairs().count());
        assert!(!catalog.is_empty());
        assert!(PairCatalog::new().is_empty());
    }

    #[test]
    fn builtin_converts_to_pair_catalog() {
        let converted = PairCatalog::from(BuiltinCatalog);
        assert!(converted.pairs().eq(BuiltinCatalog.pairs()));
    }
}
