//! ASCII-to-Unicode normalization
//!
//! Substitution is sequential: each catalog pair is applied to the output of
//! the previous one, replacing every non-overlapping occurrence. Catalog
//! order is therefore a priority order and the caller is responsible for
//! listing longer mnemonics before any mnemonic they contain (see
//! [`crate::CatalogValidator`]).

use crate::catalog::SymbolCatalog;

/// Counters for a normalization pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Pairs that matched at least once
    pub rules_applied: usize,
    /// Total occurrences replaced
    pub replacements: usize,
}

/// Replace every ASCII mnemonic in `text` with its glyph
///
/// Total and pure: any input is valid, including one with no mnemonics.
///
/// # Example
/// ```
/// use tbx_symbol::{normalize, PairCatalog};
///
/// let catalog = PairCatalog::new().with_pair("<->", "↔").with_pair("->", "→");
/// assert_eq!(normalize("A<->B -> C", &catalog), "A↔B → C");
/// ```
#[must_use]
pub fn normalize<C: SymbolCatalog + ?Sized>(text: &str, catalog: &C) -> String {
    normalize_with_report(text, catalog).0
}

/// Normalize and report how many substitutions were made
#[must_use]
pub fn normalize_with_report<C: SymbolCatalog + ?Sized>(
    text: &str,
    catalog: &C,
) -> (String, NormalizeReport) {
    let mut output = text.to_owned();
    let mut report = NormalizeReport::default();

    for (ascii, glyph) in catalog.pairs() {
        // An empty pattern matches between every char.
        if ascii.is_empty() {
            continue;
        }

        let hits = output.matches(ascii).count();
        if hits == 0 {
            continue;
        }

        tracing::trace!(ascii, glyph, hits, "replacing symbol mnemonic");
        output = output.replace(ascii, glyph);
        report.rules_applied += 1;
        report.replacements += hits;
    }

    (output, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuiltinCatalog, PairCatalog};

    fn arrows() -> PairCatalog {
        PairCatalog::new().with_pair("<->", "↔").with_pair("->", "→")
    }

    #[test]
    fn longer_token_first_is_not_corrupted() {
        assert_eq!(normalize("A<->B", &arrows()), "A↔B");
    }

    #[test]
    fn shorter_token_first_corrupts_longer() {
        let catalog = PairCatalog::new().with_pair("->", "→").with_pair("<->", "↔");
        assert_eq!(normalize("A<->B", &catalog), "A<→B");
    }

    #[test]
    fn builtin_catalog_handles_possibility_before_implication() {
        assert_eq!(normalize("<>p > []q", &BuiltinCatalog), "◇p ⊃ □q");
        assert_eq!(
            normalize("!(p && q) == (!p || !q)", &BuiltinCatalog),
            "¬(p ∧ q) ≡ (¬p ∨ ¬q)"
        );
    }

    #[test]
    fn no_matches_returns_input() {
        let (text, report) = normalize_with_report("p, q", &BuiltinCatalog);
        assert_eq!(text, "p, q");
        assert_eq!(report, NormalizeReport::default());
    }

    #[test]
    fn report_counts_replacements() {
        let (_, report) = normalize_with_report("a -> b -> c <-> d", &arrows());
        assert_eq!(report.rules_applied, 2);
        assert_eq!(report.replacements, 3);
    }

    #[test]
    fn empty_ascii_is_skipped() {
        let catalog = PairCatalog::new().with_pair("", "X").with_pair("->", "→");
        assert_eq!(normalize("a->b", &catalog), "a→b");
    }

    #[test]
    fn empty_catalog_is_identity() {
        assert_eq!(normalize("[]p", &PairCatalog::new()), "[]p");
    }
}
