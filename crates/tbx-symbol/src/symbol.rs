//! Built-in logical operators
//!
//! Provides [`Symbol`], the operators understood by the tableaux engine, each
//! with a canonical Unicode glyph and an ASCII mnemonic for keyboard input.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

mod glyph {
    pub(super) const NOT: &str = "¬";
    pub(super) const AND: &str = "∧";
    pub(super) const OR: &str = "∨";
    pub(super) const MAT_IMPL: &str = "⊃";
    pub(super) const MAT_EQUIV: &str = "≡";
    pub(super) const POSSIB: &str = "◇";
    pub(super) const NECESS: &str = "□";
}

/// Logical operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    /// Negation
    Not,
    /// Conjunction
    And,
    /// Disjunction
    Or,
    /// Material implication
    MatImpl,
    /// Material equivalence
    MatEquiv,
    /// Possibility
    Possib,
    /// Necessity
    Necess,
}

impl Symbol {
    /// All symbols in catalog priority order.
    ///
    /// `MatImpl` is ASCII `>`, which also occurs inside `<>`, so it must be
    /// substituted after `Possib`.
    pub const CATALOG_ORDER: [Symbol; 7] = [
        Symbol::Not,
        Symbol::And,
        Symbol::Or,
        Symbol::MatEquiv,
        Symbol::Possib,
        Symbol::Necess,
        Symbol::MatImpl,
    ];

    /// Canonical Unicode glyph
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Symbol::Not => glyph::NOT,
            Symbol::And => glyph::AND,
            Symbol::Or => glyph::OR,
            Symbol::MatImpl => glyph::MAT_IMPL,
            Symbol::MatEquiv => glyph::MAT_EQUIV,
            Symbol::Possib => glyph::POSSIB,
            Symbol::Necess => glyph::NECESS,
        }
    }

    /// ASCII mnemonic
    #[inline]
    #[must_use]
    pub const fn ascii(self) -> &'static str {
        match self {
            Symbol::Not => "!",
            Symbol::And => "&&",
            Symbol::Or => "||",
            Symbol::MatImpl => ">",
            Symbol::MatEquiv => "==",
            Symbol::Possib => "<>",
            Symbol::Necess => "[]",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Symbol::Not => "Not",
            Symbol::And => "And",
            Symbol::Or => "Or",
            Symbol::MatImpl => "Material implication",
            Symbol::MatEquiv => "Material equivalence",
            Symbol::Possib => "Possibility",
            Symbol::Necess => "Necessity",
        }
    }

    /// Iterate symbols in catalog priority order
    pub fn iter() -> impl Iterator<Item = Symbol> {
        Self::CATALOG_ORDER.into_iter()
    }

    /// Look up a symbol by its glyph or ASCII mnemonic
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::iter().find(|s| s.glyph() == token || s.ascii() == token)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_is_in_catalog_order_once() {
        let all = [
            Symbol::Not,
            Symbol::And,
            Symbol::Or,
            Symbol::MatImpl,
            Symbol::MatEquiv,
            Symbol::Possib,
            Symbol::Necess,
        ];
        for symbol in all {
            assert_eq!(Symbol::iter().filter(|s| *s == symbol).count(), 1);
        }
    }

    #[test]
    fn implication_follows_possibility() {
        let order: Vec<_> = Symbol::iter().collect();
        let possib = order.iter().position(|s| *s == Symbol::Possib).unwrap();
        let impl_ = order.iter().position(|s| *s == Symbol::MatImpl).unwrap();
        assert!(possib < impl_);
    }

    #[test]
    fn glyphs_are_single_chars() {
        for symbol in Symbol::iter() {
            assert_eq!(symbol.glyph().chars().count(), 1, "{}", symbol.name());
        }
    }

    #[test]
    fn from_token_accepts_both_forms() {
        assert_eq!(Symbol::from_token("<>"), Some(Symbol::Possib));
        assert_eq!(Symbol::from_token("◇"), Some(Symbol::Possib));
        assert_eq!(Symbol::from_token("->"), None);
    }

    #[test]
    fn display_uses_glyph() {
        assert_eq!(Symbol::MatEquiv.to_string(), "≡");
    }
}
