use proptest::prelude::*;
use tbx_symbol::{normalize, BuiltinCatalog, PairCatalog, SymbolCatalog};

fn arrows() -> PairCatalog {
    PairCatalog::new().with_pair("<->", "↔").with_pair("->", "→")
}

proptest! {
    #[test]
    fn prop_builtin_leaves_no_mnemonic(text in "[a-z!&|<>=\\[\\] (),]{0,40}") {
        let out = normalize(&text, &BuiltinCatalog);
        for (ascii, _) in BuiltinCatalog.pairs() {
            prop_assert!(!out.contains(ascii), "{ascii:?} left in {out:?}");
        }
    }

    #[test]
    fn prop_builtin_is_idempotent(text in "[a-z!&|<>=\\[\\] (),]{0,40}") {
        let once = normalize(&text, &BuiltinCatalog);
        let twice = normalize(&once, &BuiltinCatalog);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_arrows_never_produce_broken_biconditional(text in "[AB<>\\- ]{0,30}") {
        let out = normalize(&text, &arrows());
        prop_assert!(!out.contains("<→"));
        prop_assert_eq!(normalize(&out, &arrows()), out.clone());
    }

    #[test]
    fn prop_text_without_mnemonics_is_unchanged(text in "[a-z (),]{0,40}") {
        prop_assert_eq!(normalize(&text, &BuiltinCatalog), text);
    }
}

#[test]
fn test_biconditional_is_not_split() {
    assert_eq!(normalize("A<->B", &arrows()), "A↔B");
}

#[test]
fn test_full_textbook_argument() {
    let text = "[](p > q), []p";
    assert_eq!(normalize(text, &BuiltinCatalog), "□(p ⊃ q), □p");
}
