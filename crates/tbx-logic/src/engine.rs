//! Logic evaluator construction interface
//!
//! The evaluator lives outside this workspace. [`LogicEngine`] is the
//! seam: [`LogicParams::instantiate`](crate::LogicParams::instantiate)
//! calls exactly one of its constructors.

use crate::chapter::LogicKind;

/// Constructors of an external logic evaluator
pub trait LogicEngine {
    /// Handle to a constructed logic system
    type Logic;

    /// Classical propositional logic
    fn classical(&self) -> Self::Logic;

    /// Basic modal logic
    fn modal(&self) -> Self::Logic;

    /// Normal modal logic with the given accessibility properties
    #[allow(clippy::fn_params_excessive_bools)]
    fn normal_modal(
        &self,
        reflexive: bool,
        symmetric: bool,
        transitive: bool,
        extendable: bool,
    ) -> Self::Logic;
}

/// Engine that renders the constructor call as text
///
/// `normalModal(true, false, false, false)`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructorCall;

impl LogicEngine for ConstructorCall {
    type Logic = String;

    fn classical(&self) -> String {
        format!("{}()", LogicKind::Classical.constructor())
    }

    fn modal(&self) -> String {
        format!("{}()", LogicKind::Modal.constructor())
    }

    fn normal_modal(
        &self,
        reflexive: bool,
        symmetric: bool,
        transitive: bool,
        extendable: bool,
    ) -> String {
        format!(
            "{}({reflexive}, {symmetric}, {transitive}, {extendable})",
            LogicKind::NormalModal.constructor()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_calls() {
        assert_eq!(ConstructorCall.classical(), "classical()");
        assert_eq!(ConstructorCall.modal(), "modal()");
        assert_eq!(
            ConstructorCall.normal_modal(false, true, true, false),
            "normalModal(false, true, true, false)"
        );
    }
}
