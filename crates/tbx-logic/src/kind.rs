//! Normal modal `kind` payload
//!
//! ```toml
//! [3.2.a]
//! conclusion = "□p ⊃ p"
//! kind = { reflexive = true }
//! ```

use serde::{Deserialize, Serialize};
use tbx_corpus::{CorpusPath, FieldReader, Level, RawValue, SchemaError};

/// Properties of the accessibility relation
///
/// Absent fields are `false`. Fields other than these four are ignored.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModalKind {
    /// ρ: every world accesses itself
    pub reflexive: bool,
    /// σ: access is symmetric
    pub symmetric: bool,
    /// τ: access is transitive
    pub transitive: bool,
    /// η: every world accesses some world
    pub extendable: bool,
}

impl ModalKind {
    /// Field names, in constructor argument order
    pub const FIELDS: [&'static str; 4] = ["reflexive", "symmetric", "transitive", "extendable"];

    /// Read a `kind` value found at `path` (the owning example)
    ///
    /// `None` yields the all-`false` kind. A repeated field takes its last
    /// value; schema validation reports the repetition as a warning.
    ///
    /// # Errors
    /// `SchemaError::TypeMismatch` at level `kind` if the value is not a
    /// table or one of the four fields is not a boolean
    pub fn from_raw(kind: Option<&RawValue>, path: &CorpusPath) -> Result<Self, SchemaError> {
        let Some(kind) = kind else {
            return Ok(Self::default());
        };
        let reader = FieldReader::new(kind, Level::Kind, path.field("kind"))?;
        let flag = |field: &str| reader.optional_bool(field).map(Option::unwrap_or_default);

        Ok(Self {
            reflexive: flag("reflexive")?,
            symmetric: flag("symmetric")?,
            transitive: flag("transitive")?,
            extendable: flag("extendable")?,
        })
    }

    /// Flags in constructor argument order
    #[inline]
    #[must_use]
    pub const fn as_array(self) -> [bool; 4] {
        [self.reflexive, self.symmetric, self.transitive, self.extendable]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> CorpusPath {
        CorpusPath::paragraph_of("3", "2", "a")
    }

    #[test]
    fn absent_kind_is_all_false() {
        assert_eq!(ModalKind::from_raw(None, &path()).unwrap(), ModalKind::default());
    }

    #[test]
    fn repeated_field_keeps_last_value() {
        let raw: RawValue =
            serde_json::from_str(r#"{ "reflexive": true, "reflexive": false }"#).unwrap();
        let kind = ModalKind::from_raw(Some(&raw), &path()).unwrap();
        assert!(!kind.reflexive);
    }

    #[test]
    fn absent_fields_default_to_false() {
        let raw = RawValue::table([("reflexive", RawValue::from(true))]);
        let kind = ModalKind::from_raw(Some(&raw), &path()).unwrap();
        assert_eq!(kind.as_array(), [true, false, false, false]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw = RawValue::table([
            ("transitive", RawValue::from(true)),
            ("euclidean", RawValue::from("yes")),
        ]);
        let kind = ModalKind::from_raw(Some(&raw), &path()).unwrap();
        assert!(kind.transitive);
    }

    #[test]
    fn non_boolean_field_fails_at_field_path() {
        let raw = RawValue::table([("symmetric", RawValue::from("true"))]);
        let err = ModalKind::from_raw(Some(&raw), &path()).unwrap_err();
        assert_eq!(err.level(), Level::Kind);
        assert_eq!(err.path().to_string(), "3/2/a.kind.symmetric");
    }

    #[test]
    fn non_table_kind_fails() {
        let raw = RawValue::from("reflexive");
        let err = ModalKind::from_raw(Some(&raw), &path()).unwrap_err();
        assert!(matches!(err, SchemaError::TypeMismatch { expected: "table", .. }));
    }
}
