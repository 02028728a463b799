//! Tri-state optional field for partial-update payloads.

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A request field that is either left out of the payload, sent as an
/// explicit `null`, or sent with a value.
///
/// Partial-update endpoints treat an absent field as "leave unchanged" and a
/// `null` field as "clear it", so `Option<T>` is not enough to express a
/// request. Every field of this type must be declared with
///
/// ```ignore
/// #[serde(default, skip_serializing_if = "Nullable::is_unset")]
/// ```
///
/// so that `Unset` never reaches the wire and a missing field decodes back to
/// `Unset`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Nullable<T> {
    /// Omitted from the payload.
    #[default]
    Unset,
    /// Present as JSON `null`.
    Null,
    /// Present with a value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Builds a `Nullable` from an `Option`, mapping `None` to an explicit null.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }

    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns the value, if one is set.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unset | Self::Null => None,
        }
    }

    /// Collapses unset and null into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unset | Self::Null => None,
        }
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Unset => Nullable::Unset,
            Self::Null => Nullable::Null,
            Self::Value(v) => Nullable::Value(v),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Self::Unset => Nullable::Unset,
            Self::Null => Nullable::Null,
            Self::Value(v) => Nullable::Value(f(v)),
        }
    }

    /// Returns `self` unless it is unset, in which case `other` is returned.
    ///
    /// An explicit null wins over `other`.
    pub fn or(self, other: Nullable<T>) -> Nullable<T> {
        match self {
            Self::Unset => other,
            set => set,
        }
    }

    /// Applies partial-update semantics to `target`: unset leaves it alone,
    /// null clears it, a value replaces it.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Self::Unset => {}
            Self::Null => *target = None,
            Self::Value(v) => *target = Some(v),
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Nullable<String> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // An absent field has no wire form; it must be skipped by the parent.
            Self::Unset => Err(S::Error::custom(
                "Nullable::Unset must be skipped with `skip_serializing_if = \"Nullable::is_unset\"`",
            )),
            Self::Null => serializer.serialize_none(),
            Self::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Patch {
        #[serde(default, skip_serializing_if = "Nullable::is_unset")]
        note: Nullable<String>,
        #[serde(default, skip_serializing_if = "Nullable::is_unset")]
        amount: Nullable<i64>,
    }

    #[derive(Serialize)]
    struct UnskippedPatch {
        note: Nullable<String>,
    }

    #[test]
    fn test_unset_without_skip_is_an_error() {
        let err = serde_json::to_value(UnskippedPatch {
            note: Nullable::Unset,
        })
        .unwrap_err();
        assert!(err.to_string().contains("Nullable::Unset"));

        let value = serde_json::to_value(UnskippedPatch {
            note: Nullable::Null,
        })
        .unwrap();
        assert_eq!(value, json!({ "note": null }));
    }

    #[test]
    fn test_unset_is_omitted() {
        let patch = Patch::default();
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({}));
    }

    #[test]
    fn test_null_is_written() {
        let patch = Patch {
            note: Nullable::Null,
            amount: Nullable::Value(42),
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "note": null, "amount": 42 })
        );
    }

    #[test]
    fn test_deserialize_distinguishes_states() {
        let patch: Patch = serde_json::from_value(json!({ "note": null })).unwrap();
        assert!(patch.note.is_null());
        assert!(patch.amount.is_unset());

        let patch: Patch = serde_json::from_value(json!({ "note": "hi" })).unwrap();
        assert_eq!(patch.note.value().map(String::as_str), Some("hi"));
    }

    #[test]
    fn test_apply_to() {
        let mut target = Some("old".to_string());

        Nullable::Unset.apply_to(&mut target);
        assert_eq!(target.as_deref(), Some("old"));

        Nullable::<String>::from("new").apply_to(&mut target);
        assert_eq!(target.as_deref(), Some("new"));

        Nullable::Null.apply_to(&mut target);
        assert!(target.is_none());
    }

    #[test]
    fn test_or_keeps_explicit_null() {
        let explicit: Nullable<i64> = Nullable::Null;
        assert_eq!(explicit.or(Nullable::Value(1)), Nullable::Null);

        let unset: Nullable<i64> = Nullable::Unset;
        assert_eq!(unset.or(Nullable::Value(1)), Nullable::Value(1));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Nullable::from_option(Some(3_i64)), Nullable::Value(3));
        assert_eq!(Nullable::<i64>::from_option(None), Nullable::Null);
        assert_eq!(Nullable::Value(2_i64).map(|v| v * 2).into_option(), Some(4));
    }
}
