//! The dynamic value model for result cells.
//!
//! A database cell holds one of five storage classes. [`Value`] is the
//! closed sum type over those classes, and every conversion out of it is a
//! non-panicking probe: the conversion matching the active variant succeeds,
//! anything else yields `None`. There is deliberately no partial coercion —
//! `Text("123")` does not convert to an integer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage class of a column or value.
///
/// Mirrors the five fundamental storage classes reported by the engine for
/// a column in the current row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageClass {
    /// SQL NULL.
    Null,
    /// 64-bit signed integer.
    Integer,
    /// 64-bit IEEE 754 floating point.
    Real,
    /// UTF-8 text.
    Text,
    /// Binary blob.
    Blob,
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageClass::Null => "NULL",
            StorageClass::Integer => "INTEGER",
            StorageClass::Real => "REAL",
            StorageClass::Text => "TEXT",
            StorageClass::Blob => "BLOB",
        };
        f.write_str(name)
    }
}

/// A single cell value from a result row.
///
/// Exactly one variant is ever active. Values are constructed from native
/// column reads keyed by the reported [`StorageClass`], and own their
/// contents — a `Value` extracted from a row stays valid after the cursor
/// moves on.
///
/// # Examples
///
/// ```
/// use rowset_core::Value;
///
/// let v = Value::Integer(1);
/// assert_eq!(v.as_int(), Some(1));
/// assert_eq!(v.as_bool(), Some(true));
/// assert_eq!(v.as_str(), None);
///
/// let v = Value::Text("123".to_string());
/// assert_eq!(v.as_str(), Some("123"));
/// assert_eq!(v.as_int(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float.
    Real(f64),
    /// A UTF-8 string.
    Text(String),
    /// A binary blob.
    Blob(Vec<u8>),
}

impl Value {
    /// Returns the storage class of this value.
    pub const fn storage_class(&self) -> StorageClass {
        match self {
            Value::Null => StorageClass::Null,
            Value::Integer(_) => StorageClass::Integer,
            Value::Real(_) => StorageClass::Real,
            Value::Text(_) => StorageClass::Text,
            Value::Blob(_) => StorageClass::Blob,
        }
    }

    /// Returns `true` if this value is SQL NULL.
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the text content, or `None` for any non-`Text` variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, or `None` for any non-`Integer` variant.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float content, or `None` for any non-`Real` variant.
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Value::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the blob content, or `None` for any non-`Blob` variant.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// Interprets an integer cell as a boolean.
    ///
    /// `Integer(0)` is `false` and `Integer(1)` is `true`. Any other
    /// integer, and any other variant, yields `None` rather than guessing.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Integer(0) => Some(false),
            Value::Integer(1) => Some(true),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
            Value::Blob(b) => write!(f, "<{} byte blob>", b.len()),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<Value> {
        vec![
            Value::Null,
            Value::Integer(42),
            Value::Real(1.5),
            Value::Text("hello".to_string()),
            Value::Blob(vec![0xde, 0xad]),
        ]
    }

    #[test]
    fn test_matching_conversion_succeeds() {
        assert_eq!(Value::Text("abc".into()).as_str(), Some("abc"));
        assert_eq!(Value::Integer(-7).as_int(), Some(-7));
        assert_eq!(Value::Real(2.25).as_double(), Some(2.25));
        assert_eq!(Value::Blob(vec![1, 2]).as_bytes(), Some(&[1u8, 2][..]));
    }

    #[test]
    fn test_mismatched_conversion_is_absent() {
        for value in all_variants() {
            match value.storage_class() {
                StorageClass::Text => {
                    assert!(value.as_int().is_none());
                    assert!(value.as_double().is_none());
                    assert!(value.as_bytes().is_none());
                }
                StorageClass::Integer => {
                    assert!(value.as_str().is_none());
                    assert!(value.as_double().is_none());
                    assert!(value.as_bytes().is_none());
                }
                StorageClass::Real => {
                    assert!(value.as_str().is_none());
                    assert!(value.as_int().is_none());
                    assert!(value.as_bytes().is_none());
                }
                StorageClass::Blob => {
                    assert!(value.as_str().is_none());
                    assert!(value.as_int().is_none());
                    assert!(value.as_double().is_none());
                }
                StorageClass::Null => {
                    assert!(value.as_str().is_none());
                    assert!(value.as_int().is_none());
                    assert!(value.as_double().is_none());
                    assert!(value.as_bytes().is_none());
                }
            }
        }
    }

    #[test]
    fn test_no_partial_coercion_from_text() {
        let value = Value::Text("123".to_string());
        assert_eq!(value.as_int(), None);
        assert_eq!(value.as_double(), None);
    }

    #[test]
    fn test_bool_mapping() {
        assert_eq!(Value::Integer(0).as_bool(), Some(false));
        assert_eq!(Value::Integer(1).as_bool(), Some(true));
        assert_eq!(Value::Integer(2).as_bool(), None);
        assert_eq!(Value::Integer(-1).as_bool(), None);
        assert_eq!(Value::Text("true".into()).as_bool(), None);
        assert_eq!(Value::Null.as_bool(), None);
    }

    #[test]
    fn test_storage_class() {
        let classes: Vec<StorageClass> =
            all_variants().iter().map(Value::storage_class).collect();
        assert_eq!(
            classes,
            vec![
                StorageClass::Null,
                StorageClass::Integer,
                StorageClass::Real,
                StorageClass::Text,
                StorageClass::Blob,
            ]
        );
    }

    #[test]
    fn test_is_null() {
        assert!(Value::Null.is_null());
        assert!(!Value::Integer(0).is_null());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Integer(5).to_string(), "5");
        assert_eq!(Value::Text("x".into()).to_string(), "x");
        assert_eq!(Value::Blob(vec![0; 4]).to_string(), "<4 byte blob>");
        assert_eq!(StorageClass::Real.to_string(), "REAL");
    }

    #[test]
    fn test_serde_round_trip() {
        for value in all_variants() {
            let json = serde_json::to_string(&value).unwrap();
            let restored: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value, restored);
        }
        assert_eq!(serde_json::to_string(&Value::Integer(1)).unwrap(), "{\"Integer\":1}");
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "\"Null\"");
    }
}
