//! Conversions between rusqlite types and the core value model.
//!
//! Two directions live here: mapping a fetched cell into an owned
//! [`Value`], and emulating the native column accessors' cross-type
//! conversions for the typed driver reads. The conversion rules follow the
//! engine's documented behavior: numbers render as text, text converts to
//! its leading numeric prefix, NULL reads as zero or empty.

use rowset_core::{EngineError, Value};
use rusqlite::types::ValueRef;

/// Copies a fetched cell into an owned [`Value`].
pub(crate) fn value_from_ref(cell: ValueRef<'_>) -> Value {
    match cell {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::Integer(v),
        ValueRef::Real(v) => Value::Real(v),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
    }
}

/// Maps a rusqlite error to an [`EngineError`] carrying the extended
/// result code. Errors that did not originate in the engine map to `-1`.
pub(crate) fn engine_error(err: &rusqlite::Error) -> EngineError {
    let code = match err {
        rusqlite::Error::SqliteFailure(failure, _) => i64::from(failure.extended_code),
        _ => -1,
    };
    EngineError::new(code, err.to_string())
}

/// Text content of a cell, as the native text accessor would report it.
pub(crate) fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Integer(v) => v.to_string(),
        Value::Real(v) => real_to_text(*v),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => String::from_utf8_lossy(b).into_owned(),
    }
}

/// Integer content of a cell, as the native 64-bit accessor would report
/// it. Reals truncate toward zero; text converts via its leading numeric
/// prefix.
pub(crate) fn int_of(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Integer(v) => *v,
        Value::Real(v) => *v as i64,
        Value::Text(s) => leading_real(s) as i64,
        Value::Blob(b) => leading_real(&String::from_utf8_lossy(b)) as i64,
    }
}

/// Float content of a cell, as the native float accessor would report it.
pub(crate) fn double_of(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Integer(v) => *v as f64,
        Value::Real(v) => *v,
        Value::Text(s) => leading_real(s),
        Value::Blob(b) => leading_real(&String::from_utf8_lossy(b)),
    }
}

/// Blob content of a cell, as the native blob accessor would report it:
/// the raw bytes for blobs and text, the text rendering for numbers, and
/// empty for NULL.
pub(crate) fn blob_of(value: &Value) -> Vec<u8> {
    match value {
        Value::Null => Vec::new(),
        Value::Integer(v) => v.to_string().into_bytes(),
        Value::Real(v) => real_to_text(*v).into_bytes(),
        Value::Text(s) => s.clone().into_bytes(),
        Value::Blob(b) => b.clone(),
    }
}

/// Renders a float the way the engine does: whole values keep one decimal
/// digit so the text still reads as a real.
fn real_to_text(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

/// Numeric value of the longest numeric prefix of `s`, or 0 when there is
/// none.
fn leading_real(s: &str) -> f64 {
    let t = s.trim_start();
    let mut value = 0.0;
    for (idx, ch) in t.char_indices() {
        if !matches!(ch, '0'..='9' | '+' | '-' | '.' | 'e' | 'E') {
            break;
        }
        if let Ok(v) = t[..idx + ch.len_utf8()].parse::<f64>() {
            value = v;
        }
    }
    value
}
