//! Immutable row snapshots.
//!
//! A [`Row`] is captured from a positioned cursor and owns copies of every
//! cell, so it stays valid after the cursor advances or closes. Lookups by
//! absent name or out-of-range index answer with [`Value::Null`] instead of
//! failing, which keeps row consumption free of error plumbing.

use std::collections::HashMap;

use crate::value::Value;

static NULL: Value = Value::Null;

/// One captured cell: its column index, column name, and value.
#[derive(Debug, Clone, PartialEq)]
pub struct RowItem {
    /// 0-based column index at capture time.
    pub index: usize,
    /// Column name as reported by the statement metadata.
    pub name: String,
    /// The captured value.
    pub value: Value,
}

impl RowItem {
    /// Creates a row item.
    pub fn new(index: usize, name: impl Into<String>, value: Value) -> Self {
        Self {
            index,
            name: name.into(),
            value,
        }
    }
}

/// An immutable snapshot of one result tuple.
///
/// Column names are not guaranteed unique — joins can produce duplicates.
/// Name lookups are last-write-wins in column order; every cell remains
/// addressable by its index regardless.
///
/// # Examples
///
/// ```
/// use rowset_core::{Row, RowItem, Value};
///
/// let row = Row::new(vec![
///     RowItem::new(0, "id", Value::Integer(1)),
///     RowItem::new(1, "name", Value::Text("ada".to_string())),
/// ]);
///
/// assert_eq!(row.int_value("id"), Some(1));
/// assert_eq!(row.string_value("name"), Some("ada"));
/// assert_eq!(row.get("missing"), &Value::Null);
/// assert_eq!(row.column_names(), vec!["id", "name"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    items: Vec<RowItem>,
    by_name: HashMap<String, usize>,
}

impl Row {
    /// Builds a row from captured items.
    ///
    /// Item order is preserved as the column order. Duplicate names map to
    /// the later item.
    pub fn new(items: Vec<RowItem>) -> Self {
        let mut by_name = HashMap::with_capacity(items.len());
        for (slot, item) in items.iter().enumerate() {
            by_name.insert(item.name.clone(), slot);
        }
        Self { items, by_name }
    }

    /// Returns the value stored under a column name.
    ///
    /// Absent names answer with [`Value::Null`]; this never fails.
    pub fn get(&self, column: &str) -> &Value {
        match self.by_name.get(column) {
            Some(&slot) => &self.items[slot].value,
            None => &NULL,
        }
    }

    /// Returns the value at a column index.
    ///
    /// Indices outside the captured range answer with [`Value::Null`].
    pub fn get_index(&self, index: usize) -> &Value {
        match self.items.get(index) {
            Some(item) => &item.value,
            None => &NULL,
        }
    }

    /// All column names, in the original column order at capture time.
    pub fn column_names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    /// The captured items, in column order.
    pub fn items(&self) -> &[RowItem] {
        &self.items
    }

    /// Number of captured columns.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the row captured no columns.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The text stored under `column`, or `None` for any other variant.
    pub fn string_value(&self, column: &str) -> Option<&str> {
        self.get(column).as_str()
    }

    /// The integer stored under `column`, or `None` for any other variant.
    pub fn int_value(&self, column: &str) -> Option<i64> {
        self.get(column).as_int()
    }

    /// The float stored under `column`, or `None` for any other variant.
    pub fn double_value(&self, column: &str) -> Option<f64> {
        self.get(column).as_double()
    }

    /// The blob stored under `column`, or `None` for any other variant.
    pub fn data_value(&self, column: &str) -> Option<&[u8]> {
        self.get(column).as_bytes()
    }

    /// The boolean stored under `column`.
    ///
    /// Present only when the cell is an integer 0 or 1, matching
    /// [`Value::as_bool`].
    pub fn bool_value(&self, column: &str) -> Option<bool> {
        self.get(column).as_bool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        Row::new(vec![
            RowItem::new(0, "id", Value::Integer(7)),
            RowItem::new(1, "name", Value::Text("ada".to_string())),
            RowItem::new(2, "score", Value::Real(0.5)),
            RowItem::new(3, "avatar", Value::Blob(vec![1, 2, 3])),
            RowItem::new(4, "note", Value::Null),
        ])
    }

    #[test]
    fn test_get_by_name() {
        let row = sample_row();
        assert_eq!(row.get("id"), &Value::Integer(7));
        assert_eq!(row.get("note"), &Value::Null);
    }

    #[test]
    fn test_absent_name_is_null() {
        let row = sample_row();
        assert_eq!(row.get("no_such_column"), &Value::Null);
        assert_eq!(row.string_value("no_such_column"), None);
    }

    #[test]
    fn test_get_by_index() {
        let row = sample_row();
        assert_eq!(row.get_index(1), &Value::Text("ada".to_string()));
        assert_eq!(row.get_index(99), &Value::Null);
    }

    #[test]
    fn test_column_names_preserve_order() {
        let row = sample_row();
        assert_eq!(
            row.column_names(),
            vec!["id", "name", "score", "avatar", "note"]
        );
        assert_eq!(row.len(), 5);
        assert!(!row.is_empty());
    }

    #[test]
    fn test_typed_accessors() {
        let row = sample_row();
        assert_eq!(row.int_value("id"), Some(7));
        assert_eq!(row.string_value("name"), Some("ada"));
        assert_eq!(row.double_value("score"), Some(0.5));
        assert_eq!(row.data_value("avatar"), Some(&[1u8, 2, 3][..]));
        // Wrong-variant requests are absent, not errors.
        assert_eq!(row.int_value("name"), None);
        assert_eq!(row.string_value("id"), None);
    }

    #[test]
    fn test_bool_value() {
        let row = Row::new(vec![
            RowItem::new(0, "yes", Value::Integer(1)),
            RowItem::new(1, "no", Value::Integer(0)),
            RowItem::new(2, "other", Value::Integer(5)),
            RowItem::new(3, "text", Value::Text("1".to_string())),
        ]);
        assert_eq!(row.bool_value("yes"), Some(true));
        assert_eq!(row.bool_value("no"), Some(false));
        assert_eq!(row.bool_value("other"), None);
        assert_eq!(row.bool_value("text"), None);
    }

    #[test]
    fn test_duplicate_names_last_write_wins() {
        let row = Row::new(vec![
            RowItem::new(0, "id", Value::Integer(1)),
            RowItem::new(1, "id", Value::Integer(2)),
        ]);
        assert_eq!(row.int_value("id"), Some(2));
        // Both cells stay reachable by index.
        assert_eq!(row.get_index(0), &Value::Integer(1));
        assert_eq!(row.get_index(1), &Value::Integer(2));
        assert_eq!(row.column_names(), vec!["id", "id"]);
    }

    #[test]
    fn test_empty_row() {
        let row = Row::new(Vec::new());
        assert!(row.is_empty());
        assert_eq!(row.get("anything"), &Value::Null);
        assert_eq!(row.get_index(0), &Value::Null);
    }
}
