//! Engine-independent primitives for consuming tabular query results.
//!
//! This crate defines the small vocabulary shared by every backend:
//!
//! - [`Value`] — closed sum type over the five storage classes a cell can
//!   hold, with strict, non-panicking conversions.
//! - [`Row`] / [`RowItem`] — an immutable snapshot of one result tuple,
//!   addressable by column name or index.
//! - [`StatementDriver`] / [`StepOutcome`] — the contract an engine binding
//!   implements for one executed prepared statement.
//! - [`ResultSet`] — the forward-only cursor over a driver, with explicit
//!   lifecycle states instead of undefined native behavior.
//! - [`CursorError`] / [`EngineError`] — the error values every fallible
//!   operation returns.
//!
//! Backends live in separate crates; `rowset-sqlite` provides the SQLite
//! driver.
//!
//! # Example
//!
//! Any type implementing [`StatementDriver`] can feed a [`ResultSet`]:
//!
//! ```
//! use rowset_core::{
//!     EngineError, ResultSet, StatementDriver, StepOutcome, StorageClass, Value,
//! };
//!
//! /// A driver serving a single one-column row.
//! struct OneRow {
//!     done: bool,
//! }
//!
//! impl StatementDriver for OneRow {
//!     fn step(&mut self) -> StepOutcome {
//!         if self.done {
//!             StepOutcome::Done
//!         } else {
//!             self.done = true;
//!             StepOutcome::Row
//!         }
//!     }
//!     fn column_count(&self) -> usize {
//!         1
//!     }
//!     fn column_name(&self, _index: usize) -> String {
//!         "answer".to_string()
//!     }
//!     fn column_storage_class(&self, _index: usize) -> StorageClass {
//!         StorageClass::Integer
//!     }
//!     fn column_text(&self, _index: usize) -> String {
//!         "42".to_string()
//!     }
//!     fn column_int(&self, _index: usize) -> i64 {
//!         42
//!     }
//!     fn column_double(&self, _index: usize) -> f64 {
//!         42.0
//!     }
//!     fn column_blob(&self, _index: usize) -> Vec<u8> {
//!         Vec::new()
//!     }
//!     fn finalize(&mut self) -> Result<(), EngineError> {
//!         Ok(())
//!     }
//! }
//!
//! let mut rs = ResultSet::new(OneRow { done: false });
//! assert!(rs.advance()?);
//!
//! let row = rs.current_row()?;
//! assert_eq!(row.int_value("answer"), Some(42));
//! assert_eq!(row.get("missing"), &Value::Null);
//!
//! assert!(!rs.advance()?);
//! rs.close()?;
//! # Ok::<(), rowset_core::CursorError>(())
//! ```

mod cursor;
mod driver;
mod error;
mod row;
mod value;

pub use cursor::{CursorState, ResultSet, RowIter};
pub use driver::{StatementDriver, StepOutcome};
pub use error::{CursorError, EngineError, Result};
pub use row::{Row, RowItem};
pub use value::{StorageClass, Value};
