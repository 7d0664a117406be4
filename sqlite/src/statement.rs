//! The SQLite-backed statement driver.

use rowset_core::{EngineError, StatementDriver, StepOutcome, StorageClass, Value};
use rusqlite::Rows;
use tracing::{debug, warn};

use crate::convert;

/// [`StatementDriver`] implementation over a rusqlite row cursor.
///
/// Column names are captured once at construction. Each step copies the
/// current tuple out of the native statement, so the typed column reads
/// answer from the row the cursor is positioned on, exactly as the native
/// accessors would.
///
/// The caller's [`rusqlite::Statement`] must outlive the driver; the
/// borrow is usually set up through [`query`](crate::query).
pub struct SqliteStatement<'stmt> {
    rows: Option<Rows<'stmt>>,
    names: Vec<String>,
    current: Vec<Value>,
}

impl<'stmt> SqliteStatement<'stmt> {
    /// Wraps an executed statement's row cursor.
    pub fn new(rows: Rows<'stmt>) -> Self {
        let names: Vec<String> = rows
            .as_ref()
            .map(|stmt| stmt.column_names().into_iter().map(str::to_owned).collect())
            .unwrap_or_default();
        debug!(columns = names.len(), "sqlite statement driver ready");
        Self {
            rows: Some(rows),
            names,
            current: Vec::new(),
        }
    }

    fn cell(&self, index: usize) -> &Value {
        self.current.get(index).unwrap_or(&Value::Null)
    }
}

impl StatementDriver for SqliteStatement<'_> {
    fn step(&mut self) -> StepOutcome {
        let count = self.names.len();
        let Some(rows) = self.rows.as_mut() else {
            return StepOutcome::Error(EngineError::new(
                i64::from(rusqlite::ffi::SQLITE_MISUSE),
                "statement already finalized",
            ));
        };
        match rows.next() {
            Ok(Some(row)) => {
                let mut cells = Vec::with_capacity(count);
                for index in 0..count {
                    match row.get_ref(index) {
                        Ok(cell) => cells.push(convert::value_from_ref(cell)),
                        Err(err) => {
                            let err = convert::engine_error(&err);
                            warn!(code = err.code, "column read failed: {}", err.message);
                            self.current.clear();
                            return StepOutcome::Error(err);
                        }
                    }
                }
                self.current = cells;
                StepOutcome::Row
            }
            Ok(None) => {
                self.current.clear();
                StepOutcome::Done
            }
            Err(err) => {
                let err = convert::engine_error(&err);
                warn!(code = err.code, "step failed: {}", err.message);
                self.current.clear();
                StepOutcome::Error(err)
            }
        }
    }

    fn column_count(&self) -> usize {
        self.names.len()
    }

    fn column_name(&self, index: usize) -> String {
        self.names.get(index).cloned().unwrap_or_default()
    }

    fn column_storage_class(&self, index: usize) -> StorageClass {
        self.cell(index).storage_class()
    }

    fn column_text(&self, index: usize) -> String {
        convert::text_of(self.cell(index))
    }

    fn column_int(&self, index: usize) -> i64 {
        convert::int_of(self.cell(index))
    }

    fn column_double(&self, index: usize) -> f64 {
        convert::double_of(self.cell(index))
    }

    fn column_blob(&self, index: usize) -> Vec<u8> {
        convert::blob_of(self.cell(index))
    }

    /// Drops the row cursor, which resets the native statement. The
    /// statement handle itself is finalized when the caller's
    /// [`rusqlite::Statement`] drops.
    fn finalize(&mut self) -> Result<(), EngineError> {
        self.rows = None;
        self.current.clear();
        debug!("sqlite statement driver released");
        Ok(())
    }
}
