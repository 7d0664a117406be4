//! The forward-only cursor over an executed statement.
//!
//! [`ResultSet`] wraps a [`StatementDriver`] and tracks where the cursor is
//! in its lifecycle. Column accessors are only honored while positioned on
//! a row; every other access is answered with an explicit error instead of
//! reaching into the native statement in an undefined state.

use std::fmt;

use crate::driver::{StatementDriver, StepOutcome};
use crate::error::{CursorError, EngineError, Result};
use crate::row::{Row, RowItem};
use crate::value::{StorageClass, Value};

/// Lifecycle state of a [`ResultSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Created but not yet positioned; no row has been fetched.
    Created,
    /// Positioned on a valid row.
    Positioned,
    /// The result set ran out of rows.
    Exhausted,
    /// A step reported an engine failure.
    Failed,
    /// The statement was released via [`ResultSet::close`].
    Closed,
}

impl fmt::Display for CursorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CursorState::Created => "created",
            CursorState::Positioned => "positioned",
            CursorState::Exhausted => "exhausted",
            CursorState::Failed => "failed",
            CursorState::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// A forward-only iterator over the rows produced by one executed statement.
///
/// Owns its driver for its whole lifetime: advancing, column reads, and
/// release all go through it. Accessors re-read from the driver on every
/// call; to keep data past the next [`advance`](Self::advance), materialize
/// a [`Row`] with [`current_row`](Self::current_row).
pub struct ResultSet<D: StatementDriver> {
    driver: D,
    state: CursorState,
    close_outcome: Option<std::result::Result<(), EngineError>>,
}

impl<D: StatementDriver> ResultSet<D> {
    /// Wraps a not-yet-positioned statement driver.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            state: CursorState::Created,
            close_outcome: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Moves the cursor to the next row.
    ///
    /// Returns `Ok(true)` when positioned on a new row and `Ok(false)` when
    /// the result set is exhausted. An engine failure moves the cursor to
    /// [`CursorState::Failed`] and surfaces as [`CursorError::Engine`] with
    /// the native code and diagnostic. Advancing an exhausted cursor stays a
    /// harmless `Ok(false)`; advancing after a failure or close is an
    /// [`CursorError::InvalidCursorState`] usage error.
    pub fn advance(&mut self) -> Result<bool> {
        match self.state {
            CursorState::Created | CursorState::Positioned => match self.driver.step() {
                StepOutcome::Row => {
                    self.state = CursorState::Positioned;
                    Ok(true)
                }
                StepOutcome::Done => {
                    self.state = CursorState::Exhausted;
                    Ok(false)
                }
                StepOutcome::Error(err) => {
                    self.state = CursorState::Failed;
                    Err(err.into())
                }
            },
            CursorState::Exhausted => Ok(false),
            state @ (CursorState::Failed | CursorState::Closed) => {
                Err(CursorError::InvalidCursorState { state })
            }
        }
    }

    /// Releases the statement.
    ///
    /// Valid from any state, including before the first
    /// [`advance`](Self::advance). The first call delegates to the driver's
    /// finalize and memoizes the outcome; every later call is a no-op
    /// returning that same outcome.
    pub fn close(&mut self) -> Result<()> {
        if let Some(outcome) = &self.close_outcome {
            return outcome.clone().map_err(CursorError::from);
        }
        let outcome = self.driver.finalize();
        self.close_outcome = Some(outcome.clone());
        self.state = CursorState::Closed;
        outcome.map_err(CursorError::from)
    }

    /// Number of columns in the result.
    ///
    /// Like the other accessors this is only valid while positioned on a
    /// row.
    pub fn column_count(&self) -> Result<usize> {
        self.check_positioned()?;
        Ok(self.driver.column_count())
    }

    /// The value of the column at `index`, typed by its reported storage
    /// class.
    pub fn value(&self, index: usize) -> Result<Value> {
        self.check_column(index)?;
        Ok(match self.driver.column_storage_class(index) {
            StorageClass::Null => Value::Null,
            StorageClass::Integer => Value::Integer(self.driver.column_int(index)),
            StorageClass::Real => Value::Real(self.driver.column_double(index)),
            StorageClass::Text => Value::Text(self.driver.column_text(index)),
            StorageClass::Blob => Value::Blob(self.driver.column_blob(index)),
        })
    }

    /// Text of the column at `index`, via the engine's converting read.
    pub fn string_value(&self, index: usize) -> Result<String> {
        self.check_column(index)?;
        Ok(self.driver.column_text(index))
    }

    /// 32-bit integer of the column at `index`, truncating like the native
    /// 32-bit column read.
    pub fn int32_value(&self, index: usize) -> Result<i32> {
        self.check_column(index)?;
        Ok(self.driver.column_int(index) as i32)
    }

    /// 64-bit integer of the column at `index`, via the engine's converting
    /// read.
    pub fn int_value(&self, index: usize) -> Result<i64> {
        self.check_column(index)?;
        Ok(self.driver.column_int(index))
    }

    /// Float of the column at `index`, via the engine's converting read.
    pub fn double_value(&self, index: usize) -> Result<f64> {
        self.check_column(index)?;
        Ok(self.driver.column_double(index))
    }

    /// Blob of the column at `index`, via the engine's converting read.
    pub fn data_value(&self, index: usize) -> Result<Vec<u8>> {
        self.check_column(index)?;
        Ok(self.driver.column_blob(index))
    }

    /// Materializes the current row as an immutable snapshot.
    ///
    /// Reads name and value for every column of the current row. The
    /// returned [`Row`] owns its values and is unaffected by further
    /// advances.
    pub fn current_row(&self) -> Result<Row> {
        self.check_positioned()?;
        let count = self.driver.column_count();
        let mut items = Vec::with_capacity(count);
        for index in 0..count {
            items.push(RowItem::new(
                index,
                self.driver.column_name(index),
                self.value(index)?,
            ));
        }
        Ok(Row::new(items))
    }

    /// Advances and, if a row is available, materializes it.
    pub fn next_row(&mut self) -> Result<Option<Row>> {
        if self.advance()? {
            Ok(Some(self.current_row()?))
        } else {
            Ok(None)
        }
    }

    /// Iterates the remaining rows as materialized snapshots.
    ///
    /// ```ignore
    /// for row in result_set.rows() {
    ///     let row = row?;
    ///     // ...
    /// }
    /// ```
    pub fn rows(&mut self) -> RowIter<'_, D> {
        RowIter { cursor: self }
    }

    fn check_positioned(&self) -> Result<()> {
        if self.state == CursorState::Positioned {
            Ok(())
        } else {
            Err(CursorError::InvalidCursorState { state: self.state })
        }
    }

    fn check_column(&self, index: usize) -> Result<()> {
        self.check_positioned()?;
        let count = self.driver.column_count();
        if index >= count {
            return Err(CursorError::OutOfRange { index, count });
        }
        Ok(())
    }
}

/// Iterator over materialized rows, created by [`ResultSet::rows`].
pub struct RowIter<'rs, D: StatementDriver> {
    cursor: &'rs mut ResultSet<D>,
}

impl<D: StatementDriver> Iterator for RowIter<'_, D> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_row().transpose()
    }
}
