//! SQLite statement driver for `rowset` result sets.
//!
//! This crate plugs SQLite into the engine-independent cursor from
//! [`rowset_core`]: [`SqliteStatement`] implements the
//! [`StatementDriver`](rowset_core::StatementDriver) contract on top of a
//! [`rusqlite`] row cursor, and [`query`] wires a prepared statement
//! straight into a [`ResultSet`].
//!
//! # Quick start
//!
//! ```
//! use rusqlite::Connection;
//!
//! let conn = Connection::open_in_memory().unwrap();
//! conn.execute_batch(
//!     "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT);
//!      INSERT INTO users (id, name) VALUES (1, 'ada'), (2, NULL);",
//! )
//! .unwrap();
//!
//! let mut stmt = conn.prepare("SELECT id, name FROM users ORDER BY id").unwrap();
//! let mut rs = rowset_sqlite::query(&mut stmt, []).unwrap();
//!
//! while rs.advance().unwrap() {
//!     let row = rs.current_row().unwrap();
//!     println!("{}: {:?}", row.int_value("id").unwrap(), row.string_value("name"));
//! }
//! rs.close().unwrap();
//! ```
//!
//! Binding parameters stays with rusqlite; anything accepted by
//! [`rusqlite::Statement::query`] works here:
//!
//! ```no_run
//! # use rusqlite::Connection;
//! # let conn = Connection::open("app.db").unwrap();
//! let mut stmt = conn.prepare("SELECT name FROM users WHERE id = ?1").unwrap();
//! let mut rs = rowset_sqlite::query(&mut stmt, [42]).unwrap();
//! ```

mod convert;
mod statement;

pub use statement::SqliteStatement;

use rowset_core::ResultSet;
use rusqlite::{Params, Statement};

/// Executes a prepared statement and wraps its cursor in a [`ResultSet`].
///
/// The statement must outlive the returned result set; dropping the result
/// set releases the borrow, and the statement can then be reused.
///
/// # Errors
///
/// Returns the underlying [`rusqlite::Error`] if binding the parameters or
/// starting the query fails.
pub fn query<'stmt, P: Params>(
    stmt: &'stmt mut Statement<'_>,
    params: P,
) -> Result<ResultSet<SqliteStatement<'stmt>>, rusqlite::Error> {
    let rows = stmt.query(params)?;
    Ok(ResultSet::new(SqliteStatement::new(rows)))
}
