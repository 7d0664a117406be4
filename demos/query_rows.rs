//! Basic query loop example.
//!
//! Demonstrates the full result-set lifecycle: prepare a statement, wrap
//! it in a result set, advance through the rows, materialize snapshots,
//! and close.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p rowset-demos --example query_rows
//! ```

use rusqlite::Connection;

fn main() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE inventory (sku TEXT, quantity INTEGER, unit_price REAL, notes TEXT);
         INSERT INTO inventory VALUES
             ('HAMMER-01', 12, 14.99, 'back wall'),
             ('NAIL-BOX', 480, 3.25, NULL),
             ('TAPE-5M', 31, 2.5, 'aisle 3');",
    )
    .unwrap();

    // === Advance manually and read by index ===
    println!("=== Positional access ===");
    let mut stmt = conn
        .prepare("SELECT sku, quantity, unit_price FROM inventory ORDER BY sku")
        .unwrap();
    let mut rs = rowset_sqlite::query(&mut stmt, []).unwrap();
    while rs.advance().unwrap() {
        println!(
            "{:<10} qty={:<4} price={}",
            rs.string_value(0).unwrap(),
            rs.int_value(1).unwrap(),
            rs.double_value(2).unwrap(),
        );
    }
    rs.close().unwrap();
    drop(rs);

    // === Materialize rows and read by name ===
    println!("\n=== Row snapshots ===");
    let mut stmt = conn
        .prepare("SELECT sku, notes FROM inventory ORDER BY sku")
        .unwrap();
    let mut rs = rowset_sqlite::query(&mut stmt, []).unwrap();
    for row in rs.rows() {
        let row = row.unwrap();
        let notes = row.string_value("notes").unwrap_or("-");
        println!("{}: {}", row.string_value("sku").unwrap(), notes);
    }

    // === Parameterized query ===
    println!("\n=== Low stock ===");
    let mut stmt = conn
        .prepare("SELECT sku, quantity FROM inventory WHERE quantity < ?1")
        .unwrap();
    let mut rs = rowset_sqlite::query(&mut stmt, [50]).unwrap();
    while let Some(row) = rs.next_row().unwrap() {
        println!(
            "{} is low ({} left)",
            row.string_value("sku").unwrap(),
            row.int_value("quantity").unwrap(),
        );
    }
}
