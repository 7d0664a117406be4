//! Typed value probing example.
//!
//! Shows the strict conversion rules on [`rowset_core::Value`]: the probe
//! matching the stored variant succeeds, everything else is absent, and
//! integer cells double as booleans only for 0 and 1.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p rowset-demos --example typed_probing
//! ```

use rowset_core::Value;
use rusqlite::Connection;

fn main() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE samples (label TEXT, payload);
         INSERT INTO samples VALUES
             ('text', '123'),
             ('integer', 7),
             ('real', 1.5),
             ('blob', x'CAFE'),
             ('flag_on', 1),
             ('flag_off', 0),
             ('null', NULL);",
    )
    .unwrap();

    let mut stmt = conn
        .prepare("SELECT label, payload FROM samples")
        .unwrap();
    let mut rs = rowset_sqlite::query(&mut stmt, []).unwrap();

    while let Some(row) = rs.next_row().unwrap() {
        let label = row.string_value("label").unwrap();
        let value = row.get("payload");
        println!("{label:>8}: {value} ({})", value.storage_class());
        println!("          as_str    -> {:?}", value.as_str());
        println!("          as_int    -> {:?}", value.as_int());
        println!("          as_double -> {:?}", value.as_double());
        println!("          as_bool   -> {:?}", value.as_bool());
    }

    // Text '123' never silently becomes a number.
    assert_eq!(Value::Text("123".to_string()).as_int(), None);
}
