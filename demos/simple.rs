//! Load CSV text into a table and read it back.
//!
//! Run with: cargo run --example simple

use csv_table::from_str;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let csv = "id,name,email\n\
               42,Alice Johnson,alice@example.com\n\
               \n\
               43,\"Smith, Bob\",bob@example.com\n";

    let table = from_str(csv)?;
    println!("Headers: {:?}", table.headers());
    println!("Records: {}\n", table.record_count());

    for (i, record) in table.records().iter().enumerate() {
        println!("#{i}: {:?}", record.fields());
    }

    assert_eq!(table.field_by_name(1, "name")?, "Smith, Bob");
    println!("\n✓ Loaded {} records", table.record_count());

    Ok(())
}
