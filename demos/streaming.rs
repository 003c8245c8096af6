//! Record-at-a-time reading from a file, then a full rewind into a table.
//!
//! Run with: cargo run --example streaming

use csv_table::{CsvReader, ReaderOptions};
use std::error::Error;
use std::io::Write;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::temp_dir().join("csv_table_streaming_demo.csv");
    {
        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "city,country,population")?;
        writeln!(file, "Oslo,Norway,709000")?;
        writeln!(file, "   ")?;
        writeln!(file, "\"Washington, D.C.\",USA,689000")?;
    }

    let mut reader = CsvReader::open(&path, ReaderOptions::new())?;
    while reader.read_next_record()? {
        println!(
            "line {}: {} fields {:?}",
            reader.line_number(),
            reader.field_count().unwrap_or(0),
            reader.fields().unwrap_or_default()
        );
    }

    let table = reader.read_into_table()?;
    println!("\nRewound and loaded {} records", table.record_count());

    std::fs::remove_file(&path)?;
    Ok(())
}
