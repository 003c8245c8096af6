//! Name-based lookups, in-place edits, and recoverable lookup errors.
//!
//! Run with: cargo run --example lookup

use csv_table::{from_str_with_options, Error, ReaderOptions};

fn main() -> Result<(), Error> {
    let csv = "sku , name , price\nW-1, Widget ,9.99\nG-2,\" Gadget \",14.50,extra";
    let options = ReaderOptions::new().with_trim_columns(true);
    let mut table = from_str_with_options(csv, options)?;

    for i in 0..table.record_count() {
        let row = table.record_map(i)?;
        println!("{row:?}");
    }

    table.set_field_by_name(0, "price", "8.99")?;
    println!("New price: {}", table.field_by_name(0, "price")?);

    // Lookup errors are local: treat them as an absent value
    match table.field_by_name(0, "colour") {
        Ok(value) => println!("colour = {value}"),
        Err(Error::UnknownFieldName(name)) => println!("No '{name}' column"),
        Err(e) => return Err(e),
    }

    let extra = table.field(1, 3).unwrap_or("<none>");
    println!("Extra field on record 1: {extra}");

    Ok(())
}
