// Build a standalone table and a table collection, then print
// row counts and the sequence length.

use anyhow::Result;

fn main() -> Result<()> {
    let mut rows = tablekit::OwnedRowTable::new()?;
    rows.add_row(0, 1.0)?;
    rows.add_row(0, 2.0)?;
    println!("Standalone table: num_rows = {}", rows.num_rows());

    let mut tables = tablekit::TableCollection::new(10.0)?;
    println!("Sequence length = {}", tables.sequence_length());
    tables.rows_mut().add_row(0, 1.0)?;
    tables.rows_mut().add_row(0, 2.0)?;
    tables.rows_mut().add_row(0, 3.0)?;
    println!(
        "Via table collection: num_rows = {}",
        tables.rows().num_rows()
    );

    Ok(())
}
