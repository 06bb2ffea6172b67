//! Info command implementation.
//!
//! This module prints a summary of the loaded cutoff dataset: row count and
//! the distinct values of each filter dimension.

use std::path::Path;

use anyhow::Result;

/// Show a summary of the loaded dataset.
pub(crate) fn show_info(data: &Path) -> Result<()> {
    let table = crate::display::load_table(data)?;

    println!("Dataset:    {}", data.display());
    println!("Rows:       {}", table.len());
    println!("Quotas:     {}", table.quotas().join(", "));
    println!("Categories: {}", table.categories().join(", "));
    println!("Genders:    {}", table.genders().join(", "));
    println!("Rounds:     {}", table.rounds().join(", "));

    Ok(())
}
