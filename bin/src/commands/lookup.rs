//! Lookup command implementation.
//!
//! This module handles searching the dataset for institutes and programs by
//! name pattern.

use std::path::Path;

use anyhow::Result;
use seatwise_lib::prelude::*;

use crate::display::format_rank;

/// Search institutes (and optionally programs) by substring.
pub(crate) fn lookup(data: &Path, name: &str, program: Option<&str>) -> Result<()> {
    let table = crate::display::load_table(data)?;
    let matches = table.search(name, program);

    if matches.is_empty() {
        println!("No institutes found matching '{name}'.");
        return Ok(());
    }

    println!(
        "{:<40} {:<35} {:<8} {:<10} {:>10} {:>10}",
        "INSTITUTE", "PROGRAM", "QUOTA", "CATEGORY", "OPENING", "CLOSING"
    );
    println!("{}", "-".repeat(118));

    for record in &matches {
        println!(
            "{:<40} {:<35} {:<8} {:<10} {:>10} {:>10}",
            record.institute,
            record.program,
            record.quota,
            record.category,
            format_rank(record.opening_rank),
            format_rank(record.closing_rank)
        );
    }

    println!("\nTotal: {} rows", matches.len());
    Ok(())
}
