//! Predict command implementation.
//!
//! This module handles one-shot predictions from the command line, printing
//! the scored programs as an aligned table.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use seatwise_lib::prelude::*;

/// Estimate admission chances for a rank under the given criteria.
pub(crate) fn predict(
    data: &Path,
    rank: i64,
    quota: &str,
    category: &str,
    gender: &str,
    round: &str,
    top: usize,
) -> Result<()> {
    let table = crate::display::load_table(data)?;

    let criteria = FilterCriteria::new(quota, category, gender, round)?;
    let query = PredictionQuery::new(rank, criteria)?.with_top_n(top);

    let predictor = Predictor::new(Arc::new(table));
    let forecast = predictor.predict(&query);

    if let Some(message) = &forecast.message {
        println!("{message}");
        return Ok(());
    }

    println!(
        "{:<40} {:<35} {:>10} {:>10} {:>12}",
        "INSTITUTE", "PROGRAM", "OPENING", "CLOSING", "PROBABILITY"
    );
    println!("{}", "-".repeat(112));

    for entry in &forecast.predictions {
        println!(
            "{:<40} {:<35} {:>10.0} {:>10.0} {:>11.2}%",
            entry.institute, entry.program, entry.opening_rank, entry.closing_rank, entry.probability
        );
    }

    println!("\nTotal: {} programs", forecast.predictions.len());
    Ok(())
}
