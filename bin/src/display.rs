//! Display utilities for the seatwise CLI.

use std::path::Path;

use anyhow::{Context, Result};
use seatwise_lib::prelude::*;

/// Loads the cutoff table, logging the loaded row count.
pub(crate) fn load_table(path: &Path) -> Result<CutoffTable> {
    let table = CutoffTable::load(path)
        .with_context(|| format!("Failed to load dataset {}", path.display()))?;
    log::info!("loaded {} cutoff rows from {}", table.len(), path.display());
    Ok(table)
}

/// Formats an optional rank for display.
pub(crate) fn format_rank(rank: Option<f64>) -> String {
    rank.map_or_else(|| "n/a".to_string(), |r| format!("{r:.0}"))
}
