//! CSV dataset loading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use seatwise_types::CutoffRecord;
use thiserror::Error;

/// Errors that can occur while loading the cutoff dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// A required column is missing from the header row.
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// The underlying CSV could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Column indices resolved from the cleaned header row.
struct Columns {
    institute: usize,
    program: usize,
    stream: usize,
    quota: usize,
    category: usize,
    seat_gender: usize,
    round: usize,
    opening_rank: usize,
    closing_rank: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, DatasetError> {
        let cleaned: Vec<String> = headers.iter().map(clean_header).collect();
        let find = |name: &'static str| {
            cleaned
                .iter()
                .position(|h| h == name)
                .ok_or(DatasetError::MissingColumn(name))
        };

        Ok(Self {
            institute: find("Institute")?,
            program: find("Program")?,
            stream: find("Stream")?,
            quota: find("Quota")?,
            category: find("Category")?,
            seat_gender: find("Seat Gender")?,
            round: find("Round")?,
            opening_rank: find("Opening Rank")?,
            closing_rank: find("Closing Rank")?,
        })
    }
}

/// Strips the decorative sort-arrow suffix that the dataset export tool
/// appends to column headers (e.g. `"Opening Rank\u{a0}▲▼"`).
fn clean_header(raw: &str) -> String {
    raw.replace("\u{a0}▲▼", "")
        .replace("▲▼", "")
        .trim()
        .to_string()
}

/// Parses a rank cell, coercing empty or unparseable values to `None`.
///
/// Non-empty cells that fail to parse are logged; the source data carries
/// placeholders like "--" in sparsely recorded rounds.
fn parse_rank(cell: &str, row: usize, column: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    match cell.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("row {row}: unparseable {column} value '{cell}', treating as unavailable");
            None
        }
    }
}

/// Reads cutoff records from a CSV source.
///
/// Headers are matched after [`clean_header`] normalization; every string
/// cell is trimmed; rank cells parse as numeric with unparseable values
/// becoming absent.
///
/// # Errors
///
/// Returns an error if a required column is missing or the CSV is
/// malformed.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CutoffRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::resolve(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for (row, result) in csv_reader.records().enumerate() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();

        records.push(CutoffRecord::new(
            cell(columns.institute),
            cell(columns.program),
            cell(columns.stream),
            cell(columns.quota),
            cell(columns.category),
            cell(columns.seat_gender),
            cell(columns.round),
            parse_rank(record.get(columns.opening_rank).unwrap_or(""), row, "Opening Rank"),
            parse_rank(record.get(columns.closing_rank).unwrap_or(""), row, "Closing Rank"),
        ));
    }

    Ok(records)
}

/// Loads cutoff records from a CSV file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn load_csv(path: &Path) -> Result<Vec<CutoffRecord>, DatasetError> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}
