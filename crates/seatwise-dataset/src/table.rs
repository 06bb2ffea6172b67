//! Immutable in-memory cutoff table.

use std::collections::HashMap;
use std::path::Path;

use seatwise_types::{CutoffRecord, FilterCriteria};

use crate::loader::{self, DatasetError};

/// Index key over the four exact-match filter dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FilterKey {
    quota: String,
    category: String,
    gender: String,
    round: String,
}

impl FilterKey {
    fn of(record: &CutoffRecord) -> Self {
        Self {
            quota: record.quota.clone(),
            category: record.category.clone(),
            gender: record.seat_gender.clone(),
            round: record.round.clone(),
        }
    }

    fn from_criteria(criteria: &FilterCriteria) -> Self {
        Self {
            quota: criteria.quota().to_string(),
            category: criteria.category().to_string(),
            gender: criteria.gender().to_string(),
            round: criteria.round().to_string(),
        }
    }
}

/// Read-only table of historical cutoff records.
///
/// The table is built once at startup and never mutated, so any number of
/// queries may run against it concurrently. Rows are indexed by
/// (quota, category, gender, round) at construction, making criteria
/// lookups proportional to the matching partition rather than the whole
/// table.
#[derive(Debug)]
pub struct CutoffTable {
    records: Vec<CutoffRecord>,
    by_criteria: HashMap<FilterKey, Vec<usize>>,
}

impl CutoffTable {
    /// Builds a table and its criteria index from loaded records.
    #[must_use]
    pub fn from_records(records: Vec<CutoffRecord>) -> Self {
        let mut by_criteria: HashMap<FilterKey, Vec<usize>> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            by_criteria.entry(FilterKey::of(record)).or_default().push(idx);
        }
        Self {
            records,
            by_criteria,
        }
    }

    /// Loads a table from a CSV dataset file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        Ok(Self::from_records(loader::load_csv(path)?))
    }

    /// Returns the total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns all records in dataset order.
    #[must_use]
    pub fn records(&self) -> &[CutoffRecord] {
        &self.records
    }

    /// Returns the records in the partition selected by the criteria.
    #[must_use]
    pub fn matching(&self, criteria: &FilterCriteria) -> Vec<&CutoffRecord> {
        self.by_criteria
            .get(&FilterKey::from_criteria(criteria))
            .map(|indices| indices.iter().map(|&idx| &self.records[idx]).collect())
            .unwrap_or_default()
    }

    /// Searches institutes by case-insensitive substring match, optionally
    /// narrowed by a program pattern (both conditions must hold).
    #[must_use]
    pub fn search(&self, name: &str, program: Option<&str>) -> Vec<&CutoffRecord> {
        let name = name.to_lowercase();
        let program = program.map(str::to_lowercase);
        self.records
            .iter()
            .filter(|record| {
                record.institute.to_lowercase().contains(&name)
                    && program
                        .as_ref()
                        .is_none_or(|p| record.program.to_lowercase().contains(p))
            })
            .collect()
    }

    /// Returns the distinct quotas, sorted.
    #[must_use]
    pub fn quotas(&self) -> Vec<&str> {
        self.distinct(|record| &record.quota)
    }

    /// Returns the distinct categories, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.distinct(|record| &record.category)
    }

    /// Returns the distinct seat gender pools, sorted.
    #[must_use]
    pub fn genders(&self) -> Vec<&str> {
        self.distinct(|record| &record.seat_gender)
    }

    /// Returns the distinct counselling rounds, sorted.
    #[must_use]
    pub fn rounds(&self) -> Vec<&str> {
        self.distinct(|record| &record.round)
    }

    fn distinct<F>(&self, field: F) -> Vec<&str>
    where
        F: Fn(&CutoffRecord) -> &String,
    {
        let mut values: Vec<&str> = self.records.iter().map(|r| field(r).as_str()).collect();
        values.sort_unstable();
        values.dedup();
        values
    }
}
