//! Filter criteria and validated prediction queries.

use serde::Serialize;

use crate::{CutoffRecord, ValidationError};

/// Default number of predictions returned by a query.
pub const DEFAULT_TOP_N: usize = 10;

/// Exact-match filter dimensions.
///
/// Quota, category, seat gender, and round partition the historical dataset
/// into disjoint admission-band groups; a query selects exactly one group.
/// Fields are trimmed at construction and matched case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FilterCriteria {
    quota: String,
    category: String,
    gender: String,
    round: String,
}

impl FilterCriteria {
    /// Creates filter criteria, trimming surrounding whitespace from every
    /// field.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first field that is blank after trimming.
    pub fn new(
        quota: impl Into<String>,
        category: impl Into<String>,
        gender: impl Into<String>,
        round: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            quota: non_blank("quota", quota.into())?,
            category: non_blank("category", category.into())?,
            gender: non_blank("gender", gender.into())?,
            round: non_blank("round", round.into())?,
        })
    }

    /// Returns the admission quota.
    #[must_use]
    pub fn quota(&self) -> &str {
        &self.quota
    }

    /// Returns the reservation category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the seat gender pool.
    #[must_use]
    pub fn gender(&self) -> &str {
        &self.gender
    }

    /// Returns the counselling round.
    #[must_use]
    pub fn round(&self) -> &str {
        &self.round
    }

    /// Returns true if the record falls in this criteria's partition.
    #[must_use]
    pub fn matches(&self, record: &CutoffRecord) -> bool {
        record.quota == self.quota
            && record.category == self.category
            && record.seat_gender == self.gender
            && record.round == self.round
    }
}

impl std::fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/round {}",
            self.quota, self.category, self.gender, self.round
        )
    }
}

/// Validates that a field is non-empty after trimming.
fn non_blank(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankField { field });
    }
    Ok(trimmed.to_string())
}

/// A validated prediction request.
///
/// Construction rejects non-positive ranks; criteria fields are validated by
/// [`FilterCriteria::new`]. Once built, a query is known-good and the
/// estimator core accepts it without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionQuery {
    rank: u32,
    criteria: FilterCriteria,
    top_n: usize,
}

impl PredictionQuery {
    /// Creates a query with the default result limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the rank is not a positive integer representable
    /// as a rank value.
    pub fn new(rank: i64, criteria: FilterCriteria) -> Result<Self, ValidationError> {
        let rank = u32::try_from(rank)
            .ok()
            .filter(|r| *r > 0)
            .ok_or(ValidationError::InvalidRank { rank })?;
        Ok(Self {
            rank,
            criteria,
            top_n: DEFAULT_TOP_N,
        })
    }

    /// Sets the maximum number of results returned.
    ///
    /// A limit of zero yields an empty result set.
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Returns the candidate rank.
    #[must_use]
    pub const fn rank(&self) -> u32 {
        self.rank
    }

    /// Returns the filter criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Returns the maximum number of results.
    #[must_use]
    pub const fn top_n(&self) -> usize {
        self.top_n
    }
}
