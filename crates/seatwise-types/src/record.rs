//! Historical cutoff record representation.

use serde::{Deserialize, Serialize};

/// A single historical seat-allotment row.
///
/// Each record describes one (institute, program) seat pool under a
/// quota/category/gender/round combination, together with the opening and
/// closing rank observed for that pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutoffRecord {
    /// Institute name.
    pub institute: String,
    /// Program (branch) name.
    pub program: String,
    /// Academic stream the program belongs to.
    pub stream: String,
    /// Admission quota (e.g., "HS", "OS", "AI").
    pub quota: String,
    /// Reservation category (e.g., "OPEN", "GEN", "OBC").
    pub category: String,
    /// Seat gender pool (e.g., "Gender-Neutral", "Female-only").
    pub seat_gender: String,
    /// Counselling round the cutoff was observed in.
    pub round: String,
    /// Best (numerically lowest) admitted rank, if recorded.
    pub opening_rank: Option<f64>,
    /// Worst (numerically highest) admitted rank, if recorded.
    pub closing_rank: Option<f64>,
}

impl CutoffRecord {
    /// Creates a new cutoff record.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        institute: impl Into<String>,
        program: impl Into<String>,
        stream: impl Into<String>,
        quota: impl Into<String>,
        category: impl Into<String>,
        seat_gender: impl Into<String>,
        round: impl Into<String>,
        opening_rank: Option<f64>,
        closing_rank: Option<f64>,
    ) -> Self {
        Self {
            institute: institute.into(),
            program: program.into(),
            stream: stream.into(),
            quota: quota.into(),
            category: category.into(),
            seat_gender: seat_gender.into(),
            round: round.into(),
            opening_rank,
            closing_rank,
        }
    }

    /// Returns true if both cutoff bounds are recorded.
    #[must_use]
    pub const fn has_cutoffs(&self) -> bool {
        self.opening_rank.is_some() && self.closing_rank.is_some()
    }

    /// Returns the admission band as `(opening, closing)` when both bounds
    /// are recorded.
    #[must_use]
    pub fn admission_band(&self) -> Option<(f64, f64)> {
        Some((self.opening_rank?, self.closing_rank?))
    }
}

impl std::fmt::Display for CutoffRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.institute, self.program)
    }
}
