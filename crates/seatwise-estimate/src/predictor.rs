//! Prediction over the cutoff table.

use std::cmp::Ordering;
use std::sync::Arc;

use seatwise_dataset::CutoffTable;
use seatwise_types::{CutoffRecord, PredictionQuery};
use serde::Serialize;

use crate::probability::admission_probability;

/// A single scored program in a forecast.
///
/// Wire field names follow the dataset's column headers, which is what the
/// web frontend renders directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramForecast {
    /// Institute name.
    #[serde(rename = "Institute")]
    pub institute: String,
    /// Program name.
    #[serde(rename = "Program")]
    pub program: String,
    /// Historical opening rank.
    #[serde(rename = "Opening Rank")]
    pub opening_rank: f64,
    /// Historical closing rank.
    #[serde(rename = "Closing Rank")]
    pub closing_rank: f64,
    /// Admission probability in percent, rounded to two decimals.
    #[serde(rename = "Probability")]
    pub probability: f64,
}

/// The outcome of a prediction query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    /// Scored programs, best chances first.
    pub predictions: Vec<ProgramForecast>,
    /// Explanatory message when no program qualifies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Forecast {
    fn empty(message: impl Into<String>) -> Self {
        Self {
            predictions: Vec::new(),
            message: Some(message.into()),
        }
    }

    /// Returns true if no program qualified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

/// Admission probability predictor over an immutable cutoff table.
///
/// The table is injected at construction and shared; cloning a predictor is
/// cheap and every query is a pure read.
#[derive(Debug, Clone)]
pub struct Predictor {
    table: Arc<CutoffTable>,
}

impl Predictor {
    /// Creates a predictor over the given table.
    #[must_use]
    pub const fn new(table: Arc<CutoffTable>) -> Self {
        Self { table }
    }

    /// Returns the backing table.
    #[must_use]
    pub fn table(&self) -> &CutoffTable {
        &self.table
    }

    /// Scores every seat pool in the query's criteria partition and returns
    /// the best chances first.
    ///
    /// Pools whose rank falls outside the admission band (or which carry no
    /// recorded cutoffs) are dropped. An empty partition, or one where
    /// nothing qualifies, produces an empty forecast with an explanatory
    /// message rather than an error.
    #[must_use]
    pub fn predict(&self, query: &PredictionQuery) -> Forecast {
        let subset = self.table.matching(query.criteria());
        if subset.is_empty() {
            return Forecast::empty(format!(
                "No historical rows match {}.",
                query.criteria()
            ));
        }

        let mut predictions: Vec<ProgramForecast> = subset
            .iter()
            .filter_map(|record| score(record, query.rank()))
            .collect();

        if predictions.is_empty() {
            return Forecast::empty(near_miss_message(&subset, query.rank()));
        }

        predictions.sort_by(|a, b| {
            compare_f64(b.probability, a.probability)
                .then_with(|| compare_f64(a.closing_rank, b.closing_rank))
        });
        predictions.truncate(query.top_n());

        Forecast {
            predictions,
            message: None,
        }
    }
}

/// Scores a single record, dropping it when unscoreable or outside the
/// admission band.
fn score(record: &CutoffRecord, rank: u32) -> Option<ProgramForecast> {
    let (opening, closing) = record.admission_band()?;
    let probability = admission_probability(rank, Some(opening), Some(closing));
    if probability <= 0.0 {
        return None;
    }
    Some(ProgramForecast {
        institute: record.institute.clone(),
        program: record.program.clone(),
        opening_rank: opening,
        closing_rank: closing,
        probability: round2(probability),
    })
}

/// Builds the message shown when the criteria matched rows but the rank
/// falls outside every admission band.
fn near_miss_message(subset: &[&CutoffRecord], rank: u32) -> String {
    let best_opening = subset
        .iter()
        .filter_map(|r| r.opening_rank)
        .min_by(f64::total_cmp);
    let worst_closing = subset
        .iter()
        .filter_map(|r| r.closing_rank)
        .max_by(f64::total_cmp);

    match (best_opening, worst_closing) {
        (Some(opening), Some(closing)) => format!(
            "No program admits rank {rank} under these criteria; \
             historical cutoffs span ranks {opening:.0} to {closing:.0}."
        ),
        _ => format!(
            "No program under these criteria has recorded cutoffs to score rank {rank} against."
        ),
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Rounds to two decimal places for presentation.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use seatwise_types::FilterCriteria;

    fn create_test_record(program: &str, opening: f64, closing: f64) -> CutoffRecord {
        CutoffRecord::new(
            "XYZ Institute",
            program,
            "Engineering",
            "HS",
            "GEN",
            "Gender-Neutral",
            "1",
            Some(opening),
            Some(closing),
        )
    }

    fn create_test_predictor(records: Vec<CutoffRecord>) -> Predictor {
        Predictor::new(Arc::new(CutoffTable::from_records(records)))
    }

    fn create_test_query(rank: i64) -> PredictionQuery {
        let criteria = FilterCriteria::new("HS", "GEN", "Gender-Neutral", "1").unwrap();
        PredictionQuery::new(rank, criteria).unwrap()
    }

    #[test]
    fn test_single_row_interpolation() {
        let predictor = create_test_predictor(vec![create_test_record("CSE", 100.0, 500.0)]);

        let forecast = predictor.predict(&create_test_query(300).with_top_n(5));

        assert_eq!(forecast.predictions.len(), 1);
        assert_abs_diff_eq!(forecast.predictions[0].probability, 50.0);
        assert!(forecast.message.is_none());
    }

    #[test]
    fn test_rank_better_than_opening_is_certain() {
        let predictor = create_test_predictor(vec![create_test_record("CSE", 100.0, 500.0)]);

        let forecast = predictor.predict(&create_test_query(50));

        assert_eq!(forecast.predictions.len(), 1);
        assert_abs_diff_eq!(forecast.predictions[0].probability, 100.0);
    }

    #[test]
    fn test_rank_beyond_closing_is_dropped() {
        let predictor = create_test_predictor(vec![create_test_record("CSE", 100.0, 500.0)]);

        let forecast = predictor.predict(&create_test_query(600));

        assert!(forecast.is_empty());
        let message = forecast.message.unwrap();
        assert!(message.contains("100"), "message should cite the best opening: {message}");
        assert!(message.contains("500"), "message should cite the worst closing: {message}");
    }

    #[test]
    fn test_empty_partition_is_a_message_not_an_error() {
        let predictor = create_test_predictor(vec![create_test_record("CSE", 100.0, 500.0)]);

        let criteria = FilterCriteria::new("XX", "GEN", "Gender-Neutral", "1").unwrap();
        let query = PredictionQuery::new(300, criteria).unwrap();
        let forecast = predictor.predict(&query);

        assert!(forecast.is_empty());
        assert!(forecast.message.is_some());
    }

    #[test]
    fn test_unscoreable_rows_are_dropped() {
        let mut no_cutoffs = create_test_record("ECE", 0.0, 0.0);
        no_cutoffs.opening_rank = None;
        no_cutoffs.closing_rank = None;

        let predictor = create_test_predictor(vec![
            create_test_record("CSE", 100.0, 500.0),
            no_cutoffs,
        ]);

        let forecast = predictor.predict(&create_test_query(300));

        assert_eq!(forecast.predictions.len(), 1);
        assert_eq!(forecast.predictions[0].program, "CSE");
    }

    #[test]
    fn test_results_sorted_best_chances_first() {
        let predictor = create_test_predictor(vec![
            create_test_record("Mechanical", 200.0, 400.0),
            create_test_record("CSE", 100.0, 350.0),
            create_test_record("Civil", 250.0, 900.0),
        ]);

        let forecast = predictor.predict(&create_test_query(300));
        let programs: Vec<&str> = forecast
            .predictions
            .iter()
            .map(|p| p.program.as_str())
            .collect();

        // Civil 92.31%, Mechanical 50%, CSE 20%.
        assert_eq!(programs, vec!["Civil", "Mechanical", "CSE"]);
        let probabilities: Vec<f64> = forecast.predictions.iter().map(|p| p.probability).collect();
        assert!(probabilities.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_ties_break_by_closing_rank() {
        // Equal probability at rank 300, different selectivity.
        let predictor = create_test_predictor(vec![
            create_test_record("Wide", 100.0, 500.0),
            create_test_record("Narrow", 250.0, 350.0),
        ]);

        let forecast = predictor.predict(&create_test_query(300));

        assert_abs_diff_eq!(forecast.predictions[0].probability, 50.0);
        assert_abs_diff_eq!(forecast.predictions[1].probability, 50.0);
        assert_eq!(forecast.predictions[0].program, "Narrow");
    }

    #[test]
    fn test_top_n_truncates() {
        let records: Vec<CutoffRecord> = (0..20)
            .map(|i| create_test_record(&format!("Program {i}"), 100.0, 500.0 + f64::from(i)))
            .collect();
        let predictor = create_test_predictor(records);

        let forecast = predictor.predict(&create_test_query(300));
        assert_eq!(forecast.predictions.len(), 10);

        let forecast = predictor.predict(&create_test_query(300).with_top_n(3));
        assert_eq!(forecast.predictions.len(), 3);

        let forecast = predictor.predict(&create_test_query(300).with_top_n(0));
        assert!(forecast.predictions.is_empty());
    }

    #[test]
    fn test_probabilities_in_open_interval() {
        let predictor = create_test_predictor(vec![
            create_test_record("CSE", 100.0, 500.0),
            create_test_record("ECE", 300.0, 300.0),
            create_test_record("Civil", 600.0, 900.0),
        ]);

        let forecast = predictor.predict(&create_test_query(300));
        for entry in &forecast.predictions {
            assert!(entry.probability > 0.0 && entry.probability <= 100.0);
        }
    }

    #[test]
    fn test_probability_rounded_to_two_decimals() {
        // 100 * (1000 - 300) / (1000 - 100) = 77.777...
        let predictor = create_test_predictor(vec![create_test_record("CSE", 100.0, 1000.0)]);

        let forecast = predictor.predict(&create_test_query(300));
        assert_abs_diff_eq!(forecast.predictions[0].probability, 77.78);
    }

    #[test]
    fn test_forecast_wire_format() {
        let predictor = create_test_predictor(vec![create_test_record("CSE", 100.0, 500.0)]);

        let forecast = predictor.predict(&create_test_query(300));
        let json = serde_json::to_value(&forecast).unwrap();

        let entry = &json["predictions"][0];
        assert_eq!(entry["Institute"], "XYZ Institute");
        assert_eq!(entry["Opening Rank"], 100.0);
        assert_eq!(entry["Closing Rank"], 500.0);
        assert_eq!(entry["Probability"], 50.0);
        // No message key on a successful forecast.
        assert!(json.get("message").is_none());
    }
}
