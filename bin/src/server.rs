//! HTTP adapter over the prediction core.
//!
//! Handlers deserialize a typed request, call the core, and map errors to
//! status codes: validation failures are 400 with a message naming the
//! offending field, anything unexpected is a generic 500.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use seatwise_lib::prelude::{
    FilterCriteria, Forecast, Predictor, PredictionQuery, SeatwiseError,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Static landing page served at `/`.
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared read-only state: the predictor over the loaded table.
#[derive(Debug, Clone)]
pub(crate) struct AppState {
    predictor: Predictor,
}

/// Builds the API router.
pub(crate) fn router(predictor: Predictor) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .route("/college-info", get(college_info))
        .with_state(AppState { predictor })
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// JSON error response with a status code.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<SeatwiseError> for ApiError {
    fn from(err: SeatwiseError) -> Self {
        match err {
            SeatwiseError::Validation(err) => Self::bad_request(err.to_string()),
            // Nothing internal belongs on the wire.
            _ => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "internal error".to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Prediction request body.
#[derive(Debug, Deserialize)]
struct PredictRequest {
    user_rank: i64,
    quota: String,
    category: String,
    gender: String,
    round: String,
    top_n: Option<i64>,
}

async fn predict(
    State(state): State<AppState>,
    Json(body): Json<PredictRequest>,
) -> Result<Json<Forecast>, ApiError> {
    run_predict(&state, body).map(Json).map_err(ApiError::from)
}

/// Validates the request at the boundary and runs the prediction.
fn run_predict(state: &AppState, body: PredictRequest) -> seatwise_lib::Result<Forecast> {
    let criteria = FilterCriteria::new(body.quota, body.category, body.gender, body.round)?;
    let mut query = PredictionQuery::new(body.user_rank, criteria)?;
    if let Some(top_n) = body.top_n {
        query = query.with_top_n(usize::try_from(top_n).unwrap_or(0));
    }
    Ok(state.predictor.predict(&query))
}

/// Lookup query parameters.
#[derive(Debug, Deserialize)]
struct CollegeInfoParams {
    name: Option<String>,
    program: Option<String>,
}

/// A lookup result row; absent ranks serialize as null.
#[derive(Debug, Serialize)]
struct CollegeInfoRow {
    #[serde(rename = "Institute")]
    institute: String,
    #[serde(rename = "Program")]
    program: String,
    #[serde(rename = "Quota")]
    quota: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Opening Rank")]
    opening_rank: Option<f64>,
    #[serde(rename = "Closing Rank")]
    closing_rank: Option<f64>,
}

#[derive(Debug, Serialize)]
struct CollegeInfoResponse {
    count: usize,
    results: Vec<CollegeInfoRow>,
    message: String,
}

async fn college_info(
    State(state): State<AppState>,
    Query(params): Query<CollegeInfoParams>,
) -> Result<Json<CollegeInfoResponse>, ApiError> {
    let name = params.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        return Err(ApiError::bad_request("Query parameter 'name' is required."));
    }
    let program = params
        .program
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    let results: Vec<CollegeInfoRow> = state
        .predictor
        .table()
        .search(name, program)
        .into_iter()
        .map(|record| CollegeInfoRow {
            institute: record.institute.clone(),
            program: record.program.clone(),
            quota: record.quota.clone(),
            category: record.category.clone(),
            opening_rank: record.opening_rank,
            closing_rank: record.closing_rank,
        })
        .collect();

    let message = format!("Found {} historical rows for institutes matching '{name}'.", results.len());
    Ok(Json(CollegeInfoResponse {
        count: results.len(),
        results,
        message,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatwise_lib::prelude::{CutoffRecord, CutoffTable};
    use std::sync::Arc;

    fn create_test_state() -> AppState {
        let table = CutoffTable::from_records(vec![CutoffRecord::new(
            "IIT Kanpur",
            "Computer Science",
            "Engineering",
            "HS",
            "OPEN",
            "Gender-Neutral",
            "1",
            Some(100.0),
            Some(500.0),
        )]);
        AppState {
            predictor: Predictor::new(Arc::new(table)),
        }
    }

    #[test]
    fn test_run_predict_validates_at_boundary() {
        let state = create_test_state();

        let body = PredictRequest {
            user_rank: -1,
            quota: "HS".to_string(),
            category: "OPEN".to_string(),
            gender: "Gender-Neutral".to_string(),
            round: "1".to_string(),
            top_n: None,
        };
        let err = run_predict(&state, body).unwrap_err();
        let api_err = ApiError::from(err);
        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert!(api_err.message.contains("user_rank"));
    }

    #[test]
    fn test_run_predict_happy_path() {
        let state = create_test_state();

        let body = PredictRequest {
            user_rank: 300,
            quota: "HS".to_string(),
            category: "OPEN".to_string(),
            gender: "Gender-Neutral".to_string(),
            round: "1".to_string(),
            top_n: Some(5),
        };
        let forecast = run_predict(&state, body).unwrap();
        assert_eq!(forecast.predictions.len(), 1);
    }

    #[test]
    fn test_negative_top_n_clamps_to_empty() {
        let state = create_test_state();

        let body = PredictRequest {
            user_rank: 300,
            quota: "HS".to_string(),
            category: "OPEN".to_string(),
            gender: "Gender-Neutral".to_string(),
            round: "1".to_string(),
            top_n: Some(-3),
        };
        let forecast = run_predict(&state, body).unwrap();
        assert!(forecast.predictions.is_empty());
    }

    #[test]
    fn test_internal_errors_stay_generic() {
        let err = SeatwiseError::Dataset("table vanished".to_string());
        let api_err = ApiError::from(err);
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.message, "internal error");
    }
}
