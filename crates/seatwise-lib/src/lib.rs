//! Admission probability estimation over counselling cutoff data.
//!
//! This is a facade crate that re-exports functionality from the seatwise
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use seatwise_lib::{CutoffTable, FilterCriteria, PredictionQuery, Predictor};
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = CutoffTable::load(std::path::Path::new("cutoffs.csv"))?;
//!     let predictor = Predictor::new(Arc::new(table));
//!
//!     let criteria = FilterCriteria::new("HS", "OPEN", "Gender-Neutral", "1")?;
//!     let query = PredictionQuery::new(1500, criteria)?;
//!
//!     for entry in &predictor.predict(&query).predictions {
//!         println!("{}: {:.2}%", entry.program, entry.probability);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/seatwise/seatwise/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use seatwise_types::*;

// Re-export dataset loading and the cutoff table
pub use seatwise_dataset::{CutoffTable, DatasetError, load_csv, read_records};

// Re-export estimation
pub use seatwise_estimate::{Forecast, Predictor, ProgramForecast, admission_probability};

/// Prelude module for convenient imports.
///
/// ```
/// use seatwise_lib::prelude::*;
/// ```
pub mod prelude {
    pub use seatwise_dataset::{CutoffTable, DatasetError};
    pub use seatwise_estimate::{Forecast, Predictor, ProgramForecast, admission_probability};
    pub use seatwise_types::{
        CutoffRecord, DEFAULT_TOP_N, FilterCriteria, PredictionQuery, Result, SeatwiseError,
        ValidationError,
    };
}
