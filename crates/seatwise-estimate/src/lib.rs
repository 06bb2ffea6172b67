//! Admission probability estimation for seatwise.
//!
//! This crate provides the estimation core:
//!
//! - [`admission_probability`] - Piecewise-linear probability over a
//!   historical admission band
//! - [`Predictor`] - Filters, scores, ranks, and truncates cutoff records
//!   for a query
//! - [`Forecast`] / [`ProgramForecast`] - Prediction results

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/seatwise/seatwise/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod predictor;
mod probability;

pub use predictor::{Forecast, Predictor, ProgramForecast};
pub use probability::admission_probability;
