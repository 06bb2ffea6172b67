//! Core types for the seatwise admission estimator.
//!
//! This crate provides the fundamental data structures used throughout
//! seatwise:
//!
//! - [`CutoffRecord`] - A single historical opening/closing rank row
//! - [`FilterCriteria`] - Exact-match filter dimensions for a query
//! - [`PredictionQuery`] - A validated prediction request
//! - [`SeatwiseError`] - Workspace error type

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/seatwise/seatwise/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod criteria;
mod error;
mod record;

pub use criteria::{DEFAULT_TOP_N, FilterCriteria, PredictionQuery};
pub use error::{Result, SeatwiseError, ValidationError};
pub use record::CutoffRecord;
