//! Cutoff dataset loading and in-memory lookup for seatwise.
//!
//! This crate owns everything between the dataset file on disk and the
//! read-only queries the estimator runs against it:
//!
//! - [`load_csv`] / [`read_records`] - Dataset loading with header cleanup
//!   and coerce-to-absent rank parsing
//! - [`CutoffTable`] - Immutable table with a per-criteria index and
//!   substring search
//! - [`DatasetError`] - Loading failures
//!
//! # Example
//!
//! ```no_run
//! use seatwise_dataset::CutoffTable;
//!
//! let table = CutoffTable::load(std::path::Path::new("cutoffs.csv"))?;
//! println!("{} rows", table.len());
//! # Ok::<(), seatwise_dataset::DatasetError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/seatwise/seatwise/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod loader;
mod table;

pub use loader::{DatasetError, load_csv, read_records};
pub use table::CutoffTable;
