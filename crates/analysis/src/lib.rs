//! Sismos Analysis
//!
//! Reshapes earthquake records into the data behind each view:
//! - **Direction:** Classify location references by compass code and summarize them
//! - **Magnitude:** Count records per magnitude
//! - **Scatter:** Pair magnitude with depth per record
//!
//! This crate is pure computation — no I/O, no presentation strings.
//! All inputs are data; all outputs are data.

pub mod direction;
pub mod magnitude;
pub mod scatter;

pub use direction::{aggregate, classify, classify_records, DirectionCode, DirectionSummary};
pub use magnitude::MagnitudeHistogram;
pub use scatter::{scatter_points, ScatterSeries};
