//! Line-by-line difference reports.
//!
//! Compares two texts position by position and renders the differing lines
//! as a plain-text report.
//!
//! # Key Types
//!
//! - [`DiffReport`] / [`LineDifference`] -- comparison result and its rendering
//! - [`Lines`] -- line iterator returned by [`split_lines`]

pub mod lines;
pub mod report;

pub use lines::{is_line_break, split_lines, Lines};
pub use report::{build_diff_report, compare, DiffReport, LineDifference, HEADER_PREFIX};
