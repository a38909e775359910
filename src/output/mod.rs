//! Presentation of analysis reports.

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_analysis, format_report};
