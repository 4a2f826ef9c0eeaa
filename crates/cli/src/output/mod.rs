//! Output formatters for analysis results

pub mod json;
pub mod markdown;
pub mod terminal;
