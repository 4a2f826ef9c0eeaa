//! JSON output formatting

use anyhow::Result;
use ripple_core::AnalysisResult;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub version: &'a str,
    #[serde(flatten)]
    pub result: &'a AnalysisResult,
}

pub fn render(result: &AnalysisResult) -> Result<String> {
    let out = JsonOutput {
        version: ripple_core::VERSION,
        result,
    };
    Ok(serde_json::to_string_pretty(&out)?)
}
