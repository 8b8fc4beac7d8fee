use crate::error::AppResult;
use crate::models::AnalysisResult;

/// Format an analysis as JSON.
pub fn to_json(result: &AnalysisResult, compact: bool) -> AppResult<String> {
    let json = if compact {
        serde_json::to_string(result)?
    } else {
        serde_json::to_string_pretty(result)?
    };
    Ok(json)
}

pub fn from_json(json: &str) -> AppResult<AnalysisResult> {
    Ok(serde_json::from_str(json)?)
}
