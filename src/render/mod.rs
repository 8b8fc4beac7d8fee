// Presentation of an AnalysisResult. Read-only: no scoring happens here.

pub mod html;
pub mod json;
pub mod text;

use crate::error::AppResult;
use crate::models::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

pub fn render(result: &AnalysisResult, format: OutputFormat, file_name: Option<&str>) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(text::format_report(result)),
        OutputFormat::Json => json::to_json(result, false),
        OutputFormat::Html => Ok(html::render_page(result, file_name)),
    }
}
