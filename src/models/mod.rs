// cheek-sim Data Models
// Fixed-shape records produced by the heuristic scorer

use serde::{Deserialize, Serialize};

// ============ Segment ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceSegment {
    /// Trimmed sentence text, terminator included.
    pub text: String,
    pub is_ai: bool,
    /// Summed heuristic score; `is_ai` is `score > threshold`.
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub explanations: Vec<String>,
}

// ============ Global metrics ============

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StyleMetrics {
    /// Type-Token Ratio over the whole document.
    pub ttr: f64,
    /// Connector-word matches per character.
    pub function_word_density: f64,
}

// ============ Analysis Result ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_ai_generated: bool,
    pub ai_probability: f64,
    pub analysis_summary: String,
    pub analysis_breakdown: Vec<SentenceSegment>,
    #[serde(default)]
    pub metrics: StyleMetrics,
}

impl AnalysisResult {
    pub fn human_probability(&self) -> f64 {
        1.0 - self.ai_probability
    }

    pub fn ai_segment_count(&self) -> usize {
        self.analysis_breakdown.iter().filter(|s| s.is_ai).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    HumanLeaning,
    AiLeaning,
}

impl Verdict {
    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::HumanLeaning => "人類撰寫機率較高",
            Verdict::AiLeaning => "AI 生成機率較高",
        }
    }
}
