use colored::Colorize;

use crate::models::{AnalysisResult, Verdict};
use crate::services::detection::derive_verdict;

const BAR_WIDTH: usize = 40;

/// Format an analysis for terminal output.
pub fn format_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "AI 偵測模擬器 (本機運算)".bold()));
    out.push_str(&format!("{}\n\n", "=".repeat(BAR_WIDTH)));

    // Probability bar
    let ai_cells = ((result.ai_probability * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let human_cells = BAR_WIDTH - ai_cells;
    out.push_str(&format!(
        "{} {:.1}%  {}{}  {:.1}% {}\n",
        "人類撰寫".green().bold(),
        result.human_probability() * 100.0,
        "█".repeat(human_cells).green(),
        "█".repeat(ai_cells).red(),
        result.ai_probability * 100.0,
        "AI 生成".red().bold(),
    ));

    // Verdict
    let verdict = derive_verdict(result.ai_probability);
    let headline = match verdict {
        Verdict::HumanLeaning => verdict.headline().green().bold(),
        Verdict::AiLeaning => verdict.headline().red().bold(),
    };
    out.push_str(&format!("\n{}\n{}\n", headline, result.analysis_summary));

    // Sentences
    out.push_str(&format!(
        "\n{} ({} / {} AI)\n{}\n",
        "逐句分析".bold(),
        result.ai_segment_count(),
        result.analysis_breakdown.len(),
        "-".repeat(BAR_WIDTH)
    ));
    if result.analysis_breakdown.is_empty() {
        out.push_str("  (無可分析的句子)\n");
    }
    for (i, seg) in result.analysis_breakdown.iter().enumerate() {
        let tag = if seg.is_ai { "AI".red().bold() } else { "HU".green().bold() };
        out.push_str(&format!("  [{:03}] {} {:+.1}  {}\n", i, tag, seg.score, seg.text));
        for why in &seg.explanations {
            out.push_str(&format!("          - {}\n", why.dimmed()));
        }
    }

    out.push_str(&format!(
        "\n{}\n",
        "免責聲明：偵測結果僅用於 UI 測試，不具絕對證據效力。".dimmed()
    ));
    out
}
