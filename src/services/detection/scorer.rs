// Heuristic Scorer
// Pure text -> AnalysisResult; no I/O and no shared state.

use super::aggregation::{aggregate_segments, is_ai_generated};
use super::segment_builder::make_segment;
use crate::models::{AnalysisResult, StyleMetrics};
use crate::services::config_store::ScorerConfig;
use crate::services::text_processor::{calculate_ttr, split_sentences, FunctionWordMatcher};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HeuristicScorer {
    config: ScorerConfig,
    function_words: FunctionWordMatcher,
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new(ScorerConfig::default())
    }
}

impl HeuristicScorer {
    pub fn new(config: ScorerConfig) -> Self {
        let function_words = FunctionWordMatcher::new(&config.function_words);
        Self { config, function_words }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn metrics(&self, text: &str) -> StyleMetrics {
        StyleMetrics {
            ttr: calculate_ttr(text),
            function_word_density: self.function_words.density(text),
        }
    }

    /// Never fails; empty input yields no segments and probability 0.5.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let metrics = self.metrics(text);

        let breakdown: Vec<_> = split_sentences(text, &self.config.sentence_terminators)
            .into_iter()
            .map(|sentence| make_segment(sentence, &metrics, &self.config))
            .collect();

        for (i, seg) in breakdown.iter().enumerate() {
            debug!(index = i, score = seg.score, is_ai = seg.is_ai, "segment.scored");
        }

        let ai_probability = aggregate_segments(&breakdown);
        debug!(
            segments = breakdown.len(),
            ttr = metrics.ttr,
            density = metrics.function_word_density,
            ai_probability,
            "analysis.complete"
        );

        AnalysisResult {
            is_ai_generated: is_ai_generated(ai_probability),
            ai_probability,
            analysis_summary: format_summary(&metrics),
            analysis_breakdown: breakdown,
            metrics,
        }
    }
}

/// Analyze with the default configuration.
pub fn analyze(text: &str) -> AnalysisResult {
    HeuristicScorer::default().analyze(text)
}

pub fn format_summary(metrics: &StyleMetrics) -> String {
    format!(
        "（本地模擬結果）本應用程式使用詞彙多樣性 ({:.2})、長度穩定性與功能詞密度 ({:.4}) 進行判斷。AI 傾向評分門檻已調低，使結果更具波動性。",
        metrics.ttr, metrics.function_word_density
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::config_store::ScoreWeights;

    #[test]
    fn test_empty_text() {
        let result = analyze("");
        assert_eq!(result.ai_probability, 0.5);
        assert!(!result.is_ai_generated);
        assert!(result.analysis_breakdown.is_empty());
        assert_eq!(result.metrics, StyleMetrics::default());
    }

    #[test]
    fn test_whitespace_only_is_uncertain() {
        let result = analyze("  \n\t ");
        assert_eq!(result.ai_probability, 0.5);
        assert!(result.analysis_breakdown.is_empty());
    }

    #[test]
    fn test_short_sentence_scenario() {
        let result = analyze("今天天氣很好。");
        assert_eq!(result.analysis_breakdown.len(), 1);
        let seg = &result.analysis_breakdown[0];
        assert_eq!(seg.text, "今天天氣很好。");
        assert_eq!(seg.score, -1.0);
        assert!(!seg.is_ai);
        assert_eq!(result.ai_probability, 0.0);
    }

    #[test]
    fn test_forty_five_char_sentence_is_ai() {
        let sentence = format!("{}。", "字".repeat(44));
        let result = analyze(&sentence);
        assert_eq!(result.metrics.ttr, 1.0);
        assert_eq!(result.analysis_breakdown[0].score, 1.0);
        assert!(result.analysis_breakdown[0].is_ai);
        assert_eq!(result.ai_probability, 1.0);
        assert!(result.is_ai_generated);
    }

    #[test]
    fn test_score_at_threshold_is_human() {
        let config = ScorerConfig {
            weights: ScoreWeights { flat_length: 0.5, ..ScoreWeights::default() },
            ..ScorerConfig::default()
        };
        let scorer = HeuristicScorer::new(config);
        let result = scorer.analyze(&format!("{}。", "字".repeat(44)));
        assert_eq!(result.analysis_breakdown[0].score, 0.5);
        assert!(!result.analysis_breakdown[0].is_ai);
        assert_eq!(result.ai_probability, 0.0);
    }

    #[test]
    fn test_function_words_raise_every_segment() {
        // Two connectors over a short text push density far past 0.005.
        let text = "天氣很好。然而，下雨了。因此，我們留在家。";
        let result = analyze(text);
        assert!(result.metrics.function_word_density > 0.005);
        assert!(result.analysis_breakdown.iter().all(|s| s.score >= 0.5));
        // Short sentences: -1.0 + 1.5 = 0.5, exactly at threshold.
        assert!(result.analysis_breakdown.iter().all(|s| !s.is_ai));
    }

    #[test]
    fn test_injected_function_words() {
        let config = ScorerConfig {
            function_words: vec!["however".to_string()],
            ..ScorerConfig::default()
        };
        let scorer = HeuristicScorer::new(config);
        assert_eq!(scorer.config().function_words, vec!["however".to_string()]);
        assert_eq!(scorer.config().ttr_threshold, 0.35);
        let metrics = scorer.metrics("however it rains, however");
        assert!((metrics.function_word_density - 2.0 / 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_summary_embeds_metrics() {
        let result = analyze("word word。");
        assert!(result.analysis_summary.contains("(0.50)"));
        assert!(result.analysis_summary.contains("(0.0000)"));
    }

    #[test]
    fn test_deterministic() {
        let text = "這是一個測試句子，用來確認結果穩定。第二句話比較短！第三句呢(真的?)";
        let a = analyze(text);
        let b = analyze(text);
        assert_eq!(a, b);
        assert_eq!(a.ai_probability.to_bits(), b.ai_probability.to_bits());
    }
}
