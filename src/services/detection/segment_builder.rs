// Segment Builder
// Scores each sentence independently from local signals plus the two
// document-wide metrics.

use crate::models::{SentenceSegment, StyleMetrics};
use crate::services::config_store::ScorerConfig;
use crate::services::text_processor::{char_len, count_chars_in};

/// Summed score and the rules that contributed to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentScore {
    pub score: f64,
    pub explanations: Vec<String>,
}

pub fn score_segment(sentence: &str, metrics: &StyleMetrics, config: &ScorerConfig) -> SegmentScore {
    let weights = &config.weights;
    let mut score = 0.0;
    let mut explanations = Vec::new();

    // 1. Length stability: a mid-length sentence lacks burstiness
    let len = char_len(sentence);
    if (config.flat_length_min..=config.flat_length_max).contains(&len) {
        score += weights.flat_length;
        explanations.push(format!(
            "flat_length: {} chars within [{}, {}] ({:+.1})",
            len, config.flat_length_min, config.flat_length_max, weights.flat_length
        ));
    } else if len < config.short_length {
        score += weights.short_length;
        explanations.push(format!(
            "short_length: {} chars < {} ({:+.1})",
            len, config.short_length, weights.short_length
        ));
    }

    // 2. Lexical diversity
    if metrics.ttr < config.ttr_threshold {
        score += weights.low_ttr;
        explanations.push(format!(
            "low_ttr: {:.2} < {:.2} ({:+.1})",
            metrics.ttr, config.ttr_threshold, weights.low_ttr
        ));
    }

    // 3. Function word density
    if metrics.function_word_density > config.density_threshold {
        score += weights.high_density;
        explanations.push(format!(
            "high_function_word_density: {:.4} > {:.4} ({:+.1})",
            metrics.function_word_density, config.density_threshold, weights.high_density
        ));
    }

    // 4. Punctuation irregularity
    let marks = count_chars_in(sentence, &config.irregular_punctuation);
    if marks > config.irregular_min_count {
        score += weights.irregular_punctuation;
        explanations.push(format!(
            "irregular_punctuation: {} marks ({:+.1})",
            marks, weights.irregular_punctuation
        ));
    }

    SegmentScore { score, explanations }
}

/// Strict: a score exactly at the threshold leans human.
#[inline]
pub fn is_ai_leaning(score: f64, threshold: f64) -> bool {
    score > threshold
}

pub fn make_segment(sentence: String, metrics: &StyleMetrics, config: &ScorerConfig) -> SentenceSegment {
    let SegmentScore { score, explanations } = score_segment(&sentence, metrics, config);
    SentenceSegment {
        is_ai: is_ai_leaning(score, config.ai_score_threshold),
        text: sentence,
        score,
        explanations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_metrics() -> StyleMetrics {
        StyleMetrics { ttr: 1.0, function_word_density: 0.0 }
    }

    #[test]
    fn test_short_sentence_leans_human() {
        let config = ScorerConfig::default();
        let seg = make_segment("今天天氣很好。".to_string(), &neutral_metrics(), &config);
        assert_eq!(seg.score, -1.0);
        assert!(!seg.is_ai);
        assert_eq!(seg.explanations.len(), 1);
    }

    #[test]
    fn test_flat_length_band_is_inclusive() {
        let config = ScorerConfig::default();
        for len in [30usize, 45, 60] {
            let sentence = "字".repeat(len);
            let scored = score_segment(&sentence, &neutral_metrics(), &config);
            assert_eq!(scored.score, 1.0, "len {}", len);
        }
        let mid = score_segment(&"字".repeat(20), &neutral_metrics(), &config);
        assert_eq!(mid.score, 0.0);
        let long = score_segment(&"字".repeat(61), &neutral_metrics(), &config);
        assert_eq!(long.score, 0.0);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let config = ScorerConfig::default();
        // 14 CJK chars = 42 bytes; must still be "short".
        let scored = score_segment(&"字".repeat(14), &neutral_metrics(), &config);
        assert_eq!(scored.score, -1.0);
    }

    #[test]
    fn test_global_metric_rules() {
        let config = ScorerConfig::default();
        let metrics = StyleMetrics { ttr: 0.2, function_word_density: 0.01 };
        let scored = score_segment(&"字".repeat(20), &metrics, &config);
        assert_eq!(scored.score, 2.5);
        assert_eq!(scored.explanations.len(), 2);
    }

    #[test]
    fn test_irregular_punctuation_needs_more_than_one_mark() {
        let config = ScorerConfig::default();
        let one = score_segment(&format!("{}?", "字".repeat(20)), &neutral_metrics(), &config);
        assert_eq!(one.score, 0.0);
        let two = score_segment(&format!("{}(?)", "字".repeat(20)), &neutral_metrics(), &config);
        assert_eq!(two.score, -1.5);
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!is_ai_leaning(0.5, 0.5));
        assert!(is_ai_leaning(0.5000001, 0.5));
        assert!(is_ai_leaning(1.0, 0.5));
    }
}
