// Aggregation Logic
// Turns per-sentence labels into the document probability and verdict

use crate::models::{SentenceSegment, Verdict};

/// Probability reported when there is nothing to score.
pub const UNCERTAIN_PROBABILITY: f64 = 0.5;

/// Fraction of AI-leaning segments; 0.5 when there are none.
pub fn aggregate_segments(segments: &[SentenceSegment]) -> f64 {
    if segments.is_empty() {
        return UNCERTAIN_PROBABILITY;
    }
    let ai = segments.iter().filter(|s| s.is_ai).count();
    ai as f64 / segments.len() as f64
}

pub fn is_ai_generated(ai_probability: f64) -> bool {
    ai_probability > 0.5
}

/// Strictly more human than AI. At exactly 0.5 this is false.
pub fn is_human_leaning(ai_probability: f64) -> bool {
    1.0 - ai_probability > 0.5
}

pub fn derive_verdict(ai_probability: f64) -> Verdict {
    if is_human_leaning(ai_probability) {
        Verdict::HumanLeaning
    } else {
        Verdict::AiLeaning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(is_ai: bool) -> SentenceSegment {
        SentenceSegment { text: "x。".to_string(), is_ai, score: 0.0, explanations: vec![] }
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate_segments(&[]), 0.5);
    }

    #[test]
    fn test_aggregate_fraction() {
        let segments = vec![seg(true), seg(false), seg(false), seg(true)];
        assert_eq!(aggregate_segments(&segments), 0.5);
        assert_eq!(aggregate_segments(&[seg(true)]), 1.0);
        assert_eq!(aggregate_segments(&[seg(false), seg(false)]), 0.0);
    }

    #[test]
    fn test_half_is_neither_flagged_nor_human() {
        assert!(!is_ai_generated(0.5));
        assert!(!is_human_leaning(0.5));
        assert_eq!(derive_verdict(0.5), Verdict::AiLeaning);
    }

    #[test]
    fn test_verdict_sides() {
        assert_eq!(derive_verdict(0.25), Verdict::HumanLeaning);
        assert_eq!(derive_verdict(0.75), Verdict::AiLeaning);
        assert!(is_ai_generated(0.75));
    }
}
