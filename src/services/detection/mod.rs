// Detection Module
// Heuristic authorship scoring organized into:
// - segment_builder: per-sentence rule scoring
// - aggregation: document probability and verdict
// - scorer: the pure analyze() entry point

pub mod segment_builder;
pub mod aggregation;
pub mod scorer;

pub use segment_builder::{is_ai_leaning, make_segment, score_segment, SegmentScore};
pub use aggregation::{aggregate_segments, derive_verdict, is_ai_generated, is_human_leaning};
pub use scorer::{analyze, format_summary, HeuristicScorer};
