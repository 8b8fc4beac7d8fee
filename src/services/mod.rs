// cheek-sim Core Services

pub mod text_processor;
pub mod config_store;
pub mod detection;
pub mod file_loader;
pub mod input_gate;
pub mod latency;

pub use config_store::*;
pub use file_loader::{decode_upload, load_text_file, LoadedText};
pub use input_gate::{check_input, InputCheck};
pub use latency::{cancel_pair, simulate_latency, CancelHandle};

pub use detection::{
    aggregate_segments,
    analyze,
    derive_verdict,
    format_summary,
    is_ai_generated,
    is_human_leaning,
    HeuristicScorer,
};
