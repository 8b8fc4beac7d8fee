// Configuration Storage Service
// Handles config file read/write and version backup

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_MIN_CHARS: usize = 50;
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: String,
    /// Soft quality threshold for input length, in characters.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    /// Artificial wait before analysis; 0 disables it.
    #[serde(default = "default_delay_ms")]
    pub simulated_delay_ms: u64,
    #[serde(default)]
    pub scorer: ScorerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            min_chars: DEFAULT_MIN_CHARS,
            simulated_delay_ms: DEFAULT_SIMULATED_DELAY_MS,
            scorer: ScorerConfig::default(),
        }
    }
}

/// Thresholds, weights and word lists consumed by the heuristic scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerConfig {
    #[serde(default = "default_function_words")]
    pub function_words: Vec<String>,
    #[serde(default = "default_terminators")]
    pub sentence_terminators: Vec<char>,
    #[serde(default = "default_irregular_punctuation")]
    pub irregular_punctuation: Vec<char>,

    /// Inclusive character-length band treated as uniform (low burstiness).
    #[serde(default = "default_flat_min")]
    pub flat_length_min: usize,
    #[serde(default = "default_flat_max")]
    pub flat_length_max: usize,
    /// Segments strictly shorter than this lean human.
    #[serde(default = "default_short_len")]
    pub short_length: usize,
    #[serde(default = "default_ttr_threshold")]
    pub ttr_threshold: f64,
    #[serde(default = "default_density_threshold")]
    pub density_threshold: f64,
    /// Irregular punctuation must occur more than this many times.
    #[serde(default = "default_irregular_min")]
    pub irregular_min_count: usize,
    #[serde(default = "default_ai_threshold")]
    pub ai_score_threshold: f64,

    #[serde(default)]
    pub weights: ScoreWeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWeights {
    pub flat_length: f64,
    pub short_length: f64,
    pub low_ttr: f64,
    pub high_density: f64,
    pub irregular_punctuation: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            flat_length: 1.0,
            short_length: -1.0,
            low_ttr: 1.0,
            high_density: 1.5,
            irregular_punctuation: -1.5,
        }
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            function_words: default_function_words(),
            sentence_terminators: default_terminators(),
            irregular_punctuation: default_irregular_punctuation(),
            flat_length_min: default_flat_min(),
            flat_length_max: default_flat_max(),
            short_length: default_short_len(),
            ttr_threshold: default_ttr_threshold(),
            density_threshold: default_density_threshold(),
            irregular_min_count: default_irregular_min(),
            ai_score_threshold: default_ai_threshold(),
            weights: ScoreWeights::default(),
        }
    }
}

fn default_version() -> String { env!("CARGO_PKG_VERSION").to_string() }
fn default_min_chars() -> usize { DEFAULT_MIN_CHARS }
fn default_delay_ms() -> u64 { DEFAULT_SIMULATED_DELAY_MS }
fn default_function_words() -> Vec<String> {
    ["然而", "因此", "此外", "總而言之", "值得注意的是", "除此之外", "同時", "總結來說", "並且"]
        .iter()
        .map(|w| w.to_string())
        .collect()
}
fn default_terminators() -> Vec<char> { vec!['。', '！', '？'] }
fn default_irregular_punctuation() -> Vec<char> { vec!['!', '?', '(', ')', '（', '）'] }
fn default_flat_min() -> usize { 30 }
fn default_flat_max() -> usize { 60 }
fn default_short_len() -> usize { 15 }
fn default_ttr_threshold() -> f64 { 0.35 }
fn default_density_threshold() -> f64 { 0.005 }
fn default_irregular_min() -> usize { 1 }
fn default_ai_threshold() -> f64 { 0.5 }

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join("config.json");
        Self { config_dir, config_file }
    }

    /// Store reading an explicit file instead of the default location.
    pub fn from_file(config_file: PathBuf) -> Self {
        let config_dir = config_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self { config_dir, config_file }
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cheekSim"))
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn exists(&self) -> bool {
        self.config_file.exists()
    }

    /// Ensure config directory exists
    pub fn ensure_dir(&self) -> AppResult<()> {
        fs::create_dir_all(&self.config_dir)
            .map_err(|e| AppError::Config(format!("Failed to create config dir: {}", e)))
    }

    /// Load configuration from file; a missing file yields defaults
    pub fn load(&self) -> AppResult<AppConfig> {
        if !self.config_file.exists() {
            debug!(path = %self.config_file.display(), "config.missing_using_defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_file)
            .map_err(|e| AppError::Config(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to file
    pub fn save(&self, config: &AppConfig) -> AppResult<()> {
        self.ensure_dir()?;

        // Create backup if file exists
        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)?;

        fs::write(&self.config_file, content)
            .map_err(|e| AppError::Config(format!("Failed to write config: {}", e)))?;
        info!(path = %self.config_file.display(), "config.saved");
        Ok(())
    }

    /// Create a backup of current config
    fn create_backup(&self) -> AppResult<()> {
        let backup_dir = self.config_dir.join("backups");
        fs::create_dir_all(&backup_dir)
            .map_err(|e| AppError::Config(format!("Failed to create backup dir: {}", e)))?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%.3f");
        let backup_file = backup_dir.join(format!("config_{}.json", timestamp));

        fs::copy(&self.config_file, &backup_file)
            .map_err(|e| AppError::Config(format!("Failed to create backup: {}", e)))?;

        // Keep only last 10 backups
        self.cleanup_old_backups(&backup_dir, 10)?;

        Ok(())
    }

    /// Remove old backups, keeping only the most recent N
    fn cleanup_old_backups(&self, backup_dir: &Path, keep: usize) -> AppResult<()> {
        let mut entries: Vec<_> = fs::read_dir(backup_dir)
            .map_err(|e| AppError::Config(format!("Failed to read backup dir: {}", e)))?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
            .collect();

        if entries.len() <= keep {
            return Ok(());
        }

        // Sort by modification time (oldest first)
        entries.sort_by_key(|e| {
            e.metadata()
                .and_then(|m| m.modified())
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
        });

        let remove_count = entries.len() - keep;
        for entry in entries.iter().take(remove_count) {
            let _ = fs::remove_file(entry.path());
        }

        Ok(())
    }
}
