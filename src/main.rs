use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use cheek_sim_lib::render::{self, OutputFormat};
use cheek_sim_lib::services::{
    cancel_pair, check_input, load_text_file, simulate_latency, AppConfig, ConfigStore, HeuristicScorer, InputCheck,
};

const EXIT_BLOCKED: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "cheek-sim")]
#[command(about = "Simulated AI-vs-human authorship check for plain-text files (local heuristics, no model)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a .txt file and print the report
    Analyze {
        /// Path to the text file
        file: PathBuf,
        /// Config file path (defaults to the user config directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Simulated latency in milliseconds (overrides config; 0 disables)
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Analyze even when the text is shorter than the minimum length
        #[arg(long)]
        force: bool,
    },
    /// Show the file content and the length check without analyzing
    Preview {
        file: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default configuration file
    Init {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration as JSON
    Show {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    cheek_sim_lib::init_logging();

    let result = match cli.command {
        Commands::Analyze {
            file,
            config,
            format,
            out,
            delay_ms,
            force,
        } => cmd_analyze(&file, config.as_deref(), format, out.as_deref(), delay_ms, force).await,
        Commands::Preview { file, config } => cmd_preview(&file, config.as_deref()),
        Commands::Config { action } => match action {
            ConfigAction::Init { config, force } => cmd_config_init(config.as_deref(), force),
            ConfigAction::Show { config } => cmd_config_show(config.as_deref()),
        },
    };

    match result {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(EXIT_ERROR);
        }
    }
}

fn config_store(config_path: Option<&Path>) -> Option<ConfigStore> {
    match config_path {
        Some(p) => Some(ConfigStore::from_file(p.to_path_buf())),
        None => ConfigStore::default_config_dir().map(ConfigStore::new),
    }
}

fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    match config_store(config_path) {
        Some(store) => store
            .load()
            .with_context(|| format!("loading config from {}", store.config_file().display())),
        None => Ok(AppConfig::default()),
    }
}

async fn cmd_analyze(
    file: &Path,
    config_path: Option<&Path>,
    format: OutputFormat,
    out: Option<&Path>,
    delay_ms: Option<u64>,
    force: bool,
) -> Result<i32> {
    let config = load_config(config_path)?;
    let loaded = load_text_file(file).with_context(|| format!("loading {}", file.display()))?;

    let check = check_input(&loaded.text, config.min_chars);
    if !check.allows_analysis(force) {
        if let Some(msg) = check.message() {
            eprintln!("{msg}");
        }
        if matches!(check, InputCheck::TooShort { .. }) {
            eprintln!("(use --force to analyze anyway)");
        }
        warn!(file = %loaded.file_name, ?check, "analysis.blocked");
        return Ok(EXIT_BLOCKED);
    }
    if let Some(msg) = check.message() {
        eprintln!("{msg}");
    }

    let delay = Duration::from_millis(delay_ms.unwrap_or(config.simulated_delay_ms));
    let (handle, rx) = cancel_pair();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handle.cancel();
        }
    });
    if !delay.is_zero() {
        eprintln!("模型分析中... 正在評估句子結構、詞彙多樣性與功能詞密度...");
    }
    let waited = simulate_latency(delay, rx).await;
    ctrl_c.abort();
    waited?;

    let scorer = HeuristicScorer::new(config.scorer);
    let result = scorer.analyze(&loaded.text);
    info!(
        file = %loaded.file_name,
        segments = result.analysis_breakdown.len(),
        ai_probability = result.ai_probability,
        "analysis.finished"
    );

    let rendered = render::render(&result, format, Some(&loaded.file_name))?;
    match out {
        Some(path) => {
            std::fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(0)
}

fn cmd_preview(file: &Path, config_path: Option<&Path>) -> Result<i32> {
    let config = load_config(config_path)?;
    let loaded = load_text_file(file).with_context(|| format!("loading {}", file.display()))?;

    println!("檔案 '{}' ({} 字)", loaded.file_name, loaded.char_count());
    println!("{}", "-".repeat(40));
    println!("{}", loaded.text);

    let check = check_input(&loaded.text, config.min_chars);
    if let Some(msg) = check.message() {
        eprintln!("{msg}");
    }
    Ok(if matches!(check, InputCheck::Missing) { EXIT_BLOCKED } else { 0 })
}

fn cmd_config_init(config_path: Option<&Path>, force: bool) -> Result<i32> {
    let Some(store) = config_store(config_path) else {
        bail!("no config directory available; pass --config");
    };
    if store.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            store.config_file().display()
        );
    }
    store.save(&AppConfig::default())?;
    println!("Created {}", store.config_file().display());
    Ok(0)
}

fn cmd_config_show(config_path: Option<&Path>) -> Result<i32> {
    let config = load_config(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(0)
}
