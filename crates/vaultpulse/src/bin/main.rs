//! VaultPulse CLI

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use vaultpulse::report;
use vaultpulse_core::VaultConfig;
use vaultpulse_vault::VaultManager;

/// VaultPulse - vault health auditor
///
/// Scans a Markdown vault and reports broken wikilinks, orphaned notes,
/// missing frontmatter, stub notes, and duplicate titles. Findings never
/// change the exit code; only a failed audit does.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the vault directory
    #[arg(env = "VAULTPULSE_VAULT")]
    vault: PathBuf,

    /// Word-count threshold below which a note is reported as a stub
    #[arg(long, default_value_t = VaultConfig::DEFAULT_STUB_THRESHOLD)]
    stub_threshold: usize,

    /// Note file extension to audit (without the dot)
    #[arg(long, default_value = VaultConfig::DEFAULT_NOTE_EXTENSION)]
    extension: String,

    /// Settings directory name to skip while scanning
    #[arg(long, default_value = VaultConfig::DEFAULT_SETTINGS_DIR)]
    settings_dir: String,

    /// Report output format
    #[arg(long, value_enum, default_value_t = Format::Human)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Sectioned terminal report
    Human,
    /// Pretty-printed JSON
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    log::info!("VaultPulse v{}", env!("CARGO_PKG_VERSION"));

    let config = VaultConfig::builder(&args.vault)
        .stub_threshold(args.stub_threshold)
        .note_extension(args.extension)
        .settings_dir(args.settings_dir)
        .build()?;

    let manager = VaultManager::new(config)?;
    let report = manager.analyze().await?;

    match args.format {
        Format::Human => print!(
            "{}",
            report::render_human(&report, &args.vault, args.stub_threshold)
        ),
        Format::Json => println!("{}", report::render_json(&report)?),
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the rendered report. The
/// default level is overridable with RUST_LOG.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
