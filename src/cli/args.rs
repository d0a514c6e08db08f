//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::validators;

/// Clean and curate sound event detection annotations.
#[derive(Debug, Parser)]
#[command(name = "sedcure")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Increase logging verbosity (-v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Clean the annotation files of a directory.
    Clean(CleanArgs),
    /// Build a consolidated table from structured annotation files.
    Table(TableArgs),
    /// Discard clips whose declared polyphony reaches the budget.
    Polyphony(PolyphonyArgs),
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for the clean command.
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Directory containing the annotation files to clean.
    pub folder: PathBuf,

    /// Directory containing the associated audio files (default: FOLDER).
    #[arg(long, env = "SEDCURE_WAV_DIR")]
    pub wav_dir: Option<PathBuf>,

    /// Directory receiving per-clip cleaned annotation files.
    #[arg(short, long, env = "SEDCURE_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path of the consolidated annotation table.
    #[arg(short = 't', long, env = "SEDCURE_OUTPUT_TSV")]
    pub output_tsv: Option<PathBuf>,

    /// Minimum event duration in seconds (default from config).
    #[arg(long, value_parser = validators::parse_event_duration)]
    pub min_event_duration: Option<f64>,

    /// Minimum silence between same-class events in seconds (default from config).
    #[arg(long, value_parser = validators::parse_event_gap)]
    pub min_gap: Option<f64>,

    /// Also extract background events as labels (structured sources only).
    #[arg(long)]
    pub background: bool,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for the table command.
#[derive(Debug, Args)]
pub struct TableArgs {
    /// Structured annotation files or directories containing them.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Path of the consolidated annotation table.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Tabulate annotations as-is, without reconciliation.
    #[arg(long)]
    pub no_post_process: bool,

    /// Also extract background events as labels.
    #[arg(long)]
    pub background: bool,

    /// Minimum event duration in seconds (default from config).
    #[arg(long, value_parser = validators::parse_event_duration)]
    pub min_event_duration: Option<f64>,

    /// Minimum silence between same-class events in seconds (default from config).
    #[arg(long, value_parser = validators::parse_event_gap)]
    pub min_gap: Option<f64>,
}

/// Arguments for the polyphony command.
#[derive(Debug, Args)]
pub struct PolyphonyArgs {
    /// Directory containing the clips to curate.
    pub folder: PathBuf,

    /// Polyphony budget: clips at or above this are discarded (default from config).
    #[arg(short = 'm', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_polyphony: Option<u32>,

    /// Write a manifest of the kept clips and their source material.
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// List what would be removed without deleting anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}
