//! Sedcure - sound event annotation curation tool.
//!
//! Cleans the onset/offset/label annotations written by soundscape
//! generators (merging overlapping same-class events, enforcing minimum
//! event durations, clipping to the audio bounds) and curates clip
//! collections by their declared polyphony.

#![warn(missing_docs)]

pub mod annotation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod polyphony;
pub mod reconcile;

use clap::Parser;
use tracing::info;

use cli::{Cli, CleanArgs, Command, PolyphonyArgs, TableArgs};
use config::{Config, config_file_path, load_default_config, save_default_config};
use pipeline::{CleanOptions, TableOptions, clean_directory, table_from_jams};
use polyphony::{FilterOptions, FsClipStore, filter_polyphony};
use reconcile::Thresholds;

pub use error::{Error, Result};

/// Main entry point for the sedcure CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = load_default_config()?;

    match cli.command {
        Command::Clean(args) => handle_clean(&args, &config, cli.quiet),
        Command::Table(args) => handle_table(&args, &config),
        Command::Polyphony(args) => handle_polyphony(&args, &config),
        Command::Config { action } => handle_config_command(action),
    }
}

/// Resolve thresholds from CLI overrides and configuration defaults.
fn resolve_thresholds(
    min_event_duration: Option<f64>,
    min_gap: Option<f64>,
    config: &Config,
) -> Thresholds {
    Thresholds::new(
        min_event_duration.unwrap_or(config.defaults.min_event_duration),
        min_gap.unwrap_or(config.defaults.min_gap_between_events),
    )
}

fn handle_clean(args: &CleanArgs, config: &Config, quiet: bool) -> Result<()> {
    let options = CleanOptions {
        folder: args.folder.clone(),
        wav_dir: args.wav_dir.clone(),
        output_dir: args.output_dir.clone(),
        output_tsv: args.output_tsv.clone(),
        thresholds: resolve_thresholds(args.min_event_duration, args.min_gap, config),
        include_background: args.background,
        progress: !quiet && !args.no_progress,
    };

    let report = clean_directory(&options)?;

    info!(
        "Fixed {} problem(s) in {} file(s), {} file(s) skipped",
        report.fix_count, report.files_processed, report.files_skipped
    );
    Ok(())
}

fn handle_table(args: &TableArgs, config: &Config) -> Result<()> {
    let options = TableOptions {
        inputs: args.inputs.clone(),
        output: args.output.clone(),
        post_process: !args.no_post_process,
        thresholds: resolve_thresholds(args.min_event_duration, args.min_gap, config),
        include_background: args.background,
    };

    let report = table_from_jams(&options)?;

    info!(
        "Tabulated {} clip(s) into {} ({} fix(es), {} skipped)",
        report.files_processed,
        args.output.display(),
        report.fix_count,
        report.files_skipped
    );
    Ok(())
}

fn handle_polyphony(args: &PolyphonyArgs, config: &Config) -> Result<()> {
    let options = FilterOptions {
        max_polyphony: args.max_polyphony.unwrap_or(config.defaults.max_polyphony),
        manifest: args.manifest.clone(),
        dry_run: args.dry_run,
    };

    let report = filter_polyphony(&args.folder, &options, &FsClipStore)?;

    info!(
        "Kept {} clip(s), {} {} clip(s), {} unreadable",
        report.kept,
        if args.dry_run { "would remove" } else { "removed" },
        report.removed,
        report.skipped
    );
    Ok(())
}

fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}
