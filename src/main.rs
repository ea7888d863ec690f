//! # filecat
//!
//! A CLI tool for concatenating the files of a directory tree with filtering.
//!
//! The tool walks a directory depth-first, in file name order, and prints every
//! file that passes the filters as a markdown-style block: a `## FILE:` header
//! followed by the content in a code fence tagged with the file's extension.
//!
//! ## Usage
//!
//! ```bash
//! # Everything under the current directory
//! filecat run
//!
//! # Rust and TOML files, skipping build output and VCS metadata
//! filecat run . -d target,.git -E rs,toml
//!
//! # Drop files without an extension
//! filecat run src --ignore-extensionless
//! ```

use std::{
    io::{self, BufWriter, Write},
    process::exit,
};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use filecat::{
    cli::{Cli, Command, ConfigSource, RunArgs},
    config::{FileConfig, file::expand_tilde},
    walker::Walker,
};
use humansize::{DECIMAL, format_size};
use log::{LevelFilter, info};

/// Entry point for the filecat application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Sets up logging on stderr
/// 3. Dispatches the selected subcommand
///
/// # Errors
///
/// This function can return errors from:
/// - Loading an explicitly requested configuration file
/// - Walking the directory tree or reading a selected file
/// - Writing to stdout
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    init_logging(args.log_level());

    match args.command {
        Command::Run(run_args) => run(&run_args),
    }
}

/// Install the stderr logger. `RUST_LOG` takes precedence over `level`.
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Resolve the configuration file for a run.
///
/// No file is read unless one was asked for. An explicit `--config` file must
/// load. A broken per-user file only produces a warning.
fn load_file_config(args: &RunArgs) -> Result<FileConfig> {
    match args.config_source() {
        ConfigSource::None => Ok(FileConfig::default()),
        ConfigSource::Explicit(path) => FileConfig::load_from(&expand_tilde(&path)),
        ConfigSource::User => Ok(FileConfig::load().unwrap_or_else(|e| {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        })),
    }
}

/// Run the `run` subcommand: walk the directory and print the selected files.
///
/// Stdout is flushed even when the walk fails, so every block written before
/// the failure is kept.
fn run(args: &RunArgs) -> Result<()> {
    let file_config = load_file_config(args)?;
    let walker = Walker::new(args.filter_config(&file_config));

    let stdout = io::stdout();
    let mut sink = BufWriter::new(stdout.lock());

    let result = walker.walk(&args.directory, &mut sink);
    let flushed = sink.flush();

    let summary = result?;
    flushed?;

    info!(
        "emitted {} files ({}), pruned {} directories, skipped {} files",
        summary.files_emitted,
        format_size(summary.bytes_emitted, DECIMAL),
        summary.dirs_pruned,
        summary.files_skipped
    );

    Ok(())
}
