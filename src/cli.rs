//! Command-line interface definition.
//!
//! This module declares the `filecat` argument parser and turns parsed
//! arguments, layered over an opt-in configuration file, into a
//! [`FilterConfig`].

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;

use crate::config::{FileConfig, FilterConfig};

#[derive(Args, Debug)]
struct FilterArgs {
    /// Directory names to exclude (comma-separated)
    #[arg(short = 'd', long, value_delimiter = ',', action = ArgAction::Append)]
    exclude_dirs: Vec<String>,

    /// File extensions to exclude, without the dot (comma-separated, "" for none)
    #[arg(short = 'e', long, value_delimiter = ',', action = ArgAction::Append)]
    exclude_exts: Vec<String>,

    /// Directory paths to include (comma-separated)
    #[arg(short = 'D', long, value_delimiter = ',', action = ArgAction::Append)]
    include_dirs: Vec<PathBuf>,

    /// File extensions to include, without the dot (comma-separated, "" for none)
    #[arg(short = 'E', long, value_delimiter = ',', action = ArgAction::Append)]
    include_exts: Vec<String>,

    /// Ignore files without extensions
    #[arg(short = 'i', long)]
    ignore_extensionless: bool,

    /// Include files without extensions
    #[arg(short = 'I', long)]
    include_extensionless: bool,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Read filter defaults from this TOML file
    #[arg(long, value_name = "PATH", conflicts_with = "user_config")]
    config: Option<PathBuf>,

    /// Read filter defaults from the per-user config file, if present
    #[arg(long)]
    user_config: bool,
}

/// Where the filter defaults of a run come from.
///
/// Without a config flag no file is read, so the output only depends on the
/// arguments and the walked tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    /// No configuration file
    None,

    /// `<config_dir>/filecat/config.toml`, skipped when absent
    User,

    /// A file named with `--config`, which must load
    Explicit(PathBuf),
}

/// Arguments of the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// The directory to walk
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Filtering options
    #[command(flatten)]
    filters: FilterArgs,

    /// Configuration file options
    #[command(flatten)]
    config: ConfigArgs,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Concatenate files in a directory with filtering
    ///
    /// Recursively walks through the specified directory (or the current
    /// directory if none is provided) and prints the content of every file
    /// that passes the filtering options.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
#[command(name = "filecat", version)]
#[command(about = "A tool for concatenating files with filtering")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Log level selected by `-v`/`-q`. `RUST_LOG` may still override it.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl RunArgs {
    /// The configuration file selected by `--config` or `--user-config`.
    #[must_use]
    pub fn config_source(&self) -> ConfigSource {
        match (&self.config.config, self.config.user_config) {
            (Some(path), _) => ConfigSource::Explicit(path.clone()),
            (None, true) => ConfigSource::User,
            (None, false) => ConfigSource::None,
        }
    }

    /// Build the walk rules: CLI flags first, then the config file, then the
    /// defaults (no filtering).
    ///
    /// A list given on the command line replaces the list from the file. A
    /// boolean flag is on if either source enables it.
    #[must_use]
    pub fn filter_config(&self, file_config: &FileConfig) -> FilterConfig {
        let file = &file_config.filters;
        let cli = &self.filters;

        FilterConfig::new()
            .with_exclude_dirs(layered(&cli.exclude_dirs, file.exclude_dirs.as_deref()))
            .with_exclude_exts(layered(&cli.exclude_exts, file.exclude_exts.as_deref()))
            .with_include_dirs(layered(&cli.include_dirs, file.include_dirs.as_deref()))
            .with_include_exts(layered(&cli.include_exts, file.include_exts.as_deref()))
            .with_ignore_extensionless(
                cli.ignore_extensionless || file.ignore_extensionless.unwrap_or(false),
            )
            .with_include_extensionless(
                cli.include_extensionless || file.include_extensionless.unwrap_or(false),
            )
    }
}

/// Pick the CLI values when any were given, the file values otherwise.
fn layered<T: Clone>(cli: &[T], file: Option<&[T]>) -> Vec<T> {
    if cli.is_empty() {
        file.unwrap_or_default().to_vec()
    } else {
        cli.to_vec()
    }
}
