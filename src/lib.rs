//! # filecat
//!
//! A CLI tool that recursively walks a directory tree and prints the contents
//! of the files it contains as labeled, fenced text blocks.
//!
//! This library provides the core functionality for the filecat CLI tool:
//! the filter rules, the decision procedure applied to every visited entry and
//! the deterministic, single-threaded walk that streams matching files to a
//! sink.
//!
//! ```no_run
//! # use std::path::Path;
//! # use filecat::{config::FilterConfig, walker::Walker};
//! let config = FilterConfig::new()
//!     .with_exclude_dirs([".git", "target"])
//!     .with_include_exts(["rs"]);
//! let mut out = Vec::new();
//! let summary = Walker::new(config).walk(Path::new("."), &mut out)?;
//! # Ok::<(), filecat::error::WalkError>(())
//! ```

pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod filtering;
pub mod output;
pub mod utils;
pub mod walker;
