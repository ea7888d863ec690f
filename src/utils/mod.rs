//! Utility functions and helpers.
//!
//! This module contains small helpers used throughout the application,
//! such as lexical path cleaning.

pub mod path;

pub use path::{clean_path, containing_dir};
