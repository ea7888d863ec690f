//! Configuration types and options for the application.
//!
//! This module contains the filter rules consumed by the walker and the
//! optional configuration file that supplies their defaults.

pub mod file;
pub mod filter;

pub use file::FileConfig;
pub use filter::{FilterConfig, NO_EXTENSION};
