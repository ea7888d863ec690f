//! Filtering configuration for the directory walk.
//!
//! This module defines [`FilterConfig`], the immutable set of rules that decide
//! which directories are pruned and which files are emitted.

use std::{
    collections::BTreeSet,
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// The extension value that stands for "file has no extension".
pub const NO_EXTENSION: &str = "";

/// Rules applied to every entry visited during a walk.
///
/// A `FilterConfig` is assembled once through its `with_*` builder methods and
/// is never modified afterwards: the walker only holds it by shared reference.
///
/// # Examples
///
/// ```
/// # use filecat::config::FilterConfig;
/// let config = FilterConfig::new()
///     .with_exclude_dirs([".git", "target"])
///     .with_include_exts(["rs", "toml"])
///     .with_ignore_extensionless(true);
/// assert!(config.excludes_ext(b""));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterConfig {
    exclude_dirs: BTreeSet<String>,
    exclude_exts: BTreeSet<String>,
    include_dirs: BTreeSet<PathBuf>,
    include_exts: BTreeSet<String>,
}

impl FilterConfig {
    /// Create a configuration that emits every file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add directory *names* whose subtrees are pruned.
    #[must_use]
    pub fn with_exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add extensions (without the leading dot) that are never emitted.
    #[must_use]
    pub fn with_exclude_exts<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_exts.extend(exts.into_iter().map(Into::into));
        self
    }

    /// Add directory *paths*; once any is present, only files directly inside
    /// one of them are emitted.
    #[must_use]
    pub fn with_include_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.include_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Add extensions; once any is present, only files with one of them are
    /// emitted.
    #[must_use]
    pub fn with_include_exts<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_exts.extend(exts.into_iter().map(Into::into));
        self
    }

    /// When `ignore` is set, files without an extension are excluded.
    #[must_use]
    pub fn with_ignore_extensionless(mut self, ignore: bool) -> Self {
        if ignore {
            self.exclude_exts.insert(NO_EXTENSION.to_string());
        }
        self
    }

    /// When `include` is set, files without an extension are an accepted
    /// extension for the include list.
    ///
    /// This does not override [`with_ignore_extensionless`](Self::with_ignore_extensionless):
    /// the include and exclude lists are checked independently, so a file
    /// matched by both is still excluded.
    #[must_use]
    pub fn with_include_extensionless(mut self, include: bool) -> Self {
        if include {
            self.include_exts.insert(NO_EXTENSION.to_string());
        }
        self
    }

    /// Whether a directory with this base name is pruned.
    ///
    /// A name that is not valid UTF-8 never matches.
    #[must_use]
    pub fn excludes_dir_name(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|name| self.exclude_dirs.contains(name))
    }

    /// Whether a file living in `dir` passes the include-dirs rule.
    #[must_use]
    pub fn includes_dir(&self, dir: &Path) -> bool {
        self.include_dirs.is_empty() || self.include_dirs.contains(dir)
    }

    /// Whether an extension passes the include-exts rule.
    #[must_use]
    pub fn includes_ext(&self, ext: &[u8]) -> bool {
        self.include_exts.is_empty() || contains_bytes(&self.include_exts, ext)
    }

    /// Whether an extension is rejected by the exclude-exts rule.
    #[must_use]
    pub fn excludes_ext(&self, ext: &[u8]) -> bool {
        !self.exclude_exts.is_empty() && contains_bytes(&self.exclude_exts, ext)
    }

    #[cfg(test)]
    pub(crate) fn exclude_dirs(&self) -> impl Iterator<Item = &str> {
        self.exclude_dirs.iter().map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn exclude_exts(&self) -> impl Iterator<Item = &str> {
        self.exclude_exts.iter().map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn include_dirs(&self) -> impl Iterator<Item = &Path> {
        self.include_dirs.iter().map(PathBuf::as_path)
    }

    #[cfg(test)]
    pub(crate) fn include_exts(&self) -> impl Iterator<Item = &str> {
        self.include_exts.iter().map(String::as_str)
    }
}

/// Exact match of raw bytes against a set of strings. Bytes that are not
/// valid UTF-8 never match.
fn contains_bytes(set: &BTreeSet<String>, value: &[u8]) -> bool {
    std::str::from_utf8(value).is_ok_and(|value| set.contains(value))
}
