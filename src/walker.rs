//! Directory walking and file emission.
//!
//! This module provides the walk itself: a single-threaded, depth-first
//! traversal that visits siblings in file name order, applies the filter
//! rules to every entry and streams the selected files to a sink. Output
//! order therefore always equals visitation order.

use std::{fs, io::Write, path::Path};

use log::{debug, trace};
use walkdir::WalkDir;

use crate::{
    config::FilterConfig,
    entry::WalkEntry,
    error::{Result, WalkError},
    filtering::{Verdict, classify},
    output::write_block,
};

/// Counters gathered during a successful walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Number of files written to the sink
    pub files_emitted: usize,

    /// Total size of the emitted file contents, in bytes
    pub bytes_emitted: u64,

    /// Number of directories whose subtree was skipped
    pub dirs_pruned: usize,

    /// Number of files rejected by the filters
    pub files_skipped: usize,
}

/// Filter-and-walk engine.
///
/// The `Walker` owns an immutable [`FilterConfig`] and can walk any number of
/// roots with it. Each walk stops at the first error, leaving whatever was
/// already written in the sink.
pub struct Walker {
    /// Rules applied to every visited entry
    config: FilterConfig,
}

impl Walker {
    /// Create a new walker with the given rules.
    ///
    /// # Examples
    ///
    /// ```
    /// # use filecat::{config::FilterConfig, walker::Walker};
    /// let walker = Walker::new(FilterConfig::new().with_exclude_dirs([".git"]));
    /// ```
    #[must_use]
    pub const fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and write every selected file to `sink`.
    ///
    /// The root itself is visited first: a root directory whose name is
    /// excluded yields nothing, and a root file is filtered like any other
    /// file. Symbolic links are not followed while walking; a link is treated
    /// as a file and its target is read when it is emitted.
    ///
    /// # Arguments
    ///
    /// * `root` - File or directory to start from
    /// * `sink` - Destination for the file blocks
    ///
    /// # Returns
    ///
    /// A [`WalkSummary`] describing what was visited.
    ///
    /// # Errors
    ///
    /// - [`WalkError::NotFound`] if `root` does not exist
    /// - [`WalkError::Traversal`] if a directory cannot be listed
    /// - [`WalkError::Read`] if a selected file cannot be read
    /// - [`WalkError::Write`] if the sink rejects a block
    pub fn walk<W: Write + ?Sized>(&self, root: &Path, sink: &mut W) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        let mut entries = WalkDir::new(root).sort_by_file_name().into_iter();

        while let Some(next) = entries.next() {
            let dir_entry = next.map_err(WalkError::from_walk)?;
            let entry = WalkEntry::from(&dir_entry);

            match classify(&entry, &self.config) {
                Verdict::Prune => {
                    debug!("pruning {}", entry.path.display());
                    summary.dirs_pruned += 1;
                    entries.skip_current_dir();
                }
                Verdict::Descend => {
                    trace!("descending into {}", entry.path.display());
                }
                Verdict::Skip => {
                    trace!("skipping {}", entry.path.display());
                    summary.files_skipped += 1;
                }
                Verdict::Emit { extension } => {
                    let content = fs::read(dir_entry.path()).map_err(|source| WalkError::Read {
                        path: entry.path.clone(),
                        source,
                    })?;

                    write_block(&mut *sink, &entry.path, &extension, &content)
                        .map_err(WalkError::Write)?;

                    debug!("emitted {} ({} bytes)", entry.path.display(), content.len());
                    summary.files_emitted += 1;
                    summary.bytes_emitted += content.len() as u64;
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Helper to create a file with content, ensuring parent dirs exist.
    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn walk_to_string(root: &Path, config: FilterConfig) -> (String, WalkSummary) {
        let mut out = Vec::new();
        let summary = Walker::new(config).walk(root, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_walk_emits_in_lexical_order() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("b.txt"), "second");
        create_file(&tmp.path().join("a.txt"), "first");
        create_file(&tmp.path().join("c/d.txt"), "third");

        let (out, summary) = walk_to_string(tmp.path(), FilterConfig::new());

        let a = out.find("a.txt").unwrap();
        let b = out.find("b.txt").unwrap();
        let d = out.find("d.txt").unwrap();
        assert!(a < b && b < d);
        assert_eq!(summary.files_emitted, 3);
        assert_eq!(summary.bytes_emitted, 16);
    }

    #[test]
    fn test_walk_counts_pruned_and_skipped() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("keep.rs"), "fn main() {}");
        create_file(&tmp.path().join("drop.md"), "# title");
        create_file(&tmp.path().join("target/debug/out.rs"), "// generated");

        let config = FilterConfig::new()
            .with_exclude_dirs(["target"])
            .with_exclude_exts(["md"]);
        let (out, summary) = walk_to_string(tmp.path(), config);

        assert!(out.contains("keep.rs"));
        assert!(!out.contains("drop.md"));
        assert!(!out.contains("out.rs"));
        assert_eq!(
            summary,
            WalkSummary {
                files_emitted: 1,
                bytes_emitted: 12,
                dirs_pruned: 1,
                files_skipped: 1,
            }
        );
    }

    #[test]
    fn test_walk_root_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("single.go");
        create_file(&file, "package main");

        let (out, summary) = walk_to_string(&file, FilterConfig::new());

        assert_eq!(
            out,
            format!(
                "## FILE: \"{}\"\n```go\npackage main\n```\n\n",
                file.display()
            )
        );
        assert_eq!(summary.files_emitted, 1);
    }

    #[test]
    fn test_walk_excluded_root_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("vendor");
        create_file(&root.join("lib.go"), "package lib");

        let config = FilterConfig::new().with_exclude_dirs(["vendor"]);
        let (out, summary) = walk_to_string(&root, config);

        assert!(out.is_empty());
        assert_eq!(summary.dirs_pruned, 1);
    }

    #[test]
    fn test_walk_missing_root() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");

        let mut out = Vec::new();
        let err = Walker::new(FilterConfig::new())
            .walk(&missing, &mut out)
            .unwrap_err();

        assert!(matches!(err, WalkError::NotFound { .. }));
        assert!(out.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_aborts_on_unreadable_selected_file() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("a.txt"), "ok");
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("b.txt")).unwrap();
        create_file(&tmp.path().join("c.txt"), "never reached");

        let mut out = Vec::new();
        let err = Walker::new(FilterConfig::new())
            .walk(tmp.path(), &mut out)
            .unwrap_err();

        match err {
            WalkError::Read { path, .. } => assert_eq!(path, tmp.path().join("b.txt")),
            other => panic!("unexpected error: {other}"),
        }

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("a.txt"));
        assert!(!out.contains("c.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_skips_unreadable_file_that_is_filtered_out() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("a.txt"), "ok");
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("b.bin")).unwrap();

        let (out, summary) =
            walk_to_string(tmp.path(), FilterConfig::new().with_exclude_exts(["bin"]));

        assert!(out.contains("a.txt"));
        assert_eq!(summary.files_skipped, 1);
    }
}
