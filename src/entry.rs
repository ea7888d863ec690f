//! The per-node view of the filesystem handed to the filter rules.

use std::{ffi::OsString, path::PathBuf};

use walkdir::DirEntry;

use crate::utils::clean_path;

/// One filesystem node visited during a walk.
///
/// Entries are transient: one is built per visited node, classified, and
/// dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkEntry {
    /// Lexically cleaned path of the node, as it is reported in the output
    pub path: PathBuf,

    /// Base name of the node, kept as raw OS bytes
    pub name: OsString,

    /// Whether the node is a directory (symbolic links never are)
    pub is_dir: bool,
}

impl WalkEntry {
    /// Build an entry from a path, deriving its base name.
    ///
    /// A path without a final normal component (such as `.` or `/`) uses the
    /// whole path as its name.
    #[cfg(test)]
    pub(crate) fn new(path: impl AsRef<std::path::Path>, is_dir: bool) -> Self {
        let path = clean_path(path.as_ref());
        let name = path.file_name().unwrap_or(path.as_os_str()).to_os_string();

        Self { path, name, is_dir }
    }
}

impl From<&DirEntry> for WalkEntry {
    fn from(entry: &DirEntry) -> Self {
        Self {
            path: clean_path(entry.path()),
            name: entry.file_name().to_os_string(),
            is_dir: entry.file_type().is_dir(),
        }
    }
}
