//! Entry filtering functionality.
//!
//! This module holds the decision procedure of the walk: for every visited
//! entry it answers whether to prune, descend, skip or emit. It never touches
//! the filesystem, so every rule can be checked on plain values.

use crate::config::FilterConfig;
use crate::entry::WalkEntry;
use crate::utils::containing_dir;

/// What the walker should do with one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Directory whose subtree is skipped entirely
    Prune,

    /// Directory to enter
    Descend,

    /// File rejected by the filters
    Skip,

    /// File to read and print, with its extension
    Emit { extension: Vec<u8> },
}

/// Return the extension of a raw file name, without the leading dot.
///
/// The extension is whatever follows the last `.` of the name, so a dotfile
/// such as `.gitignore` has extension `gitignore`, and a name with no `.` (or
/// ending in `.`) has the empty extension. Names are handled as bytes, so a
/// name that is not valid UTF-8 keeps its exact extension.
///
/// # Examples
///
/// ```
/// # use filecat::filtering::extension_of;
/// assert_eq!(extension_of(b"archive.tar.gz"), b"gz");
/// assert_eq!(extension_of(b"README"), b"");
/// ```
#[must_use]
pub fn extension_of(name: &[u8]) -> &[u8] {
    match name.iter().rposition(|&byte| byte == b'.') {
        Some(idx) => &name[idx + 1..],
        None => &[],
    }
}

/// Decide what to do with `entry` under `config`.
///
/// Directories are pruned when their base name is excluded, and entered
/// otherwise. A file is emitted only when all of the following hold:
/// - it lives directly in one of the include dirs (or none are set)
/// - its extension is in the include exts (or none are set)
/// - its extension is not in the exclude exts
///
/// The include and exclude extension checks are independent. A file accepted
/// by the include list is still rejected by a matching exclude entry.
#[must_use]
pub fn classify(entry: &WalkEntry, config: &FilterConfig) -> Verdict {
    if entry.is_dir {
        return if config.excludes_dir_name(&entry.name) {
            Verdict::Prune
        } else {
            Verdict::Descend
        };
    }

    let extension = extension_of(entry.name.as_encoded_bytes());

    let dir_passes = config.includes_dir(&containing_dir(&entry.path));
    let ext_included = config.includes_ext(extension);
    let ext_excluded = config.excludes_ext(extension);

    if dir_passes && ext_included && !ext_excluded {
        Verdict::Emit {
            extension: extension.to_vec(),
        }
    } else {
        Verdict::Skip
    }
}
