//! Lexical path helpers.
//!
//! Paths produced by the walker are reported in a cleaned form, so that walking
//! `.` yields `a.txt` rather than `./a.txt`. Cleaning is purely lexical: the
//! filesystem is never consulted and symbolic links are not resolved.

use std::path::{Component, Path, PathBuf};

/// Return the shortest lexically equivalent form of `path`.
///
/// - `.` components are dropped
/// - a `..` following a normal component removes both
/// - a `..` directly under the root is dropped (`/..` is `/`)
/// - an empty result becomes `.`
///
/// # Examples
///
/// ```
/// # use std::path::{Path, PathBuf};
/// # use filecat::utils::clean_path;
/// assert_eq!(clean_path(Path::new("./src/../lib/a.rs")), PathBuf::from("lib/a.rs"));
/// ```
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    parts.iter().collect()
}

/// Return the directory that contains `path`.
///
/// A bare file name lives in `.`, and a filesystem root is its own container.
#[must_use]
pub fn containing_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => path.to_path_buf(),
    }
}
