//! File system traversal with pre-descent pruning

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into: version-control metadata,
/// dependency and vendor trees, build output, IDE state.
pub const PRUNED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".svn",
    "__pycache__",
    ".tox",
    ".venv",
    "venv",
    "vendor",
    "dist",
    "build",
    ".next",
    ".nuxt",
    "target",
    "bin",
    "obj",
    ".idea",
    ".vscode",
    ".gradle",
    ".m2",
];

/// File extensions with binary or otherwise non-text content.
pub const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "ico", "woff", "woff2", "ttf", "eot", "otf", "zip", "gz",
    "tar", "jar", "war", "class", "pyc", "pyo", "o", "so", "dll", "exe", "pdf", "mp3", "mp4",
];

/// Whether a directory name is excluded from descent.
///
/// Any name starting with a dot is treated as hidden and pruned, on top of
/// the fixed [`PRUNED_DIRS`] set. Applies to directories only; hidden files
/// are still scanned.
pub fn should_prune_dir(name: &str) -> bool {
    name.starts_with('.') || PRUNED_DIRS.contains(&name)
}

/// Whether an extension is in the binary set, case-insensitively.
pub fn is_binary_extension(extension: &str) -> bool {
    BINARY_EXTENSIONS
        .iter()
        .any(|e| e.eq_ignore_ascii_case(extension))
}

fn keep_entry(entry: &DirEntry) -> bool {
    // The walk root itself always passes, whatever it is named
    if entry.depth() == 0 {
        return true;
    }
    if !entry.file_type().is_dir() {
        return true;
    }
    !should_prune_dir(&entry.file_name().to_string_lossy())
}

/// Walk `root` recursively and collect every file beneath it.
///
/// Pruning happens before descent, so an excluded directory tree is never
/// enumerated at all. Returns pairs of (openable path, path relative to
/// `root`). Entries the walker cannot read are skipped.
pub fn walk_files(root: &Path) -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(keep_entry) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(%err, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path())
            .to_string_lossy()
            .into_owned();

        files.push((entry.into_path(), relative));
    }

    files
}
