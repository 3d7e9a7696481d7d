//! Scanner module - scan target resolution and candidate file selection

mod filesystem;

pub use filesystem::{
    is_binary_extension, should_prune_dir, walk_files, BINARY_EXTENSIONS, PRUNED_DIRS,
};

use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PatLensError, Result};
use crate::utils::Language;

/// A file selected for scanning.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    /// Path used to open the file.
    pub path: PathBuf,
    /// Path as it appears in findings: relative to the scan root for
    /// directory scans, the target as given for single-file scans.
    pub display_path: String,
}

/// Selects the files a scan will read.
///
/// A single-file target is yielded as-is, bypassing every directory-mode
/// filter. A directory target is walked with pre-descent pruning, then each
/// remaining file must pass the user exclusion regex, the binary-extension
/// set, and the optional language filter.
#[derive(Debug)]
pub struct Scanner {
    target: PathBuf,
    language: Option<Language>,
    exclude: Option<Regex>,
}

impl Scanner {
    /// Create a scanner for the given target path.
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            language: None,
            exclude: None,
        }
    }

    /// Restrict directory scans to one language's extensions.
    pub fn with_language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }

    /// Set the path-exclusion regex, applied to paths relative to the scan
    /// root. An invalid pattern is a fatal error, raised here before any
    /// file is visited.
    pub fn with_exclude(mut self, pattern: Option<&str>) -> Result<Self> {
        self.exclude = match pattern {
            None => None,
            Some(source) => Some(Regex::new(source).map_err(|err| {
                PatLensError::InvalidExcludePattern {
                    pattern: source.to_string(),
                    source: err,
                }
            })?),
        };
        Ok(self)
    }

    /// The scan target as given.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Resolve the target and produce the files to scan.
    ///
    /// Fails only when the target does not exist. Yield order follows the
    /// filesystem walk and is not guaranteed; reporting sorts findings
    /// independently of it.
    pub fn candidate_files(&self) -> Result<Vec<CandidateFile>> {
        if !self.target.exists() {
            return Err(PatLensError::TargetNotFound {
                path: self.target.display().to_string(),
            });
        }

        if self.target.is_file() {
            return Ok(vec![CandidateFile {
                path: self.target.clone(),
                display_path: self.target.display().to_string(),
            }]);
        }

        let candidates: Vec<CandidateFile> = walk_files(&self.target)
            .into_iter()
            .filter(|(path, relative)| self.keep_file(path, relative))
            .map(|(path, relative)| CandidateFile {
                path,
                display_path: relative,
            })
            .collect();

        debug!(
            path = %self.target.display(),
            candidates = candidates.len(),
            "file selection complete"
        );
        Ok(candidates)
    }

    fn keep_file(&self, path: &Path, relative: &str) -> bool {
        if self.exclude.as_ref().is_some_and(|re| re.is_match(relative)) {
            return false;
        }

        let extension = path.extension().and_then(|e| e.to_str());
        if extension.is_some_and(is_binary_extension) {
            return false;
        }

        match (self.language, extension) {
            (Some(language), Some(ext)) => language.includes_extension(ext),
            (Some(_), None) => false,
            (None, _) => true,
        }
    }
}
