//! Indicator matching primitives
//!
//! An [`Indicator`] is the atomic detection rule every higher-level check is
//! built on: an exact path, a loose wildcard over filenames, or a keyword
//! searched in file contents. All matching is read-only and relative to the
//! project root, and every per-file filesystem error is treated as "did not
//! match" rather than an abort.

use std::path::{Path, PathBuf};
use tracing::debug;

/// How many source files a content-keyword search reads before giving up.
/// Bounds runtime on huge trees; must stay in sync with the design-pattern
/// detector which shares the same sample.
pub const CONTENT_SAMPLE_CAP: usize = 10;

/// File extension of the audited source language.
pub const SOURCE_EXTENSION: &str = "py";

/// A named detection rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indicator {
    /// `root/path` exists, file or directory. No recursion.
    ExactPath(String),
    /// Any filename under `root` contains the pattern with `*` stripped.
    /// A loose substring test, not a glob engine.
    WildcardPattern(String),
    /// The keyword appears (case-insensitively) in the content of one of the
    /// first [`CONTENT_SAMPLE_CAP`] source files.
    ContentKeyword(String),
}

impl Indicator {
    pub fn path(p: impl Into<String>) -> Self {
        Indicator::ExactPath(p.into())
    }

    pub fn wildcard(p: impl Into<String>) -> Self {
        Indicator::WildcardPattern(p.into())
    }

    pub fn keyword(p: impl Into<String>) -> Self {
        Indicator::ContentKeyword(p.into())
    }

    /// Parse an indicator from its configuration-file shorthand.
    ///
    /// Profile files write indicators as bare strings; the variant is
    /// inferred: anything containing `*` is a wildcard, anything that looks
    /// like a path (trailing `/`, a `.` or a path separator) is an exact
    /// path, everything else is a content keyword.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.contains('*') {
            Indicator::WildcardPattern(raw.to_string())
        } else if raw.ends_with('/') || raw.contains('/') || raw.contains('.') {
            Indicator::ExactPath(raw.trim_end_matches('/').to_string())
        } else {
            Indicator::ContentKeyword(raw.to_string())
        }
    }
}

/// Resolve a single indicator against a project root.
pub fn matches(root: &Path, indicator: &Indicator) -> bool {
    match indicator {
        Indicator::ExactPath(path) => root.join(path.trim_end_matches('/')).exists(),
        Indicator::WildcardPattern(pattern) => {
            let needle = pattern.replace('*', "");
            if needle.is_empty() {
                return false;
            }
            walk_files(root).iter().any(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| name.contains(&needle))
            })
        }
        Indicator::ContentKeyword(keyword) => {
            let keyword = keyword.to_lowercase();
            source_files(root, Some(CONTENT_SAMPLE_CAP))
                .iter()
                .filter_map(|p| read_file(p))
                .any(|content| content.to_lowercase().contains(&keyword))
        }
    }
}

/// Read a file into memory, or `None` if it cannot be read.
///
/// The explicit `Option` keeps the skip-and-continue policy visible at every
/// call site instead of hiding it in an ambient error handler.
pub fn read_file(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            debug!("skipping unreadable file {}: {}", path.display(), err);
            None
        }
    }
}

/// Walk every file under `root`, respecting .gitignore, in lexicographic
/// path order.
///
/// The walker's native ordering is filesystem-dependent, so results are
/// collected and sorted to keep every downstream score reproducible across
/// platforms.
pub fn walk_files(root: &Path) -> Vec<PathBuf> {
    let walker = ignore::WalkBuilder::new(root)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .require_git(false)
        .build();

    let mut files: Vec<PathBuf> = walker
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.is_file() {
                Some(path.to_path_buf())
            } else {
                None
            }
        })
        .collect();

    files.sort();
    files
}

/// Source files under `root` in lexicographic order, optionally capped.
///
/// The cap is applied after sorting so that which files fall inside the
/// sample never depends on directory-listing order.
pub fn source_files(root: &Path, cap: Option<usize>) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walk_files(root)
        .into_iter()
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext == SOURCE_EXTENSION)
        })
        .collect();

    if let Some(cap) = cap {
        files.truncate(cap);
    }
    files
}
