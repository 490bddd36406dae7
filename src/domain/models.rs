use std::path::PathBuf;

/// Directory names never descended into.
pub const EXCLUDED_DIRS: [&str; 5] = ["node_modules", ".git", "env", "ui", ".next"];

/// File names never included, whatever their extension.
pub const EXCLUDED_FILES: [&str; 1] = ["package-lock.json"];

/// Suffixes considered textual source.
pub const SOURCE_EXTENSIONS: [&str; 7] = [".ejs", ".js", ".html", ".ts", ".tsx", ".json", ".md"];

#[derive(Debug, Clone)]
pub struct CollectConfig {
    pub root: PathBuf,
    pub output: PathBuf,
    pub debug: bool,
}

/// Which directories are pruned and which files are included.
///
/// The production sets are fixed literals (`standard`), but the rules are
/// carried as values so a traversal can run against alternate sets.
#[derive(Debug, Clone)]
pub struct FilterRules {
    pub excluded_dirs: Vec<String>,
    pub excluded_files: Vec<String>,
    pub extensions: Vec<String>,
}

impl FilterRules {
    pub fn standard() -> Self {
        Self::new(&EXCLUDED_DIRS, &EXCLUDED_FILES, &SOURCE_EXTENSIONS)
    }

    pub fn new(excluded_dirs: &[&str], excluded_files: &[&str], extensions: &[&str]) -> Self {
        Self {
            excluded_dirs: excluded_dirs.iter().map(|s| s.to_string()).collect(),
            excluded_files: excluded_files.iter().map(|s| s.to_string()).collect(),
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// True when a directory with this name must not be descended into.
    pub fn dir_excluded(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    /// True when a file with this name belongs in the snapshot.
    ///
    /// Matching is case-sensitive and suffix-based on the whole name; the
    /// excluded-file check short-circuits regardless of extension.
    pub fn file_selected(&self, name: &str) -> bool {
        if self.excluded_files.iter().any(|f| f == name) {
            return false;
        }
        self.extensions.iter().any(|ext| name.ends_with(ext))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectOutcome {
    Completed { files_written: usize },
    RootMissing,
    OutputFailed,
}
