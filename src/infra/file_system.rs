use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::domain::models::FilterRules;

/// Depth-first iterator over `root` that never descends into an excluded
/// directory, so nothing beneath one is ever visited. The root itself is
/// exempt from pruning, whatever its name.
pub fn walk_tree(
    root: &Path,
    rules: &FilterRules,
) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    debug!("Walking tree at: {}", root.display());
    WalkDir::new(root)
        .into_iter()
        .filter_entry(move |entry| entry.depth() == 0 || !pruned(entry, rules))
}

fn pruned(entry: &DirEntry, rules: &FilterRules) -> bool {
    entry.file_type().is_dir() && rules.dir_excluded(&entry.file_name().to_string_lossy())
}

/// Reads a file as text, replacing undecodable byte sequences instead of
/// failing. There is no binary detection: a non-text file comes back as
/// best-effort decoded garbage.
pub fn read_file_lossy(path: &Path) -> io::Result<String> {
    debug!("Reading file contents: {}", path.display());
    let bytes = fs::read(path)?;
    debug!("Read {} bytes from file", bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Number of plain files directly inside `dir`, before any filtering.
pub fn direct_file_count(dir: &Path) -> usize {
    match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .count(),
        Err(err) => {
            warn!("Could not list {}: {}", dir.display(), err);
            0
        }
    }
}
