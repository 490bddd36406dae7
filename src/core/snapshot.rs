use std::path::Path;

pub const SEPARATOR_WIDTH: usize = 80;

/// Opening line of the snapshot, naming the traversal root.
pub fn header(root: &Path) -> String {
    format!("### Résumé des fichiers trouvés dans {} ###\n\n", root.display())
}

/// One delimited block: path banner, blank line, raw content, blank-line
/// padded `=` separator. The padding and separator width are part of the
/// format and consumed downstream as-is.
pub fn block(path: &Path, content: &str) -> String {
    format!(
        "===== {} =====\n\n{}\n\n{}\n\n",
        path.display(),
        content,
        "=".repeat(SEPARATOR_WIDTH)
    )
}

/// Closing summary line with the number of files written.
pub fn trailer(count: usize) -> String {
    format!("\n### {} fichiers enregistrés avec succès. ###\n", count)
}
