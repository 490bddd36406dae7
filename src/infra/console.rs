use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};
use std::path::Path;

/// Human-readable status channel of a collect run. Messages are for eyes,
/// not parsers; implementations must never fail the run.
pub trait Reporter {
    fn root_missing(&mut self, root: &Path);
    fn exploring(&mut self, dir: &Path, file_count: usize);
    fn file_added(&mut self, path: &Path);
    fn file_failed(&mut self, path: &Path, err: &io::Error);
    fn finished(&mut self, output: &Path, count: usize);
    fn write_failed(&mut self, output: &Path, err: &io::Error);
}

/// Colored console rendition of the status lines.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    fn emit(&self, color: Color, line: &str) {
        // Status output is best-effort; a broken terminal must not abort
        // the collection.
        let _ = self.try_emit(color, line);
    }

    fn try_emit(&self, color: Color, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.execute(SetForegroundColor(color))?;
        writeln!(stdout, "{}", line)?;
        stdout.execute(ResetColor)?;
        Ok(())
    }
}

impl Reporter for ConsoleReporter {
    fn root_missing(&mut self, root: &Path) {
        self.emit(
            Color::Red,
            &format!("❌ Le dossier {} n'existe pas. Vérifiez le chemin.", root.display()),
        );
    }

    fn exploring(&mut self, dir: &Path, file_count: usize) {
        self.emit(
            Color::Cyan,
            &format!("📂 Exploration de {} ({} fichiers)", dir.display(), file_count),
        );
    }

    fn file_added(&mut self, path: &Path) {
        self.emit(Color::Green, &format!("✅ Ajouté : {}", path.display()));
    }

    fn file_failed(&mut self, path: &Path, err: &io::Error) {
        self.emit(
            Color::Red,
            &format!("❌ Erreur lors de la lecture de {} : {}", path.display(), err),
        );
    }

    fn finished(&mut self, output: &Path, count: usize) {
        self.emit(
            Color::Green,
            &format!(
                "\n✅ Tous les fichiers ont été copiés dans {} ({} fichiers).",
                output.display(),
                count
            ),
        );
    }

    fn write_failed(&mut self, output: &Path, err: &io::Error) {
        self.emit(
            Color::Red,
            &format!("❌ Erreur lors de l'écriture dans {}: {}", output.display(), err),
        );
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
