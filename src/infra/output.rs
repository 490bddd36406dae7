use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::snapshot;

/// The output accumulator: one buffered stream, opened once for the run,
/// fed a header, then one block per file, then the trailing summary.
pub struct SnapshotWriter<W: Write> {
    out: BufWriter<W>,
}

impl SnapshotWriter<File> {
    /// Opens (and truncates) the snapshot file at `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        debug!("Opening snapshot output: {}", path.display());
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out: BufWriter::new(out) }
    }

    pub fn write_header(&mut self, root: &Path) -> io::Result<()> {
        self.out.write_all(snapshot::header(root).as_bytes())
    }

    pub fn write_block(&mut self, path: &Path, content: &str) -> io::Result<()> {
        debug!("Writing block for {}", path.display());
        self.out.write_all(snapshot::block(path, content).as_bytes())
    }

    pub fn write_trailer(&mut self, count: usize) -> io::Result<()> {
        self.out.write_all(snapshot::trailer(count).as_bytes())
    }

    /// Flushes and closes the stream.
    pub fn finish(mut self) -> io::Result<()> {
        self.out.flush()?;
        info!("Snapshot stream flushed");
        Ok(())
    }
}
