use log::{debug, info, warn};
use std::io::{self, Write};

use crate::domain::models::{CollectConfig, CollectOutcome, FilterRules};
use crate::infra::console::Reporter;
use crate::infra::file_system;
use crate::infra::output::SnapshotWriter;

/// Runs one collection pass: existence check, pruned traversal, lenient
/// reads, one delimited block per selected file, trailing count.
///
/// Failures surface through `reporter` and the returned outcome; nothing is
/// raised. A missing root aborts before any output I/O, an output-stream
/// failure aborts the run, a per-file read failure only skips that file.
pub fn collect(
    config: &CollectConfig,
    rules: &FilterRules,
    reporter: &mut dyn Reporter,
) -> CollectOutcome {
    if !config.root.exists() {
        reporter.root_missing(&config.root);
        return CollectOutcome::RootMissing;
    }

    info!(
        "Collecting {} into {}",
        config.root.display(),
        config.output.display()
    );

    let writer = match SnapshotWriter::create(&config.output) {
        Ok(writer) => writer,
        Err(err) => {
            reporter.write_failed(&config.output, &err);
            return CollectOutcome::OutputFailed;
        }
    };

    match write_snapshot(config, rules, writer, reporter) {
        Ok(files_written) => {
            reporter.finished(&config.output, files_written);
            CollectOutcome::Completed { files_written }
        }
        Err(err) => {
            reporter.write_failed(&config.output, &err);
            CollectOutcome::OutputFailed
        }
    }
}

/// The single sequential pass. Output-stream errors abort through `?`;
/// per-file read errors are reported and skipped.
fn write_snapshot<W: Write>(
    config: &CollectConfig,
    rules: &FilterRules,
    mut writer: SnapshotWriter<W>,
    reporter: &mut dyn Reporter,
) -> io::Result<usize> {
    writer.write_header(&config.root)?;

    let mut files_written = 0;

    for entry in file_system::walk_tree(&config.root, rules) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // unreadable corners of the tree are skipped, not fatal
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            if config.debug {
                reporter.exploring(entry.path(), file_system::direct_file_count(entry.path()));
            }
            continue;
        }

        // the root entry itself is not a traversal product; symlinks are
        // not followed
        if entry.depth() == 0 || !entry.file_type().is_file() {
            continue;
        }

        if !rules.file_selected(&entry.file_name().to_string_lossy()) {
            continue;
        }

        match file_system::read_file_lossy(entry.path()) {
            Ok(content) => {
                writer.write_block(entry.path(), &content)?;
                files_written += 1;
                reporter.file_added(entry.path());
            }
            Err(err) => reporter.file_failed(entry.path(), &err),
        }
    }

    writer.write_trailer(files_written)?;
    writer.finish()?;

    debug!("Wrote {} blocks", files_written);
    Ok(files_written)
}
