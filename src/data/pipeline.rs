use std::fmt;
use std::path::PathBuf;

use anyhow::Result;

use super::dedup::{Deduplicator, ProcessedDataset};
use super::loader::{load_file, LoadError};
use super::normalize::MatchMode;
use super::writer::{build_archive, serialize};

// ---------------------------------------------------------------------------
// Run orchestration: load → dedup → package
// ---------------------------------------------------------------------------

/// Why a queued file produced no output entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Unsupported,
    Unreadable,
    Empty,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unsupported => write!(f, "unsupported format"),
            SkipReason::Unreadable => write!(f, "unreadable"),
            SkipReason::Empty => write!(f, "no rows"),
        }
    }
}

/// Result of one processing run, in queue order.
pub struct RunOutcome {
    pub processed: Vec<ProcessedDataset>,
    pub skipped: Vec<(String, SkipReason)>,
}

/// Process the queued files in upload order.  Priority ranks follow queue
/// position, so a skipped file still consumes its rank and the survivors
/// keep the output names their upload position implies.  Skips never abort
/// the run.
pub fn run(paths: &[PathBuf], mode: MatchMode) -> RunOutcome {
    let mut dedup = Deduplicator::new(mode);
    let mut processed = Vec::new();
    let mut skipped = Vec::new();

    for (i, path) in paths.iter().enumerate() {
        let priority = i + 1;
        let display = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match load_file(path) {
            Ok(dataset) => match dedup.process(priority, dataset) {
                Some(p) => processed.push(p),
                None => skipped.push((display, SkipReason::Empty)),
            },
            Err(LoadError::Unsupported(ext)) => {
                log::debug!("skipping '{display}': unsupported extension .{ext}");
                skipped.push((display, SkipReason::Unsupported));
            }
            Err(LoadError::Read(e)) => {
                log::warn!("skipping '{display}': {e:#}");
                skipped.push((display, SkipReason::Unreadable));
            }
        }
    }

    RunOutcome { processed, skipped }
}

/// Serialize every processed dataset back to its source format and pack the
/// lot into one zip.  Zero outputs still produce a valid (empty) archive.
pub fn package(processed: &[ProcessedDataset]) -> Result<Vec<u8>> {
    let mut entries = Vec::with_capacity(processed.len());
    for p in processed {
        let bytes = serialize(&p.dataset, &p.dataset.extension())?;
        entries.push((p.output_name(), bytes));
    }
    build_archive(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn write(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn end_to_end_over_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![
            write(dir.path(), "master.csv", "phone\n555-1234\n555-9999\n"),
            write(dir.path(), "notes.txt", "not tabular"),
            write(dir.path(), "leads.csv", "phone\n5551234\n555-0000\n"),
        ];

        let outcome = run(&paths, MatchMode::Normalized);
        assert_eq!(outcome.processed.len(), 2);
        assert_eq!(
            outcome.skipped,
            vec![("notes.txt".to_string(), SkipReason::Unsupported)]
        );

        // The skipped file consumed rank 2, so leads.csv is rank 3.
        assert_eq!(outcome.processed[1].priority, 3);
        assert_eq!(outcome.processed[1].output_name(), "leads_3_excluded.csv");
        assert_eq!(outcome.processed[1].dataset.len(), 1);

        let archive_bytes = package(&outcome.processed).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(archive_bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = String::new();
        archive
            .by_name("leads_3_excluded.csv")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "phone\n555-0000\n");
    }

    #[test]
    fn header_only_file_is_skipped_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![write(dir.path(), "empty.csv", "id\n")];

        let outcome = run(&paths, MatchMode::Normalized);
        assert!(outcome.processed.is_empty());
        assert_eq!(
            outcome.skipped,
            vec![("empty.csv".to_string(), SkipReason::Empty)]
        );

        // Zero outputs still package into a valid archive.
        let bytes = package(&outcome.processed).unwrap();
        assert_eq!(zip::ZipArchive::new(Cursor::new(bytes)).unwrap().len(), 0);
    }

    #[test]
    fn unreadable_files_do_not_abort_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![
            dir.path().join("missing.csv"),
            write(dir.path(), "ok.csv", "id\nA-1\n"),
        ];

        let outcome = run(&paths, MatchMode::Normalized);
        assert_eq!(outcome.processed.len(), 1);
        assert_eq!(outcome.processed[0].priority, 2);
        assert_eq!(
            outcome.skipped,
            vec![("missing.csv".to_string(), SkipReason::Unreadable)]
        );
    }
}
