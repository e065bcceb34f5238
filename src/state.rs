use std::path::{Path, PathBuf};

use crate::data::dedup::ProcessedDataset;
use crate::data::normalize::MatchMode;
use crate::data::pipeline::{self, SkipReason};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Queued input files; queue position is priority (first = rank 1).
    pub queue: Vec<PathBuf>,

    /// How first-column keys are compared.
    pub match_mode: MatchMode,

    /// Outputs of the last run, in queue order.
    pub processed: Vec<ProcessedDataset>,

    /// Files the last run skipped, with the reason.
    pub skipped: Vec<(String, SkipReason)>,

    /// The packaged archive for the last run (ready to save).
    pub archive: Option<Vec<u8>>,

    /// Which processed dataset is shown in the preview table.
    pub selected: Option<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            queue: Vec::new(),
            match_mode: MatchMode::default(),
            processed: Vec::new(),
            skipped: Vec::new(),
            archive: None,
            selected: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Append files to the queue.  Results from a previous run stay on
    /// screen until the next run.
    pub fn add_files(&mut self, paths: Vec<PathBuf>) {
        log::info!("queued {} file(s)", paths.len());
        self.queue.extend(paths);
        self.status_message = None;
    }

    /// Drop the queue and any run results.
    pub fn clear(&mut self) {
        *self = AppState {
            match_mode: self.match_mode,
            ..AppState::default()
        };
    }

    /// Run the pipeline over the current queue and package the archive.
    pub fn process(&mut self) {
        if self.queue.is_empty() {
            self.status_message = Some("Queue some files first".to_string());
            return;
        }

        let outcome = pipeline::run(&self.queue, self.match_mode);
        match pipeline::package(&outcome.processed) {
            Ok(bytes) => {
                self.archive = Some(bytes);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("failed to package archive: {e:#}");
                self.archive = None;
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
        self.selected = if outcome.processed.is_empty() {
            None
        } else {
            Some(0)
        };
        self.processed = outcome.processed;
        self.skipped = outcome.skipped;
    }

    /// Write the packaged archive to disk.
    pub fn save_archive(&mut self, path: &Path) {
        let Some(bytes) = &self.archive else {
            return;
        };
        match std::fs::write(path, bytes) {
            Ok(()) => {
                log::info!("archive saved to {}", path.display());
                self.status_message = None;
            }
            Err(e) => {
                log::error!("failed to save archive: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
