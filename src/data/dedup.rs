use std::collections::HashSet;

use super::model::Dataset;
use super::normalize::{canonical_key, MatchMode};

// ---------------------------------------------------------------------------
// Priority-based deduplication
// ---------------------------------------------------------------------------

/// One output of a deduplication run: the surviving rows of a file together
/// with the priority rank it was processed at.
#[derive(Debug, Clone)]
pub struct ProcessedDataset {
    pub dataset: Dataset,
    pub priority: usize,
}

impl ProcessedDataset {
    /// Archive entry name: `{base}_{priority}_excluded{ext}`.
    pub fn output_name(&self) -> String {
        format!(
            "{}_{}_excluded{}",
            self.dataset.base_name(),
            self.priority,
            self.dataset.extension()
        )
    }
}

/// Dedup state for one run.  The seen-key set only ever grows: rank 1
/// contributes keys without being filtered, every later rank is filtered
/// against all earlier ranks before contributing its own keys.
pub struct Deduplicator {
    mode: MatchMode,
    seen: HashSet<String>,
}

impl Deduplicator {
    pub fn new(mode: MatchMode) -> Self {
        Deduplicator {
            mode,
            seen: HashSet::new(),
        }
    }

    /// Filter one dataset at the given priority rank and fold its keys into
    /// the seen set.  Returns `None` for empty datasets, which contribute
    /// neither keys nor an output entry.
    ///
    /// Row filtering: a row survives when its key is missing or unseen.
    /// Rank 1 meets an empty seen set, so it always survives whole.  The
    /// seen set is updated with ALL of the dataset's keys, not only the
    /// survivors', before the next dataset is processed.
    pub fn process(&mut self, priority: usize, dataset: Dataset) -> Option<ProcessedDataset> {
        if dataset.is_empty() {
            log::debug!("'{}' has no rows, skipping", dataset.name);
            return None;
        }

        let keys: Vec<Option<String>> = dataset
            .first_column()
            .map(|cell| canonical_key(cell, self.mode))
            .collect();

        let rows: Vec<_> = dataset
            .rows
            .iter()
            .zip(&keys)
            .filter(|(_, key)| match key {
                Some(k) => !self.seen.contains(k),
                None => true,
            })
            .map(|(row, _)| row.clone())
            .collect();

        self.seen.extend(keys.into_iter().flatten());

        log::info!(
            "'{}' (priority {}): kept {} of {} rows",
            dataset.name,
            priority,
            rows.len(),
            dataset.len()
        );

        Some(ProcessedDataset {
            dataset: Dataset::new(dataset.name, dataset.columns, rows),
            priority,
        })
    }
}

/// Deduplicate a priority-ordered sequence of datasets.  Priority ranks are
/// assigned by position starting at 1; empty datasets consume their rank but
/// produce no output.  Output order follows input order.
pub fn deduplicate(datasets: Vec<Dataset>, mode: MatchMode) -> Vec<ProcessedDataset> {
    let mut dedup = Deduplicator::new(mode);
    datasets
        .into_iter()
        .enumerate()
        .filter_map(|(i, ds)| dedup.process(i + 1, ds))
        .collect()
}
