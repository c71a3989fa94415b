use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;

use super::queue::RootQueue;
use crate::error::{PruneError, Result};
use crate::logger::*;
use crate::vendor::{get_entries, prune_root, write_empty, EntryFilter, PruneOutcome, RootLocks};

#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub manifest: PathBuf,
    /// Directory the manifest's entry paths are relative to.
    pub base_dir: PathBuf,
    pub filter: EntryFilter,
    pub jobs: NonZeroUsize,
    pub write_stubs: bool,
}

impl CleanConfig {
    pub fn new(manifest: impl Into<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            base_dir: base_dir.into(),
            filter: EntryFilter::default(),
            jobs: NonZeroUsize::MIN,
            write_stubs: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub entries: usize,
    pub modules_cleaned: usize,
    pub modules_skipped: usize,
    pub files_deleted: usize,
    pub stubs_written: usize,
}

impl CleanReport {
    fn record(&mut self, outcome: PruneOutcome) {
        match outcome {
            PruneOutcome::AlreadyClean => self.modules_skipped += 1,
            PruneOutcome::Cleaned { deleted } => {
                self.modules_cleaned += 1;
                self.files_deleted += deleted;
            }
        }
    }
}

/// Runs the whole bundle cleanup: filter the manifest, prune every owning
/// module once, then leave an empty stub at each entry path.
pub struct CleanEngine {
    config: CleanConfig,
    locks: RootLocks,
}

impl CleanEngine {
    pub fn new(config: CleanConfig) -> Self {
        Self {
            config,
            locks: RootLocks::new(),
        }
    }

    pub fn run(&self, logger: &dyn DeleteLogger) -> Result<CleanReport> {
        info!(
            "cleaning vendor bundle from {}",
            self.config.manifest.display()
        );
        let entries = get_entries(&self.config.manifest, &self.config.filter)?;
        let queue = RootQueue::from_entries(&self.config.base_dir, &entries)?;
        debug!(
            "run: {} entries owned by {} module(s)",
            entries.len(),
            queue.len()
        );

        let mut report = CleanReport {
            entries: entries.len(),
            ..CleanReport::default()
        };
        for outcome in self.prune_all(logger, &queue)? {
            report.record(outcome);
        }

        if self.config.write_stubs {
            for entry in queue.entries() {
                write_empty(entry)?;
                report.stubs_written += 1;
            }
        }

        info!(
            "cleaned {} module(s), skipped {}, deleted {} file(s)",
            report.modules_cleaned, report.modules_skipped, report.files_deleted
        );
        Ok(report)
    }

    fn prune_all(&self, logger: &dyn DeleteLogger, queue: &RootQueue) -> Result<Vec<PruneOutcome>> {
        let workers = self.config.jobs.get().min(queue.len());
        if workers <= 1 {
            return queue
                .roots()
                .map(|root| prune_root(logger, root, &self.locks))
                .collect();
        }

        trace!("prune_all: {} workers over {} roots", workers, queue.len());
        let next = AtomicUsize::new(0);
        let failed = AtomicBool::new(false);
        let slots: Mutex<Vec<Option<Result<PruneOutcome>>>> =
            Mutex::new((0..queue.len()).map(|_| None).collect());

        thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    scope.spawn(|| {
                        while !failed.load(Ordering::SeqCst) {
                            let index = next.fetch_add(1, Ordering::SeqCst);
                            let Some(root) = queue.root_at(index) else {
                                break;
                            };
                            let result = prune_root(logger, root, &self.locks);
                            if result.is_err() {
                                failed.store(true, Ordering::SeqCst);
                            }
                            let mut slots = slots.lock().unwrap_or_else(|p| p.into_inner());
                            slots[index] = Some(result);
                        }
                    })
                })
                .collect();
            for handle in handles {
                if handle.join().is_err() {
                    failed.store(true, Ordering::SeqCst);
                }
            }
        });

        let slots = slots.into_inner().unwrap_or_else(|p| p.into_inner());
        let mut outcomes = Vec::with_capacity(slots.len());
        let mut unfinished = None;
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(result) => outcomes.push(result?),
                // Never started after an earlier failure, or its worker panicked.
                None => unfinished = unfinished.or(Some(index)),
            }
        }
        if let Some(index) = unfinished {
            let dir = queue
                .root_at(index)
                .map(|root| root.dir.clone())
                .unwrap_or_default();
            error!("prune_all: no result for {}", dir.display());
            return Err(PruneError::Worker(dir));
        }
        Ok(outcomes)
    }
}
