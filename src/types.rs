//! Public types for the zipsweep API and pipeline.

use std::path::PathBuf;

use crate::error::ExtractError;
use crate::sniff::ContentTag;

/// Outcome of one work item: the archive a worker pulled from the walk stream
/// and how extracting it went.
///
/// Produced exactly once per consumed path. A non-empty `err` reports that one
/// archive's failure; it never stops other workers on its own — only the
/// orchestrator decides whether the first failure ends the run.
#[derive(Debug)]
pub struct ExtractOutcome {
    /// Archive path as emitted by the walk stage.
    pub source: PathBuf,
    /// `None` on success.
    pub err: Option<ExtractError>,
}

impl ExtractOutcome {
    pub fn is_ok(&self) -> bool {
        self.err.is_none()
    }
}

/// Options for [`sweep_dir`](crate::sweep_dir).
#[derive(Clone, Debug)]
pub struct Opts {
    /// Override worker thread count. When None, twice the logical CPU count.
    pub workers: Option<usize>,
    /// Content tag a file must sniff as to enter the pipeline.
    pub target: ContentTag,
    /// Verbose output (CLI).
    pub verbose: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Opts {
            workers: None,
            target: ContentTag::Zip,
            verbose: false,
        }
    }
}

impl Opts {
    /// Effective worker count: the override when set, otherwise twice the
    /// logical CPU count, never below one.
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(|| num_cpus::get() * 2).max(1)
    }
}
