//! Upload dispatch: push a validated batch to the remote list
//!
//! Two strategies are supported. Sequential writes one record at a time in
//! input order and reports fractional progress per item; parallel schedules
//! every write concurrently and only signals completion. Both isolate
//! per-item failures: a failed write is logged and recorded, never fatal to
//! the batch, and never retried.

pub mod runner;

pub use runner::dispatch;

use anyhow::Result;
use async_trait::async_trait;

use crate::ingest::EmployeeRecord;

/// Progress callback, called with a fraction in `[0, 1]`
pub type ProgressFn = dyn Fn(f64) + Send + Sync;

/// Seam between the dispatcher and the remote store
#[async_trait]
pub trait ItemWriter: Send + Sync {
    /// Create one item in the remote list
    async fn write_item(&self, record: &EmployeeRecord) -> Result<()>;
}

/// Caller-selected dispatch policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UploadStrategy {
    /// One write at a time, in input order, with per-item progress
    Sequential,
    /// All writes at once; progress jumps straight to done
    Parallel,
}

impl std::fmt::Display for UploadStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadStrategy::Sequential => write!(f, "sequential"),
            UploadStrategy::Parallel => write!(f, "parallel"),
        }
    }
}

/// Outcome of one record's store write
#[derive(Debug, Clone)]
pub struct ItemOutcome {
    /// Position of the record in the dispatched batch
    pub index: usize,
    /// Failure message, if the write failed
    pub error: Option<String>,
}

impl ItemOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-item results for one dispatched batch
#[derive(Debug, Default)]
pub struct UploadReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl UploadReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.succeeded()).count()
    }

    pub fn succeeded(&self) -> usize {
        self.total() - self.failed()
    }
}
