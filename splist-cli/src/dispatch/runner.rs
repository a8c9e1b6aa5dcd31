//! Strategy implementations for batch dispatch

use futures::future::join_all;
use log::error;

use super::{ItemOutcome, ItemWriter, ProgressFn, UploadReport, UploadStrategy};
use crate::ingest::EmployeeRecord;

/// Dispatch a batch with the chosen strategy.
///
/// Progress is reset to 0 before any write starts. The batch is consumed as
/// a snapshot: the caller hands the records in and nothing mutates them
/// while writes are in flight.
pub async fn dispatch(
    writer: &dyn ItemWriter,
    records: &[EmployeeRecord],
    strategy: UploadStrategy,
    progress: &ProgressFn,
) -> UploadReport {
    progress(0.0);
    if records.is_empty() {
        return UploadReport::default();
    }

    match strategy {
        UploadStrategy::Sequential => upload_sequential(writer, records, progress).await,
        UploadStrategy::Parallel => upload_parallel(writer, records, progress).await,
    }
}

/// One write at a time, in input order. Progress advances by `1/total` after
/// every attempt, success or failure, and lands on exactly 1.
async fn upload_sequential(
    writer: &dyn ItemWriter,
    records: &[EmployeeRecord],
    progress: &ProgressFn,
) -> UploadReport {
    let total = records.len();
    let mut outcomes = Vec::with_capacity(total);

    for (index, record) in records.iter().enumerate() {
        let result = writer.write_item(record).await;
        if let Err(err) = &result {
            error!("failed to upload record {} of {total}: {err:#}", index + 1);
        }
        outcomes.push(ItemOutcome {
            index,
            error: result.err().map(|err| format!("{err:#}")),
        });
        progress((index + 1) as f64 / total as f64);
    }

    UploadReport { outcomes }
}

/// Every write scheduled concurrently, with no throughput limit and no
/// ordering between items. Progress only signals completion of the full set.
async fn upload_parallel(
    writer: &dyn ItemWriter,
    records: &[EmployeeRecord],
    progress: &ProgressFn,
) -> UploadReport {
    let writes = records.iter().enumerate().map(|(index, record)| async move {
        let result = writer.write_item(record).await;
        if let Err(err) = &result {
            error!("failed to upload record {}: {err:#}", index + 1);
        }
        ItemOutcome {
            index,
            error: result.err().map(|err| format!("{err:#}")),
        }
    });

    let outcomes = join_all(writes).await;
    progress(1.0);

    UploadReport { outcomes }
}
