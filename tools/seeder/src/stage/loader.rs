//! Batch loading: fixed-size insert chunks with per-chunk failure
//! isolation.

use serde::Serialize;
use tracing::warn;

use crate::domain::ports::TableStore;
use crate::fixtures::BATCH_SIZE;

/// Insert `rows` into `table` in chunks of [`BATCH_SIZE`]. A failed chunk
/// is logged with the table name and the load moves on to the next chunk;
/// there is no retry and no rollback, so partial success is possible and
/// visible only in the logs.
pub async fn insert_batched<T, S>(store: &S, table: &str, rows: &[T])
where
    T: Serialize + Sync,
    S: TableStore,
{
    for chunk in rows.chunks(BATCH_SIZE) {
        if let Err(err) = store.insert(table, chunk).await {
            warn!(table, kind = err.kind(), error = %err, "batch insert failed, continuing");
        }
    }
}
