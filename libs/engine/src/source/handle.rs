use alloy::primitives::BlockNumber;
use alloy::rpc::types::Log;
use chain::registry::TaskEvent;
use eyre::Result;

use crate::source::filter::ChunkFilter;

/// Read-only view of the chain the poller consumes.
#[async_trait::async_trait]
pub trait EventSource: Send + Sync {
    async fn head_number(&self) -> Result<BlockNumber>;

    async fn filter_logs(&self, filter: ChunkFilter) -> Result<Vec<Log>>;

    fn decode(&self, log: &Log) -> Result<TaskEvent> {
        TaskEvent::try_from(log)
    }
}
