use crate::source::filter::ChunkFilter;
use crate::source::handle::EventSource;
use alloy::primitives::BlockNumber;
use alloy::rpc::types::Log;
use chain::rpc::NodeClient;
use eyre::Result;

pub struct LogSource {
    pub node_client: NodeClient,
}

#[async_trait::async_trait]
impl EventSource for LogSource {
    async fn head_number(&self) -> Result<BlockNumber> {
        Ok(self.node_client.get_latest_block_number().await?)
    }

    async fn filter_logs(&self, filter: ChunkFilter) -> Result<Vec<Log>> {
        let logs = self
            .node_client
            .get_logs(
                filter.address,
                filter.topic,
                filter.from_block_number.into(),
                filter.to_block_number.into(),
            )
            .await?
            .into_iter()
            // NOTE: Logs may come from pending txs that have not yet been mined.
            // They are re-emitted with the same tx hash and log index once mined,
            // so only logs with a block number are kept. Logs flagged `removed`
            // belong to a block that was reorged out.
            .filter(|log| log.block_number.is_some() && !log.removed)
            .collect();

        Ok(logs)
    }
}
