use alloy::primitives::BlockNumber;
use eyre::Result;
use store::checkpoint::store::Store as CheckpointStore;
use store::client::Client;
use store::processed::model::ProcessedLogKey;
use store::processed::store::Store as ProcessedStore;

/// Durable poller state: the checkpoint plus the set of handled log identities.
///
/// A restart observes exactly what the last successful `mark_seen` /
/// `save_checkpoint` call persisted.
#[async_trait::async_trait]
pub trait Ledger: Send + Sync {
    async fn seen(&self, key: &ProcessedLogKey) -> Result<bool>;

    /// Insert-if-absent; marking a key twice is not an error.
    async fn mark_seen(&self, key: &ProcessedLogKey, block_number: BlockNumber) -> Result<()>;

    async fn get_checkpoint(&self) -> Result<Option<BlockNumber>>;

    async fn save_checkpoint(&self, block_number: BlockNumber) -> Result<()>;
}

/// [`Ledger`] backed by the SQLite stores.
#[derive(Clone)]
pub struct StoreLedger {
    checkpoints: CheckpointStore,
    processed: ProcessedStore,
}

impl StoreLedger {
    pub fn new(client: Client) -> Self {
        Self {
            checkpoints: CheckpointStore::new(client.clone()),
            processed: ProcessedStore::new(client),
        }
    }
}

#[async_trait::async_trait]
impl Ledger for StoreLedger {
    async fn seen(&self, key: &ProcessedLogKey) -> Result<bool> {
        Ok(self.processed.contains(key).await?)
    }

    async fn mark_seen(&self, key: &ProcessedLogKey, block_number: BlockNumber) -> Result<()> {
        match self.processed.insert_processed_log(key, block_number).await {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::error!("Ledger failed on [insert_processed_log] for {key}: {e:?}");
                Err(e.into())
            }
        }
    }

    async fn get_checkpoint(&self) -> Result<Option<BlockNumber>> {
        let checkpoint = self.checkpoints.get_checkpoint().await?;
        if let Some(checkpoint) = &checkpoint {
            tracing::debug!("Loaded {checkpoint}");
        }
        Ok(checkpoint.map(|c| c.last_block as BlockNumber))
    }

    async fn save_checkpoint(&self, block_number: BlockNumber) -> Result<()> {
        match self.checkpoints.save_checkpoint(block_number).await {
            Ok(_) => {
                tracing::info!("Checkpoint saved at block number {block_number}");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Ledger failed on [save_checkpoint]: {e:?}");
                Err(e.into())
            }
        }
    }
}
