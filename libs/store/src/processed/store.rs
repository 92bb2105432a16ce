use crate::client::Client;
use crate::processed::model::{ProcessedLog, ProcessedLogKey};
use alloy::primitives::BlockNumber;
use sqlx::Error;

#[derive(Clone)]
pub struct Store {
    client: Client,
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    // ---------------------------
    // PROCESSED LOGS
    // ---------------------------

    pub async fn contains(&self, key: &ProcessedLogKey) -> Result<bool, Error> {
        let query = r#"
            SELECT 1
            FROM processed_logs
            WHERE chain_id = ? AND transaction_hash = ? AND log_index = ?
            LIMIT 1
            "#;
        let row: Option<(i64,)> = sqlx::query_as(query)
            .bind(key.chain_id as i64)
            .bind(key.transaction_hash.as_slice())
            .bind(key.log_index as i64)
            .fetch_optional(self.client.pool())
            .await?;

        Ok(row.is_some())
    }

    /// Records `key` as handled. Inserting an existing key is a no-op.
    pub async fn insert_processed_log(
        &self,
        key: &ProcessedLogKey,
        block_number: BlockNumber,
    ) -> Result<(), Error> {
        let query = r#"
            INSERT OR IGNORE INTO processed_logs (chain_id, transaction_hash, log_index, block_number)
            VALUES (?, ?, ?, ?)
            "#;
        sqlx::query(query)
            .bind(key.chain_id as i64)
            .bind(key.transaction_hash.as_slice())
            .bind(key.log_index as i64)
            .bind(block_number as i64)
            .execute(self.client.pool())
            .await?;
        Ok(())
    }

    pub async fn get_processed_logs_from_block_number(
        &self,
        from_block_number: BlockNumber,
    ) -> Result<Vec<ProcessedLog>, Error> {
        let query = r#"
            SELECT chain_id, transaction_hash, log_index, block_number, created_at
            FROM processed_logs
            WHERE block_number >= ?
            ORDER BY block_number ASC, log_index ASC
            "#;
        let logs = sqlx::query_as(query)
            .bind(from_block_number as i64)
            .fetch_all(self.client.pool())
            .await?;

        Ok(logs)
    }
}
