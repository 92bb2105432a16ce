use crate::checkpoint::model::Checkpoint;
use crate::client::Client;
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
    // CHECKPOINT
    // ---------------------------

    /// Upserts the single checkpoint row, never moving it backwards.
    pub async fn save_checkpoint(&self, block_number: BlockNumber) -> Result<(), Error> {
        let query = r#"
            INSERT INTO checkpoints (id, last_block)
            VALUES (1, ?)
            ON CONFLICT(id) DO UPDATE SET
                last_block = MAX(last_block, excluded.last_block),
                updated_at = CURRENT_TIMESTAMP
            "#;
        sqlx::query(query).bind(block_number as i64).execute(self.client.pool()).await?;
        Ok(())
    }

    pub async fn get_checkpoint(&self) -> Result<Option<Checkpoint>, Error> {
        let query = r#"
            SELECT last_block, updated_at
            FROM checkpoints
            WHERE id = 1
            "#;
        let checkpoint = sqlx::query_as(query).fetch_optional(self.client.pool()).await?;

        Ok(checkpoint)
    }
}
