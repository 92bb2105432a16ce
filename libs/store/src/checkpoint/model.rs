use sqlx::FromRow;

/// The single durable cursor: every block up to `last_block` has been fully handled.
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct Checkpoint {
    pub last_block: i64,
    pub updated_at: String,
}
