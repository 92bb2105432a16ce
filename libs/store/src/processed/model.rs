use alloy::primitives::TxHash;
use sqlx::FromRow;

/// Identity of one on-chain event occurrence.
///
/// Two logs emitted by the same transaction differ by `log_index` and are
/// distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessedLogKey {
    pub chain_id: u64,
    pub transaction_hash: TxHash,
    pub log_index: u64,
}

#[derive(Clone, FromRow, PartialEq)]
pub struct ProcessedLog {
    pub chain_id: i64,
    pub transaction_hash: Vec<u8>,
    pub log_index: i64,
    pub block_number: i64,
    pub created_at: String,
}
