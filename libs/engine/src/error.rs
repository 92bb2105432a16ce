use std::time::Duration;

use alloy::primitives::{TxHash, U256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("task id too large for the compute service: {0}")]
    TaskIdOverflow(U256),

    #[error("empty result hash from compute service for task {task_id}")]
    EmptyResultHash { task_id: u64 },

    #[error("transaction reverted: tx={tx_hash}")]
    Reverted { tx_hash: TxHash },

    #[error("no receipt for tx={tx_hash} within {timeout:?}")]
    ReceiptTimeout { tx_hash: TxHash, timeout: Duration },

    #[error("{operation} timed out after {timeout:?}")]
    Timeout { operation: &'static str, timeout: Duration },
}
