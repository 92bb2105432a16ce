use std::fmt::{Debug, Display, Formatter, Result};

use crate::processed::model::{ProcessedLog, ProcessedLogKey};
use crate::utils;

impl Display for ProcessedLogKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "chain_id={} tx_hash={} log_index={}",
            self.chain_id, self.transaction_hash, self.log_index
        )
    }
}

impl Debug for ProcessedLog {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("ProcessedLog")
            .field("chain_id", &self.chain_id)
            .field("transaction_hash", &utils::bytes_to_hex(&self.transaction_hash))
            .field("log_index", &self.log_index)
            .field("block_number", &self.block_number)
            .field("created_at", &self.created_at)
            .finish()
    }
}
