use serde::{Serialize, ser::SerializeStruct};
use store::{checkpoint::model::Checkpoint, processed::model::ProcessedLog, utils};

// Tuple wrapper for Checkpoint
pub struct CheckpointResponse(pub Checkpoint);

impl Serialize for CheckpointResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let c = &self.0;
        let mut state = serializer.serialize_struct("Checkpoint", 2)?;
        state.serialize_field("last_block", &c.last_block)?;
        state.serialize_field("updated_at", &c.updated_at)?;
        state.end()
    }
}

// Tuple wrapper for ProcessedLog
pub struct ProcessedLogResponse(pub ProcessedLog);

impl Serialize for ProcessedLogResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let p = &self.0;
        let mut state = serializer.serialize_struct("ProcessedLog", 5)?;
        state.serialize_field("chain_id", &p.chain_id)?;
        state.serialize_field("transaction_hash", &utils::bytes_to_hex(&p.transaction_hash))?;
        state.serialize_field("log_index", &p.log_index)?;
        state.serialize_field("block_number", &p.block_number)?;
        state.serialize_field("created_at", &p.created_at)?;
        state.end()
    }
}
