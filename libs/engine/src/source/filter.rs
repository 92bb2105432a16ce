use alloy::primitives::{Address, B256, BlockNumber};

/// Logs of one event topic from one contract, over an inclusive block range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFilter {
    pub address: Address,
    pub topic: B256,
    pub from_block_number: BlockNumber,
    pub to_block_number: BlockNumber,
}
