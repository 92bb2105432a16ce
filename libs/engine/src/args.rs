use std::time::Duration;

use alloy::primitives::Address;

#[derive(Debug, Clone)]
pub struct PollerArgs {
    pub chain_id: u64,
    /// Task registry contract emitting `TaskCreated`.
    pub registry: Address,
    /// Blocks that must sit on top of a block before it is acted on.
    pub confirmations: u64,
    /// Already-checkpointed blocks re-scanned every tick.
    pub reorg_buffer: u64,
    pub poll_interval: Duration,
    pub rpc_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct RunnerArgs {
    pub chain_id: u64,
    pub registry: Address,
    pub rpc_timeout: Duration,
    pub tx_wait_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SequencerArgs {
    pub chain_id: u64,
    /// Address of the signing key; its pending nonce seeds the cursor.
    pub from: Address,
    pub receipt_poll_interval: Duration,
}
