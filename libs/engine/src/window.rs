use alloy::primitives::BlockNumber;
use std::fmt::{Display, Formatter};

/// Inclusive block range eligible for one poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWindow {
    pub start: BlockNumber,
    pub safe_end: BlockNumber,
}

impl Display for BlockWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.safe_end)
    }
}

/// Highest block with at least `confirmations` blocks built on top of it.
///
/// `None` while the chain is not taller than `confirmations`.
pub fn safe_end(head: BlockNumber, confirmations: u64) -> Option<BlockNumber> {
    (head > confirmations).then(|| head - confirmations)
}

/// First block to scan: the checkpoint minus the reorg buffer, floored at genesis.
pub fn scan_start(checkpoint: Option<BlockNumber>, reorg_buffer: u64) -> BlockNumber {
    checkpoint.map_or(0, |checkpoint| checkpoint.saturating_sub(reorg_buffer))
}
