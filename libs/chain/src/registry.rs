use alloy::primitives::{Address, B256, BlockNumber, Bytes, TxHash, U256};
use alloy::rpc::types::Log;
use alloy::sol;
use alloy::sol_types::{SolCall, SolEvent};
use eyre::{Result, eyre};
use std::fmt::{Display, Formatter};

sol! {
    #[derive(Debug, PartialEq, Eq)]
    event TaskCreated(
        uint256 indexed taskId,
        address indexed requester,
        bytes32 inputHash,
        bytes32 model,
        uint256 fee
    );

    #[derive(Debug, PartialEq, Eq)]
    function submitResult(uint256 taskId, bytes32 resultHash);
}

/// Topic0 of the `TaskCreated` event, used to filter registry logs.
pub fn task_created_topic() -> B256 {
    TaskCreated::SIGNATURE_HASH
}

/// ABI-encoded calldata for `submitResult(taskId, resultHash)`.
pub fn submit_result_calldata(task_id: U256, result_hash: B256) -> Bytes {
    submitResultCall { taskId: task_id, resultHash: result_hash }.abi_encode().into()
}

/// A decoded `TaskCreated` occurrence, tagged with where it happened on-chain.
///
/// Built once from a mined log and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEvent {
    pub task_id: U256,
    pub requester: Address,
    pub input_hash: B256,
    pub model_id: B256,
    pub fee: U256,
    pub origin_tx_hash: TxHash,
    pub origin_log_index: u64,
    pub origin_block_number: BlockNumber,
}

impl Display for TaskEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "task {} (block={}, tx={}, log_index={})",
            self.task_id, self.origin_block_number, self.origin_tx_hash, self.origin_log_index
        )
    }
}

impl TryFrom<&Log> for TaskEvent {
    type Error = eyre::Report;

    fn try_from(log: &Log) -> Result<Self> {
        let origin_tx_hash =
            log.transaction_hash.ok_or_else(|| eyre!("missing transaction_hash"))?;
        let origin_log_index = log.log_index.ok_or_else(|| {
            eyre!("missing log_index for log in tx={origin_tx_hash}")
        })?;
        let origin_block_number = log.block_number.ok_or_else(|| {
            eyre!("missing block_number for log tx={origin_tx_hash} log_index={origin_log_index}")
        })?;

        let decoded = log.log_decode::<TaskCreated>().map_err(|e| {
            eyre!(
                "failed to decode TaskCreated at tx={origin_tx_hash} log_index={origin_log_index}: {e}"
            )
        })?;
        let event = decoded.inner.data;

        Ok(Self {
            task_id: event.taskId,
            requester: event.requester,
            input_hash: event.inputHash,
            model_id: event.model,
            fee: event.fee,
            origin_tx_hash,
            origin_log_index,
            origin_block_number,
        })
    }
}
