use crate::args::RunnerArgs;
use crate::error::EngineError;
use crate::task::handle::TaskHandler;
use crate::task::state::TaskState;
use crate::tx::sequencer::TransactionSequencer;
use crate::utils::with_timeout;
use alloy::primitives::{B256, BlockNumber, TxHash};
use chain::registry::{TaskEvent, submit_result_calldata};
use compute::handle::ComputeService;
use compute::mode::Mode;
use compute::model::{ClaimTaskRequest, InputResponse, ResultPayload};
use eyre::{Result, WrapErr, eyre};
use std::sync::Arc;

/// A task that reached [`TaskState::Confirmed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    pub task_id: u64,
    pub state: TaskState,
    pub result_hash: B256,
    pub tx_hash: TxHash,
    pub block_number: Option<BlockNumber>,
}

/// Drives one `TaskCreated` event from claim to on-chain confirmation.
///
/// Nothing is resumed across attempts: a failure anywhere sends the next
/// attempt back to the claim, which the compute service accepts again.
pub struct TaskRunner {
    compute: Arc<dyn ComputeService>,
    sequencer: Arc<TransactionSequencer>,
    args: RunnerArgs,
}

impl TaskRunner {
    pub fn new(
        compute: Arc<dyn ComputeService>,
        sequencer: Arc<TransactionSequencer>,
        args: RunnerArgs,
    ) -> Self {
        Self { compute, sequencer, args }
    }

    pub async fn run_task(&self, event: &TaskEvent) -> Result<TaskOutcome> {
        let task_id =
            u64::try_from(event.task_id).map_err(|_| EngineError::TaskIdOverflow(event.task_id))?;

        self.run_states(task_id, event).await.wrap_err_with(|| format!("task {task_id} failed"))
    }

    async fn run_states(&self, task_id: u64, event: &TaskEvent) -> Result<TaskOutcome> {
        let request = self.claim_request(task_id, event);
        let claim = self.compute.claim_task(&request).await?;
        let state = self.transition(task_id, None, &claim.status)?;

        let input = self.compute.get_input(event.input_hash).await?;
        let state = self.transition(task_id, Some(state), &input.input_payload.mode)?;

        let payload = self.run_model(&input).await?;
        let state = self.transition(task_id, Some(state), &payload.timestamp)?;

        let result_hash = self.compute.submit_result(task_id, &payload).await?;
        if result_hash.is_zero() {
            return Err(EngineError::EmptyResultHash { task_id }.into());
        }
        let state = self.transition(task_id, Some(state), &result_hash.to_string())?;

        let mut outcome = self.confirm(task_id, event, result_hash).await?;
        outcome.state = self.transition(task_id, Some(state), &outcome.tx_hash.to_string())?;

        Ok(outcome)
    }

    async fn run_model(&self, input: &InputResponse) -> Result<ResultPayload> {
        let payload = &input.input_payload;
        let mode: Mode = payload.mode.parse()?;
        let translation =
            self.compute.run_model(mode, &payload.text, payload.include_grammar).await?;
        Ok(ResultPayload::from(translation))
    }

    async fn confirm(
        &self,
        task_id: u64,
        event: &TaskEvent,
        result_hash: B256,
    ) -> Result<TaskOutcome> {
        let calldata = submit_result_calldata(event.task_id, result_hash);

        let sent = with_timeout("submit result", self.args.rpc_timeout, async {
            let params = self.sequencer.prepare_send().await?;
            self.sequencer.send(params, self.args.registry, calldata).await
        })
        .await;
        let pending = match sent {
            Ok(pending) => pending,
            Err(e) => {
                // The assigned nonce may or may not have reached the node.
                self.sequencer.reset_nonce().await;
                return Err(e);
            }
        };
        tracing::info!(
            "Task {task_id} result submitted on-chain: tx={} nonce={} tip={:?} cap={:?}",
            pending.hash,
            pending.nonce,
            pending.fee_tip,
            pending.fee_cap
        );

        let receipt = self.sequencer.await_receipt(&pending, self.args.tx_wait_timeout).await?;

        Ok(TaskOutcome {
            task_id,
            state: TaskState::ResultSubmitted,
            result_hash,
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
        })
    }

    fn claim_request(&self, task_id: u64, event: &TaskEvent) -> ClaimTaskRequest {
        ClaimTaskRequest {
            task_id,
            input_hash: event.input_hash.to_string(),
            requester: event.requester.to_checksum(None),
            model: event.model_id.to_string(),
            fee: event.fee.to_string(),
            chain_id: self.args.chain_id,
            tx_hash: event.origin_tx_hash.to_string(),
            block_number: event.origin_block_number,
        }
    }

    /// Moves from `from` to its successor; `None` enters the first state.
    fn transition(
        &self,
        task_id: u64,
        from: Option<TaskState>,
        detail: &str,
    ) -> Result<TaskState> {
        let state = match from {
            None => TaskState::Claimed,
            Some(from) => {
                from.next().ok_or_else(|| eyre!("task {task_id} has no state after {from}"))?
            }
        };
        tracing::info!("Task {task_id} -> {state} ({detail})");
        Ok(state)
    }
}

#[async_trait::async_trait]
impl TaskHandler for TaskRunner {
    async fn handle_task(&self, event: &TaskEvent) -> Result<()> {
        let outcome = self.run_task(event).await?;
        tracing::info!(
            "Task {} confirmed in block {:?}: result={}",
            outcome.task_id,
            outcome.block_number,
            outcome.result_hash
        );
        Ok(())
    }
}
