use alloy::primitives::B256;

use crate::error::ComputeError;
use crate::mode::Mode;
use crate::model::{ClaimTaskRequest, ClaimTaskResponse, InputResponse, ResultPayload, TranslationResponse};

/// The compute-service operations the task pipeline depends on.
///
/// `claim_task` must be safe to repeat for the same task id: a task that
/// failed before on-chain confirmation is claimed again on the next attempt.
#[async_trait::async_trait]
pub trait ComputeService: Send + Sync {
    async fn claim_task(&self, request: &ClaimTaskRequest) -> Result<ClaimTaskResponse, ComputeError>;

    async fn get_input(&self, input_hash: B256) -> Result<InputResponse, ComputeError>;

    async fn run_model(
        &self,
        mode: Mode,
        text: &str,
        include_grammar: bool,
    ) -> Result<TranslationResponse, ComputeError>;

    /// Stores the result and returns its canonical digest.
    async fn submit_result(&self, task_id: u64, payload: &ResultPayload) -> Result<B256, ComputeError>;
}
