#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use alloy::primitives::{Address, B256, BlockNumber, TxHash, U256};
use alloy::rpc::types::{Log, TransactionRequest};
use alloy::sol_types::SolEvent;
use chain::registry::{TaskCreated, TaskEvent};
use chrono::{TimeZone, Utc};
use compute::error::ComputeError;
use compute::handle::ComputeService;
use compute::mode::Mode;
use compute::model::{
    ClaimTaskRequest, ClaimTaskResponse, InputPayload, InputResponse, ResultPayload,
    TranslationResponse,
};
use engine::args::{PollerArgs, RunnerArgs, SequencerArgs};
use engine::ledger::StoreLedger;
use engine::source::filter::ChunkFilter;
use engine::source::handle::EventSource;
use engine::task::handle::TaskHandler;
use engine::tx::chain::{TxChain, TxReceipt};
use engine::tx::sequencer::TransactionSequencer;
use eyre::{Result, eyre};
use store::client::Client;

pub const CHAIN_ID: u64 = 31337;
pub const REGISTRY: Address = Address::repeat_byte(0x42);
pub const OPERATOR: Address = Address::repeat_byte(0x0F);

// ---------------------------
// LOGS
// ---------------------------

pub fn tx_hash(n: u64) -> TxHash {
    TxHash::from(U256::from(n).to_be_bytes::<32>())
}

/// A mined `TaskCreated` log from the registry.
pub fn task_log(task_id: u64, block: BlockNumber, log_index: u64) -> Log {
    task_log_with_id(U256::from(task_id), block, log_index)
}

pub fn task_log_with_id(task_id: U256, block: BlockNumber, log_index: u64) -> Log {
    task_log_in_tx(task_id, block, log_index, tx_hash(block * 1_000 + log_index))
}

/// A mined `TaskCreated` log emitted by transaction `tx`.
pub fn task_log_in_tx(task_id: U256, block: BlockNumber, log_index: u64, tx: TxHash) -> Log {
    let event = TaskCreated {
        taskId: task_id,
        requester: Address::repeat_byte(0x11),
        inputHash: B256::repeat_byte(0x22),
        model: B256::repeat_byte(0x33),
        fee: U256::from(5_000u64),
    };
    Log {
        inner: alloy::primitives::Log { address: REGISTRY, data: event.encode_log_data() },
        block_number: Some(block),
        transaction_hash: Some(tx),
        log_index: Some(log_index),
        ..Default::default()
    }
}

pub fn task_event(task_id: u64, block: BlockNumber, log_index: u64) -> TaskEvent {
    TaskEvent::try_from(&task_log(task_id, block, log_index)).expect("valid log")
}

pub fn task_ids(events: &[TaskEvent]) -> Vec<u64> {
    events.iter().map(|event| event.task_id.to::<u64>()).collect()
}

// ---------------------------
// EVENT SOURCE
// ---------------------------

#[derive(Default)]
pub struct FakeSource {
    pub head: AtomicU64,
    pub logs: Mutex<Vec<Log>>,
    pub filters: Mutex<Vec<ChunkFilter>>,
    /// Delay applied to every head query.
    pub head_delay: Mutex<Option<Duration>>,
}

impl FakeSource {
    pub fn new(head: BlockNumber, logs: Vec<Log>) -> Self {
        Self { head: AtomicU64::new(head), logs: Mutex::new(logs), ..Default::default() }
    }

    pub fn set_head(&self, head: BlockNumber) {
        self.head.store(head, Ordering::SeqCst);
    }

    pub fn push_log(&self, log: Log) {
        self.logs.lock().unwrap().push(log);
    }

    pub fn filters(&self) -> Vec<ChunkFilter> {
        self.filters.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EventSource for FakeSource {
    async fn head_number(&self) -> Result<BlockNumber> {
        let delay = *self.head_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.head.load(Ordering::SeqCst))
    }

    async fn filter_logs(&self, filter: ChunkFilter) -> Result<Vec<Log>> {
        self.filters.lock().unwrap().push(filter.clone());
        let logs = self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|log| {
                let block = log.block_number.unwrap_or_default();
                block >= filter.from_block_number && block <= filter.to_block_number
            })
            .cloned()
            .collect();
        Ok(logs)
    }
}

// ---------------------------
// HANDLER
// ---------------------------

#[derive(Default)]
pub struct RecordingHandler {
    pub handled: Mutex<Vec<TaskEvent>>,
    pub failing: Mutex<HashSet<u64>>,
}

impl RecordingHandler {
    pub fn fail_on(&self, task_id: u64) {
        self.failing.lock().unwrap().insert(task_id);
    }

    pub fn heal(&self) {
        self.failing.lock().unwrap().clear();
    }

    pub fn handled(&self) -> Vec<TaskEvent> {
        self.handled.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TaskHandler for RecordingHandler {
    async fn handle_task(&self, event: &TaskEvent) -> Result<()> {
        let task_id = event.task_id.to::<u64>();
        if self.failing.lock().unwrap().contains(&task_id) {
            return Err(eyre!("handler refused task {task_id}"));
        }
        self.handled.lock().unwrap().push(event.clone());
        Ok(())
    }
}

// ---------------------------
// TX CHAIN
// ---------------------------

pub struct FakeChain {
    pub pending_nonce: AtomicU64,
    pub nonce_queries: AtomicUsize,
    /// `None` makes the priority fee query fail.
    pub priority_fee: Mutex<Option<u128>>,
    pub base_fee: Mutex<Option<u128>>,
    pub fail_base_fee: AtomicBool,
    pub fail_broadcast: AtomicBool,
    pub broadcasts: Mutex<Vec<TransactionRequest>>,
    /// Receipt status once mined; `None` never mines.
    pub receipt_status: Mutex<Option<bool>>,
    /// Receipt queries failing before the receipt is served.
    pub receipt_errors: AtomicUsize,
    pub receipt_queries: AtomicUsize,
}

impl Default for FakeChain {
    fn default() -> Self {
        Self {
            pending_nonce: AtomicU64::new(0),
            nonce_queries: AtomicUsize::new(0),
            priority_fee: Mutex::new(Some(2)),
            base_fee: Mutex::new(Some(10)),
            fail_base_fee: AtomicBool::new(false),
            fail_broadcast: AtomicBool::new(false),
            broadcasts: Mutex::new(Vec::new()),
            receipt_status: Mutex::new(Some(true)),
            receipt_errors: AtomicUsize::new(0),
            receipt_queries: AtomicUsize::new(0),
        }
    }
}

impl FakeChain {
    pub fn with_pending_nonce(nonce: u64) -> Self {
        Self { pending_nonce: AtomicU64::new(nonce), ..Default::default() }
    }

    pub fn broadcasts(&self) -> Vec<TransactionRequest> {
        self.broadcasts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TxChain for FakeChain {
    async fn pending_nonce(&self, address: Address) -> Result<u64> {
        assert_eq!(address, OPERATOR);
        self.nonce_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.pending_nonce.load(Ordering::SeqCst))
    }

    async fn max_priority_fee(&self) -> Result<u128> {
        let priority_fee = *self.priority_fee.lock().unwrap();
        priority_fee.ok_or_else(|| eyre!("eth_maxPriorityFeePerGas unsupported"))
    }

    async fn latest_base_fee(&self) -> Result<Option<u128>> {
        if self.fail_base_fee.load(Ordering::SeqCst) {
            return Err(eyre!("latest block unavailable"));
        }
        Ok(*self.base_fee.lock().unwrap())
    }

    async fn broadcast(&self, tx: TransactionRequest) -> Result<TxHash> {
        if self.fail_broadcast.load(Ordering::SeqCst) {
            return Err(eyre!("nonce too low"));
        }
        let nonce = tx.nonce.unwrap_or_default();
        self.broadcasts.lock().unwrap().push(tx);
        Ok(tx_hash(0xF000 + nonce))
    }

    async fn receipt(&self, tx_hash: TxHash) -> Result<Option<TxReceipt>> {
        self.receipt_queries.fetch_add(1, Ordering::SeqCst);
        let remaining = self.receipt_errors.load(Ordering::SeqCst);
        if remaining > 0 {
            self.receipt_errors.store(remaining - 1, Ordering::SeqCst);
            return Err(eyre!("connection reset"));
        }
        let status = *self.receipt_status.lock().unwrap();
        Ok(status.map(|success| TxReceipt {
            transaction_hash: tx_hash,
            block_number: Some(120),
            success,
        }))
    }
}

// ---------------------------
// COMPUTE SERVICE
// ---------------------------

pub struct FakeCompute {
    pub mode: Mutex<String>,
    pub result_hash: Mutex<B256>,
    /// Input fetches failing before the input is served.
    pub input_failures: AtomicUsize,
    pub claims: Mutex<Vec<ClaimTaskRequest>>,
    pub runs: Mutex<Vec<(Mode, String, bool)>>,
    pub results: Mutex<Vec<(u64, ResultPayload)>>,
}

impl Default for FakeCompute {
    fn default() -> Self {
        Self {
            mode: Mutex::new("translate-zh".to_string()),
            result_hash: Mutex::new(B256::repeat_byte(0xAB)),
            input_failures: AtomicUsize::new(0),
            claims: Mutex::new(Vec::new()),
            runs: Mutex::new(Vec::new()),
            results: Mutex::new(Vec::new()),
        }
    }
}

impl FakeCompute {
    pub fn claims(&self) -> Vec<ClaimTaskRequest> {
        self.claims.lock().unwrap().clone()
    }

    pub fn results(&self) -> Vec<(u64, ResultPayload)> {
        self.results.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ComputeService for FakeCompute {
    async fn claim_task(&self, request: &ClaimTaskRequest) -> Result<ClaimTaskResponse, ComputeError> {
        self.claims.lock().unwrap().push(request.clone());
        Ok(ClaimTaskResponse {
            task_id: request.task_id,
            status: "claimed".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        })
    }

    async fn get_input(&self, input_hash: B256) -> Result<InputResponse, ComputeError> {
        let remaining = self.input_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.input_failures.store(remaining - 1, Ordering::SeqCst);
            return Err(ComputeError::Api {
                status: 503,
                code: None,
                message: "503 Service Unavailable".to_string(),
            });
        }
        Ok(InputResponse {
            input_hash: input_hash.to_string(),
            input_payload: InputPayload {
                text: "你好".to_string(),
                mode: self.mode.lock().unwrap().clone(),
                include_grammar: true,
            },
            prepared_at: "2025-01-01T00:00:00Z".to_string(),
        })
    }

    async fn run_model(
        &self,
        mode: Mode,
        text: &str,
        include_grammar: bool,
    ) -> Result<TranslationResponse, ComputeError> {
        self.runs.lock().unwrap().push((mode, text.to_string(), include_grammar));
        Ok(TranslationResponse {
            original_text: text.to_string(),
            translated_text: "hello".to_string(),
            english_grammar: None,
            japanese_text: None,
            hiragana_pronunciation: None,
            japanese_grammar: None,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap(),
        })
    }

    async fn submit_result(&self, task_id: u64, payload: &ResultPayload) -> Result<B256, ComputeError> {
        self.results.lock().unwrap().push((task_id, payload.clone()));
        Ok(*self.result_hash.lock().unwrap())
    }
}

// ---------------------------
// WIRING
// ---------------------------

pub fn poller_args() -> PollerArgs {
    PollerArgs {
        chain_id: CHAIN_ID,
        registry: REGISTRY,
        confirmations: 2,
        reorg_buffer: 4,
        poll_interval: Duration::from_millis(20),
        rpc_timeout: Duration::from_secs(2),
    }
}

pub fn runner_args() -> RunnerArgs {
    RunnerArgs {
        chain_id: CHAIN_ID,
        registry: REGISTRY,
        rpc_timeout: Duration::from_secs(2),
        tx_wait_timeout: Duration::from_millis(300),
    }
}

pub fn sequencer_args() -> SequencerArgs {
    SequencerArgs {
        chain_id: CHAIN_ID,
        from: OPERATOR,
        receipt_poll_interval: Duration::from_millis(10),
    }
}

pub fn sequencer(chain: Arc<FakeChain>) -> Arc<TransactionSequencer> {
    Arc::new(TransactionSequencer::new(chain, sequencer_args()))
}

pub async fn memory_ledger() -> Result<Arc<StoreLedger>> {
    let client = Client::init("sqlite::memory:").await?;
    Ok(Arc::new(StoreLedger::new(client)))
}
