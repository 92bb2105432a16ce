use crate::args::SequencerArgs;
use crate::error::EngineError;
use crate::tx::chain::{TxChain, TxReceipt};
use crate::tx::fees::FeeParams;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::rpc::types::TransactionRequest;
use eyre::{Result, WrapErr};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Nonce and fee fields assigned to one outgoing transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningParams {
    pub nonce: u64,
    pub chain_id: u64,
    pub fees: FeeParams,
}

/// A broadcast transaction whose receipt has not been observed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransaction {
    pub nonce: u64,
    pub fee_tip: Option<u128>,
    pub fee_cap: Option<u128>,
    pub hash: TxHash,
}

/// Sole owner of one signing identity's nonce sequence.
///
/// The cursor starts empty, is seeded from the chain's pending nonce on first
/// use and then increments locally. Only one sequencer may drive a given key:
/// a second holder would hand out the same nonces.
pub struct TransactionSequencer {
    chain: Arc<dyn TxChain>,
    args: SequencerArgs,
    next_nonce: Mutex<Option<u64>>,
}

impl TransactionSequencer {
    pub fn new(chain: Arc<dyn TxChain>, args: SequencerArgs) -> Self {
        Self { chain, args, next_nonce: Mutex::new(None) }
    }

    /// Assigns the next nonce and the current fee parameters.
    pub async fn prepare_send(&self) -> Result<SigningParams> {
        let nonce = self.assign_nonce().await?;
        let fees = self.suggest_fees().await;
        Ok(SigningParams { nonce, chain_id: self.args.chain_id, fees })
    }

    /// Broadcasts a call to `to` with the given params.
    ///
    /// A failed broadcast leaves its nonce unused, so the cursor is dropped
    /// and re-read from the chain on next use.
    pub async fn send(
        &self,
        params: SigningParams,
        to: Address,
        input: Bytes,
    ) -> Result<PendingTransaction> {
        let mut tx = TransactionRequest::default()
            .with_from(self.args.from)
            .with_to(to)
            .with_input(input)
            .with_nonce(params.nonce)
            .with_chain_id(params.chain_id);
        if let (Some(tip), Some(cap)) = (params.fees.tip, params.fees.cap) {
            tx = tx.with_max_priority_fee_per_gas(tip).with_max_fee_per_gas(cap);
        }

        match self.chain.broadcast(tx).await {
            Ok(hash) => {
                tracing::info!("Broadcast tx={hash} nonce={}", params.nonce);
                Ok(PendingTransaction {
                    nonce: params.nonce,
                    fee_tip: params.fees.tip,
                    fee_cap: params.fees.cap,
                    hash,
                })
            }
            Err(e) => {
                tracing::error!("Broadcast failed for nonce {}: {e:?}", params.nonce);
                self.reset_nonce().await;
                Err(e.wrap_err(format!("broadcast failed for nonce {}", params.nonce)))
            }
        }
    }

    /// Polls for the receipt until `timeout` elapses.
    ///
    /// A mined receipt with failed status is [`EngineError::Reverted`].
    pub async fn await_receipt(
        &self,
        pending: &PendingTransaction,
        timeout: Duration,
    ) -> Result<TxReceipt> {
        let tx_hash = pending.hash;
        let receipt = match tokio::time::timeout(timeout, self.poll_receipt(tx_hash)).await {
            Ok(receipt) => receipt,
            Err(_) => return Err(EngineError::ReceiptTimeout { tx_hash, timeout }.into()),
        };

        if !receipt.success {
            tracing::error!("Transaction reverted: tx={tx_hash}");
            return Err(EngineError::Reverted { tx_hash }.into());
        }

        tracing::info!("Transaction confirmed: tx={tx_hash} block={:?}", receipt.block_number);
        Ok(receipt)
    }

    /// Forgets the cursor so the next send re-reads the pending nonce.
    pub async fn reset_nonce(&self) {
        let mut cursor = self.next_nonce.lock().await;
        if cursor.take().is_some() {
            tracing::warn!("Nonce cursor reset for {}", self.args.from);
        }
    }

    async fn assign_nonce(&self) -> Result<u64> {
        let mut cursor = self.next_nonce.lock().await;
        let nonce = match *cursor {
            Some(nonce) => nonce,
            None => {
                let nonce = self
                    .chain
                    .pending_nonce(self.args.from)
                    .await
                    .wrap_err_with(|| format!("failed to read pending nonce of {}", self.args.from))?;
                tracing::info!("Nonce cursor initialised at {nonce} for {}", self.args.from);
                nonce
            }
        };
        *cursor = Some(nonce + 1);
        Ok(nonce)
    }

    async fn suggest_fees(&self) -> FeeParams {
        let priority_fee = match self.chain.max_priority_fee().await {
            Ok(priority_fee) => priority_fee,
            Err(e) => {
                tracing::warn!("Priority fee unavailable, using legacy pricing: {e:?}");
                return FeeParams::legacy();
            }
        };
        let base_fee = match self.chain.latest_base_fee().await {
            Ok(base_fee) => base_fee,
            Err(e) => {
                tracing::warn!("Base fee unavailable, using legacy pricing: {e:?}");
                None
            }
        };
        let fees = FeeParams::from_market(priority_fee, base_fee);
        tracing::debug!("Fees: {fees:?}");
        fees
    }

    async fn poll_receipt(&self, tx_hash: TxHash) -> TxReceipt {
        loop {
            match self.chain.receipt(tx_hash).await {
                Ok(Some(receipt)) => return receipt,
                Ok(None) => {}
                Err(e) => tracing::warn!("Receipt query failed for tx={tx_hash}, retrying: {e:?}"),
            }
            tokio::time::sleep(self.args.receipt_poll_interval).await;
        }
    }
}
