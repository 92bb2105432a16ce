use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, BlockNumber, TxHash};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use chain::rpc::NodeClient;
use eyre::{Result, eyre};

/// Outcome of a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub transaction_hash: TxHash,
    pub block_number: Option<BlockNumber>,
    pub success: bool,
}

impl From<&TransactionReceipt> for TxReceipt {
    fn from(receipt: &TransactionReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            success: receipt.status(),
        }
    }
}

/// Chain operations the transaction sequencer needs.
#[async_trait::async_trait]
pub trait TxChain: Send + Sync {
    async fn pending_nonce(&self, address: Address) -> Result<u64>;

    async fn max_priority_fee(&self) -> Result<u128>;

    /// Base fee of the latest block, `None` on pre-London chains.
    async fn latest_base_fee(&self) -> Result<Option<u128>>;

    /// Signs and broadcasts `tx`.
    async fn broadcast(&self, tx: TransactionRequest) -> Result<TxHash>;

    async fn receipt(&self, tx_hash: TxHash) -> Result<Option<TxReceipt>>;
}

#[async_trait::async_trait]
impl TxChain for NodeClient {
    async fn pending_nonce(&self, address: Address) -> Result<u64> {
        Ok(self.get_pending_nonce(address).await?)
    }

    async fn max_priority_fee(&self) -> Result<u128> {
        Ok(self.get_max_priority_fee_per_gas().await?)
    }

    async fn latest_base_fee(&self) -> Result<Option<u128>> {
        let block = self.get_latest_block().await?.ok_or_else(|| eyre!("Latest block not found"))?;
        Ok(block.header.base_fee_per_gas.map(u128::from))
    }

    async fn broadcast(&self, tx: TransactionRequest) -> Result<TxHash> {
        let tx = if tx.max_fee_per_gas.is_none() && tx.gas_price.is_none() {
            let gas_price = self.get_gas_price().await?;
            tx.with_gas_price(gas_price)
        } else {
            tx
        };
        Ok(self.send_transaction(tx).await?)
    }

    async fn receipt(&self, tx_hash: TxHash) -> Result<Option<TxReceipt>> {
        let receipt = self.get_transaction_receipt(tx_hash).await?;
        Ok(receipt.as_ref().map(TxReceipt::from))
    }
}
