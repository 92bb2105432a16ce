use alloy::eips::BlockNumberOrTag;
use alloy::network::EthereumWallet;
use alloy::primitives::{Address, B256, BlockNumber, TxHash};
use alloy::providers::Identity;
use alloy::providers::RootProvider;
use alloy::providers::fillers::{
    BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller,
};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::rpc::types::{Block, Filter, Log, TransactionReceipt, TransactionRequest};
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::RpcError;
use alloy::transports::TransportErrorKind;
use alloy::transports::http::reqwest::Url;

type NodeClientProvider = FillProvider<
    JoinFill<
        JoinFill<
            Identity,
            JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
        >,
        WalletFiller<EthereumWallet>,
    >,
    RootProvider,
>;

/// Thin wrapper over an alloy provider holding the operator wallet.
///
/// Every transaction sent through it is signed by the wallet's default signer.
#[derive(Clone)]
pub struct NodeClient {
    provider: NodeClientProvider,
    signer_address: Address,
}

impl NodeClient {
    pub fn new(rpc_url: Url, signer: PrivateKeySigner) -> Self {
        let signer_address = signer.address();
        let rpc_client = RpcClient::new_http(rpc_url);
        let provider = ProviderBuilder::new().wallet(signer).connect_client(rpc_client);
        Self { provider, signer_address }
    }

    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    pub async fn get_chain_id(&self) -> Result<u64, RpcError<TransportErrorKind>> {
        self.provider.get_chain_id().await
    }

    pub async fn get_latest_block_number(&self) -> Result<BlockNumber, RpcError<TransportErrorKind>> {
        self.provider.get_block_number().await
    }

    pub async fn get_latest_block(&self) -> Result<Option<Block>, RpcError<TransportErrorKind>> {
        self.provider.get_block_by_number(BlockNumberOrTag::Latest).await
    }

    pub async fn get_logs(
        &self,
        address: Address,
        topic: B256,
        from_block: BlockNumberOrTag,
        to_block: BlockNumberOrTag,
    ) -> Result<Vec<Log>, RpcError<TransportErrorKind>> {
        let filter = Filter::new()
            .address(address)
            .event_signature(topic)
            .from_block(from_block)
            .to_block(to_block);

        self.provider.get_logs(&filter).await
    }

    pub async fn get_pending_nonce(
        &self,
        address: Address,
    ) -> Result<u64, RpcError<TransportErrorKind>> {
        self.provider.get_transaction_count(address).pending().await
    }

    pub async fn get_max_priority_fee_per_gas(&self) -> Result<u128, RpcError<TransportErrorKind>> {
        self.provider.get_max_priority_fee_per_gas().await
    }

    pub async fn get_gas_price(&self) -> Result<u128, RpcError<TransportErrorKind>> {
        self.provider.get_gas_price().await
    }

    /// Signs and broadcasts `tx`, returning as soon as the node accepted it.
    pub async fn send_transaction(
        &self,
        tx: TransactionRequest,
    ) -> Result<TxHash, RpcError<TransportErrorKind>> {
        let pending = self.provider.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }

    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<TransactionReceipt>, RpcError<TransportErrorKind>> {
        self.provider.get_transaction_receipt(tx_hash).await
    }
}
