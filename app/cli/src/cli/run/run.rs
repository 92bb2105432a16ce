use crate::cli::run::args::Args;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use chain::rpc::NodeClient;
use compute::client::ComputeClient;
use engine::args::{PollerArgs, RunnerArgs, SequencerArgs};
use engine::ledger::StoreLedger;
use engine::poller::Poller;
use engine::source::log::LogSource;
use engine::task::runner::TaskRunner;
use engine::tx::sequencer::TransactionSequencer;
use engine::utils::with_timeout;
use eyre::{Result, WrapErr, eyre};
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use store::client::Client;

pub async fn start(args: &Args) -> Result<()> {
    let signer = PrivateKeySigner::from_str(&args.signer_pk)
        .map_err(|_| eyre!("Invalid operator private key"))?;
    let rpc_url = Url::parse(&args.rpc_url).wrap_err("Invalid rpc url")?;
    let registry = Address::from_str(&args.registry_address)
        .wrap_err_with(|| format!("Invalid registry address {}", args.registry_address))?;
    let rpc_timeout = Duration::from_millis(args.rpc_timeout);

    let node_client = NodeClient::new(rpc_url, signer);
    let operator = node_client.signer_address();

    let chain_id = with_timeout("chain id", rpc_timeout, async {
        Ok(node_client.get_chain_id().await?)
    })
    .await?;
    if chain_id != args.chain_id {
        return Err(eyre!(
            "Chain id mismatch: configured {} but node reports {chain_id}",
            args.chain_id
        ));
    }

    let client = Client::init(&args.db_url).await?;
    let ledger = Arc::new(StoreLedger::new(client));

    let compute = ComputeClient::new(
        &args.compute_url,
        args.compute_api_key.clone(),
        Duration::from_millis(args.request_timeout),
    )?;
    if let Err(e) = compute.health().await {
        tracing::warn!("Compute service at {} is not healthy yet: {e}", compute.base_url());
    }

    let sequencer = Arc::new(TransactionSequencer::new(
        Arc::new(node_client.clone()),
        SequencerArgs {
            chain_id,
            from: operator,
            receipt_poll_interval: Duration::from_millis(args.receipt_poll_interval),
        },
    ));
    let runner = TaskRunner::new(
        Arc::new(compute),
        sequencer,
        RunnerArgs {
            chain_id,
            registry,
            rpc_timeout,
            tx_wait_timeout: Duration::from_millis(args.tx_wait_timeout),
        },
    );

    let poller_args = PollerArgs {
        chain_id,
        registry,
        confirmations: args.confirmations,
        reorg_buffer: args.reorg_buffer,
        poll_interval: Duration::from_millis(args.poll_interval),
        rpc_timeout,
    };
    tracing::info!("Starting the orchestrator operator={operator} {poller_args:?}");
    let poller = Poller::new(poller_args, Arc::new(LogSource { node_client }), ledger);

    let shutdown = shutdown_signal()?;
    poller.run_until(&runner, shutdown).await?;
    tracing::info!("Orchestrator stopped");

    Ok(())
}

/// Installs the SIGTERM handler and returns a future resolving on SIGINT or
/// SIGTERM. Handler installation failures surface here, before polling starts.
#[cfg(unix)]
fn shutdown_signal() -> Result<impl Future<Output = Result<()>>> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate =
        signal(SignalKind::terminate()).wrap_err("Failed to install SIGTERM handler")?;
    Ok(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => result.wrap_err("Failed to listen for SIGINT")?,
            _ = terminate.recv() => {}
        }
        Ok(())
    })
}

#[cfg(not(unix))]
fn shutdown_signal() -> Result<impl Future<Output = Result<()>>> {
    Ok(async { tokio::signal::ctrl_c().await.wrap_err("Failed to listen for SIGINT") })
}
