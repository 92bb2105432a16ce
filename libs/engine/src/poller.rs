use crate::args::PollerArgs;
use crate::ledger::Ledger;
use crate::source::filter::ChunkFilter;
use crate::source::handle::EventSource;
use crate::task::handle::TaskHandler;
use crate::utils::with_timeout;
use crate::window::{self, BlockWindow};
use alloy::primitives::BlockNumber;
use chain::registry::{TaskEvent, task_created_topic};
use eyre::{Result, WrapErr};
use std::future::Future;
use std::sync::Arc;
use store::processed::model::ProcessedLogKey;
use sync::ticker::Ticker;
use tokio::sync::broadcast;

/// What a single [`Poller::advance`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Head not taller than the confirmation depth.
    ChainTooYoung { head: BlockNumber },
    /// Scan start already past the safe end.
    UpToDate { start: BlockNumber, safe_end: BlockNumber },
    Advanced { window: BlockWindow, dispatched: usize, skipped: usize },
}

/// Checkpointed, reorg-tolerant poller over `TaskCreated` logs.
pub struct Poller {
    args: PollerArgs,
    source: Arc<dyn EventSource>,
    ledger: Arc<dyn Ledger>,
}

impl Poller {
    pub fn new(args: PollerArgs, source: Arc<dyn EventSource>, ledger: Arc<dyn Ledger>) -> Self {
        Self { args, source, ledger }
    }

    /// Runs [`Poller::advance`] every `poll_interval` until shutdown.
    ///
    /// The first failed tick ends the loop with its error; the checkpoint
    /// and ledger keep whatever the failed tick had persisted so far.
    pub async fn run(
        &self,
        handler: &dyn TaskHandler,
        shutdown_tx: &broadcast::Sender<()>,
    ) -> Result<()> {
        let mut ticker = Ticker::new(self.args.poll_interval, shutdown_tx);
        let completed =
            ticker.run(move || async move { self.advance(handler).await.map(|_| ()) }).await?;
        tracing::info!("Poller stopped after {completed} ticks");
        Ok(())
    }

    /// Runs until `shutdown` resolves, then stops the loop through its
    /// shutdown channel.
    ///
    /// A `shutdown` future failing (no signal could be awaited) is returned
    /// as an error without stopping the loop first.
    pub async fn run_until<S>(&self, handler: &dyn TaskHandler, shutdown: S) -> Result<()>
    where
        S: Future<Output = Result<()>>,
    {
        let (shutdown_tx, _) = broadcast::channel(1);
        let run = self.run(handler, &shutdown_tx);
        tokio::pin!(run);

        tokio::select! {
            // `run` must subscribe to the channel before shutdown can be sent.
            biased;
            result = &mut run => return result,
            signal = shutdown => signal.wrap_err("failed to await shutdown signal")?,
        }

        tracing::info!("Shutdown requested, stopping poller");
        let _ = shutdown_tx.send(());
        run.await
    }

    /// One poll cycle: fetch the safe window, dispatch unseen events in chain
    /// order, then move the checkpoint to the window's end.
    pub async fn advance(&self, handler: &dyn TaskHandler) -> Result<Tick> {
        let head = with_timeout("head number", self.args.rpc_timeout, self.source.head_number())
            .await
            .wrap_err("failed to fetch chain head")?;

        let Some(safe_end) = window::safe_end(head, self.args.confirmations) else {
            tracing::debug!("Chain too young: head={head} confirmations={}", self.args.confirmations);
            return Ok(Tick::ChainTooYoung { head });
        };

        let checkpoint = self.ledger.get_checkpoint().await?;
        let start = window::scan_start(checkpoint, self.args.reorg_buffer);
        if start > safe_end {
            tracing::debug!("Up to date: start={start} safe_end={safe_end}");
            return Ok(Tick::UpToDate { start, safe_end });
        }
        let window = BlockWindow { start, safe_end };

        let filter = ChunkFilter {
            address: self.args.registry,
            topic: task_created_topic(),
            from_block_number: window.start,
            to_block_number: window.safe_end,
        };
        let logs = self.source.filter_logs(filter);
        let logs = with_timeout("log filter", self.args.rpc_timeout, logs)
            .await
            .wrap_err_with(|| format!("failed to fetch logs in {window}"))?;

        let mut events = logs
            .iter()
            .map(|log| self.source.decode(log))
            .collect::<Result<Vec<TaskEvent>>>()?;
        events.sort_by_key(|event| (event.origin_block_number, event.origin_log_index));

        tracing::info!(
            "Tick head={head} checkpoint={checkpoint:?} window={window} events={}",
            events.len()
        );

        let mut dispatched = 0;
        let mut skipped = 0;
        for event in &events {
            let key = self.processed_log_key(event);
            if self.ledger.seen(&key).await? {
                tracing::debug!("Skip already processed: {key}");
                skipped += 1;
                continue;
            }

            handler
                .handle_task(event)
                .await
                .wrap_err_with(|| format!("dispatch failed for {event} ({key})"))?;
            self.ledger.mark_seen(&key, event.origin_block_number).await?;
            dispatched += 1;
        }

        self.ledger.save_checkpoint(window.safe_end).await?;
        tracing::info!("Advanced to {safe_end}: dispatched={dispatched} skipped={skipped}");

        Ok(Tick::Advanced { window, dispatched, skipped })
    }

    fn processed_log_key(&self, event: &TaskEvent) -> ProcessedLogKey {
        ProcessedLogKey {
            chain_id: self.args.chain_id,
            transaction_hash: event.origin_tx_hash,
            log_index: event.origin_log_index,
        }
    }
}
