use std::future::Future;
use tokio::sync::broadcast;
use tokio::time::{Duration, Instant, MissedTickBehavior};

/// Drives one callback on a fixed period until shutdown or the first error.
///
/// Ticks never overlap: the next tick is only awaited once the previous
/// callback has returned. A shutdown signal drops the in-flight callback
/// future, cancelling whatever call it was awaiting.
pub struct Ticker {
    period: Duration,
    shutdown_rx: broadcast::Receiver<()>,
}

impl Ticker {
    pub fn new(period: Duration, shutdown_tx: &broadcast::Sender<()>) -> Self {
        Self { period, shutdown_rx: shutdown_tx.subscribe() }
    }

    /// Returns the number of completed ticks on shutdown, or the first
    /// callback error.
    pub async fn run<F, Fut, E>(&mut self, mut tick_callback: F) -> Result<u64, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let mut interval = tokio::time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut completed: u64 = 0;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    tokio::select! {
                        result = tick_callback() => {
                            result?;
                            completed += 1;
                        }
                        _ = self.shutdown_rx.recv() => {
                            tracing::info!("Shutdown received during tick {}", completed + 1);
                            break
                        }
                    }
                }
                _ = self.shutdown_rx.recv() => {
                    // Shutdown signal received
                    break
                }
            }
        }

        Ok(completed)
    }
}
