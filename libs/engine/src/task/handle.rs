use chain::registry::TaskEvent;
use eyre::Result;

/// Receives every unseen `TaskCreated` event the poller dispatches.
///
/// Returning an error aborts the tick; the same event is dispatched again on
/// a later tick.
#[async_trait::async_trait]
pub trait TaskHandler: Send + Sync {
    async fn handle_task(&self, event: &TaskEvent) -> Result<()>;
}
