pub mod args;
pub mod error;
pub mod ledger;
pub mod poller;
pub mod utils;
pub mod window;
pub mod source {
    pub mod filter;
    pub mod handle;
    pub mod log;
}
pub mod task {
    pub mod handle;
    pub mod runner;
    pub mod state;
}
pub mod tx {
    pub mod chain;
    pub mod fees;
    pub mod sequencer;
}
