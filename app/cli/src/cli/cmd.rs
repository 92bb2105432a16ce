use clap::{Parser, Subcommand};

use crate::cli::query::args::Query;
use crate::cli::run::args::Args;

#[derive(Parser, Debug)]
#[command(name = "orchestrator")]
#[command(about = "Bridges on-chain task requests to the compute service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start polling the task registry and submitting results
    Run(Args),
    /// Inspect the ledger
    Select(Query),
}
