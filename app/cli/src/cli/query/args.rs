use clap::Parser;

use crate::cli::query::read::{Entity, FromBlock};

#[derive(Parser, Debug)]
#[command(about = "Select ledger state", long_about = None)]
pub struct Query {
    /// SQLite connection string
    #[arg(short, long, env = "DB_URL", default_value = "sqlite://./data/orchestrator.db")]
    pub db_url: String,

    /// Entity to query
    #[arg(short, long, value_enum)]
    pub entity: Entity,

    /// Block number to list processed logs from, or `last` for the checkpoint
    #[arg(long, default_value = "last")]
    pub from_block: FromBlock,
}
