use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Start the task orchestrator", long_about = None)]
pub struct Args {
    /// Node Provider connection string
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Expected chain id of the node
    #[arg(long, env = "CHAIN_ID")]
    pub chain_id: u64,

    /// Task registry contract address
    #[arg(long, env = "AITASK_ADDRESS")]
    pub registry_address: String,

    /// Operator signing private key
    #[arg(short, long, env = "OPERATOR_PRIVATE_KEY", hide_env_values = true)]
    pub signer_pk: String,

    /// Compute service base url
    #[arg(long, env = "PYAPP_URL")]
    pub compute_url: String,

    /// Compute service api key
    #[arg(long, env = "PYAPP_API_KEY", hide_env_values = true)]
    pub compute_api_key: Option<String>,

    /// SQLite connection string
    #[arg(short, long, env = "DB_URL", default_value = "sqlite://./data/orchestrator.db")]
    pub db_url: String,

    /// Blocks required on top of a block before its events are handled
    #[arg(long, env = "CONFIRMATIONS", default_value_t = 2)]
    pub confirmations: u64,

    /// Checkpointed blocks re-scanned every poll
    #[arg(long, env = "REORG_BUFFER", default_value_t = 4)]
    pub reorg_buffer: u64,

    /// Poll interval in milliseconds
    #[arg(long, env = "POLL_INTERVAL_MS", default_value_t = 5000)]
    pub poll_interval: u64,

    /// Compute service request timeout in milliseconds
    #[arg(long, env = "REQUEST_TIMEOUT_MS", default_value_t = 10000)]
    pub request_timeout: u64,

    /// Chain RPC call timeout in milliseconds
    #[arg(long, env = "RPC_TIMEOUT_MS", default_value_t = 10000)]
    pub rpc_timeout: u64,

    /// Receipt wait timeout in milliseconds
    #[arg(long, env = "TX_WAIT_TIMEOUT_MS", default_value_t = 120000)]
    pub tx_wait_timeout: u64,

    /// Receipt poll interval in milliseconds
    #[arg(long, env = "RECEIPT_POLL_INTERVAL_MS", default_value_t = 1000)]
    pub receipt_poll_interval: u64,
}
