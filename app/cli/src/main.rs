mod cli {
    pub mod run {
        pub mod args;
        pub mod run;
    }
    pub mod query {
        pub mod args;
        pub mod read;
        pub mod response;
        pub mod run;
    }
    pub mod cmd;
}

use clap::Parser;
use eyre::Result;

use crate::cli::cmd::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli);

    match &cli.command {
        Command::Run(args) => cli::run::run::start(args).await,
        Command::Select(query) => {
            tracing::info!("Ledger Query: {:?}", query);
            cli::query::run::select(query).await
        }
    }
}

fn init_tracing(cli: &Cli) {
    match &cli.command {
        Command::Run(_) => {
            // install global subscriber configured based on RUST_LOG envvar.
            tracing_subscriber::fmt::init();
        }
        Command::Select(_) => {
            tracing_subscriber::fmt::Subscriber::builder()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
