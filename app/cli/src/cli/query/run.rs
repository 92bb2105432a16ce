use crate::cli::query::args::Query;
use crate::cli::query::read::{Entity, FromBlock};
use crate::cli::query::response::{CheckpointResponse, ProcessedLogResponse};
use eyre::{Result, eyre};
use store::client::Client;

pub async fn select(query: &Query) -> Result<()> {
    let client = Client::init(&query.db_url).await?;

    let checkpoint_store = store::checkpoint::store::Store::new(client.clone());
    let checkpoint = checkpoint_store.get_checkpoint().await?;

    match query.entity {
        Entity::Checkpoint => {
            let checkpoint = checkpoint.ok_or(eyre!("Checkpoint Not Found"))?;

            let response = CheckpointResponse(checkpoint);

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Entity::ProcessedLog => {
            let from_block_number = match query.from_block {
                FromBlock::Number(block_number) => block_number,
                FromBlock::Last => match checkpoint {
                    None => return Err(eyre!("Checkpoint Not Found")),
                    Some(checkpoint) => checkpoint.last_block as u64,
                },
            };

            let processed_store = store::processed::store::Store::new(client.clone());

            let logs = processed_store.get_processed_logs_from_block_number(from_block_number).await?;

            if logs.is_empty() {
                println!("No Processed Logs Found")
            } else {
                let response: Vec<ProcessedLogResponse> =
                    logs.into_iter().map(ProcessedLogResponse).collect();
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
    }

    Ok(())
}
