// This is the Lambda bootstrap entry point for the group query function

use groups::api::{AppState, handler};
use groups::core::config::AppConfig;
use groups::storage::DynamoFetcher;
use lambda_runtime::{Error, run, service_fn};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    groups::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // Built once per cold start; invocations only borrow it.
    let fetcher = DynamoFetcher::from_env(&config).await;
    info!(table = %fetcher.table_name(), "Group query function initialised");
    let state = AppState::new(config, fetcher);

    run(service_fn(|event| handler(&state, event))).await
}
