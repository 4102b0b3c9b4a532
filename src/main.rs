use color_eyre::eyre::Result;
use dotenv::dotenv;
use expertbook_api::config::ApiConfig;
use expertbook_client::create_client;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Build the marketplace backend client; it serves both the read and
    // the write side of the collaborator contract.
    let client = Arc::new(create_client(&config.marketplace_base_url)?);

    // Start API server
    expertbook_api::start_server(config, client.clone(), client).await?;

    Ok(())
}
