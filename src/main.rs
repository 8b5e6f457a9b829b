use color_eyre::eyre::Result;
use dotenv::dotenv;
use drivetime_api::config::ApiConfig;
use drivetime_store::AvailabilityStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Availability books live in memory; the process is the source of truth
    let store = AvailabilityStore::new();

    // Start API server
    drivetime_api::start_server(config, store).await?;

    Ok(())
}
