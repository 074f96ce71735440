use anyhow::{Result, anyhow};
use tracing::{error, info};

use tx_hash_merger::pipeline;
use tx_hash_merger::utils::{load_config, log_filter};

const CONFIG_FILE: &str = "merge-config.yml";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    info!("=========================== INITIALIZING ===========================");

    // Load config
    let config = match load_config(CONFIG_FILE) {
        Ok(config) => {
            info!("Config loaded successfully");
            config
        }
        Err(e) => {
            let e = anyhow!(e);
            error!("Failed to load config: {:#}", e);
            return Err(e);
        }
    };

    info!("Tx logs: {}", config.tx_logs_path.display());
    info!("Tx hashes: {}", config.tx_hashes_path.display());

    info!("============================= MERGING ==============================");

    if let Err(e) = pipeline::run(&config).await {
        error!("Merge failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}
