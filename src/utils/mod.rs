use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::common::Config;
use crate::models::errors::LoadError;

pub fn load_config<P: AsRef<Path>>(file_name: P) -> Result<Config, LoadError> {
    let config_path = file_name.as_ref();
    if config_path.exists() {
        info!("Config path: {}", config_path.display());
    } else {
        info!(
            "No config file at {}, using default paths",
            config_path.display()
        );
    }

    // Defaults come from `Config::default()`; the file only overrides what it sets
    let config = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .build()?
        .try_deserialize::<Config>()?;

    Ok(config)
}

/// Log filter from `RUST_LOG`-style directives, `info` when unset or invalid.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
