//! Show the effective configuration, optionally writing it out.

use sismos_common::config::{config_file_path, AppConfig};

pub fn run(config: &AppConfig, init: bool) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);

    if init {
        let path = config_file_path();
        config
            .save()
            .map_err(|e| anyhow::anyhow!("Failed to save config to {}: {e}", path.display()))?;
        println!("\nConfig written to: {}", path.display());
    }
    Ok(())
}
