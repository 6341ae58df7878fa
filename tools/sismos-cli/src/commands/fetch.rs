//! Download the feed to a JSON file.
//!
//! The body is saved exactly as served, after checking that it parses.

use std::path::PathBuf;

use sismos_common::config::AppConfig;
use sismos_feed::FeedClient;
use sismos_quake_model::earthquake::parse_records;

pub async fn run(config: &AppConfig, output: PathBuf) -> anyhow::Result<()> {
    println!("Fetching: {}", config.feed.url);

    let client = FeedClient::new(&config.feed)?;
    let body = client
        .fetch_raw()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch {}: {e}", client.url()))?;
    let records = parse_records(&body)
        .map_err(|e| anyhow::anyhow!("Feed payload is not a record list: {e}"))?;

    std::fs::write(&output, &body)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", output.display()))?;

    println!("  Saved {} records to: {}", records.len(), output.display());
    Ok(())
}
