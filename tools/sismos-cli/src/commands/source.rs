//! Where records come from: a saved JSON file or the live feed.

use std::path::Path;

use sismos_common::config::FeedConfig;
use sismos_feed::FeedClient;
use sismos_quake_model::earthquake::{parse_records, Earthquake};

pub async fn load_records(input: Option<&Path>, feed: &FeedConfig) -> anyhow::Result<Vec<Earthquake>> {
    match input {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
            let records = parse_records(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {e}", path.display()))?;
            tracing::debug!(path = %path.display(), records = records.len(), "Loaded saved feed");
            Ok(records)
        }
        None => {
            let client = FeedClient::new(feed)?;
            let records = client
                .fetch()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to fetch {}: {e}", client.url()))?;
            Ok(records)
        }
    }
}

/// Human-readable description of the record source.
pub fn describe(input: Option<&Path>, feed: &FeedConfig) -> String {
    match input {
        Some(path) => path.display().to_string(),
        None => feed.url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sismos-source-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn input_file_is_parsed_without_fetching() {
        let path = scratch_file(
            "saved.json",
            r#"[{"Fecha":"2024-11-26 13:20:04","Profundidad":"45 km","Magnitud":"3.1 Ml","RefGeografica":"15 km al S de Valparaíso"}]"#,
        );
        let feed = FeedConfig {
            url: "http://127.0.0.1:9/unused".to_string(),
            ..FeedConfig::default()
        };

        let records = load_records(Some(path.as_path()), &feed).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ref_geografica, "15 km al S de Valparaíso");
        assert_eq!(describe(Some(path.as_path()), &feed), path.display().to_string());

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn missing_input_file_reports_read_failure() {
        let path = std::env::temp_dir().join("sismos-source-test-missing.json");
        let err = load_records(Some(path.as_path()), &FeedConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
        assert!(err.to_string().contains("sismos-source-test-missing.json"));
    }

    #[tokio::test]
    async fn malformed_input_file_reports_parse_failure() {
        let path = scratch_file("malformed.json", r#"{"not":"a list"}"#);
        let err = load_records(Some(path.as_path()), &FeedConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));

        let _ = std::fs::remove_file(&path);
    }
}
