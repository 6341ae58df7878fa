//! Direction counts and percentages.

use std::path::PathBuf;

use sismos_analysis::direction::{aggregate, DirectionSummary};
use sismos_common::config::AppConfig;

use super::source::load_records;
use crate::labels::direction_name;
use crate::OutputFormat;

pub async fn run(
    config: &AppConfig,
    input: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let records = load_records(input.as_deref(), &config.feed).await?;
    let summary = aggregate(&records);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => print_text(&summary),
    }
    Ok(())
}

fn print_text(summary: &DirectionSummary) {
    if summary.is_empty() {
        println!("No records to summarize.");
        return;
    }

    println!(
        "{:<9}  {:<12}  {:>8}  {:>10}",
        "Direccion", "Nombre", "Cantidad", "Porcentaje"
    );
    println!("{}", "=".repeat(45));
    for entry in &summary.entries {
        println!(
            "{:<9}  {:<12}  {:>8}  {:>9.2}%",
            entry.code,
            direction_name(entry.code),
            entry.count,
            entry.percentage
        );
    }
    println!("\nTotal: {} record(s).", summary.total);
}
