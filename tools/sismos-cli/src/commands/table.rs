//! List records with their direction code.

use std::path::PathBuf;

use serde::Serialize;
use sismos_analysis::direction::{classify_records, DirectionCode};
use sismos_common::config::AppConfig;
use sismos_quake_model::earthquake::{Earthquake, FEED_DATE_FORMAT};

use super::source::load_records;
use crate::OutputFormat;

/// A record with the derived direction column appended.
#[derive(Serialize)]
struct TableRow<'a> {
    #[serde(flatten)]
    record: &'a Earthquake,
    #[serde(rename = "Direccion")]
    direccion: DirectionCode,
}

pub async fn run(
    config: &AppConfig,
    input: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let records = load_records(input.as_deref(), &config.feed).await?;
    let codes = classify_records(&records);

    let rows: Vec<TableRow<'_>> = records
        .iter()
        .zip(codes)
        .map(|(record, direccion)| TableRow { record, direccion })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => print_text(&rows),
    }
    Ok(())
}

fn print_text(rows: &[TableRow<'_>]) {
    println!(
        "{:<19}  {:>11}  {:>9}  {:<9}  RefGeografica",
        "Fecha", "Profundidad", "Magnitud", "Direccion"
    );
    println!("{}", "=".repeat(80));
    for row in rows {
        println!(
            "{:<19}  {:>11}  {:>9}  {:<9}  {}",
            row.record.fecha.format(FEED_DATE_FORMAT).to_string(),
            row.record.profundidad,
            row.record.magnitud,
            row.direccion,
            row.record.ref_geografica
        );
    }
    println!("\n{} record(s).", rows.len());
}
