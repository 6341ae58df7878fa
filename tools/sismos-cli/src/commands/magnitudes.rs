//! Record counts per magnitude.

use std::path::PathBuf;

use sismos_analysis::magnitude::MagnitudeHistogram;
use sismos_common::config::AppConfig;

use super::source::load_records;
use crate::OutputFormat;

pub async fn run(
    config: &AppConfig,
    input: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let records = load_records(input.as_deref(), &config.feed).await?;
    let histogram = MagnitudeHistogram::from_records(&records);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&histogram)?),
        OutputFormat::Text => {
            if histogram.is_empty() {
                println!("No records to count.");
                return Ok(());
            }
            println!("{:<10}  {:>8}", "Magnitud", "Cantidad");
            println!("{}", "=".repeat(20));
            for bin in &histogram.bins {
                println!("{:<10}  {:>8}", bin.label, bin.count);
            }
            println!("\nTotal: {} record(s).", histogram.total());
        }
    }
    Ok(())
}
