//! Bar, pie, and scatter datasets as one JSON document.

use std::path::PathBuf;

use serde::Serialize;
use sismos_analysis::direction::{aggregate, DirectionCode};
use sismos_analysis::magnitude::MagnitudeHistogram;
use sismos_analysis::scatter::{scatter_points, ScatterPoint};
use sismos_common::config::AppConfig;
use sismos_quake_model::earthquake::Earthquake;

use super::source::{describe, load_records};
use crate::labels::{direction_name, gradient_colors};

#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub source: String,
    pub records: usize,
    pub magnitude_bar: BarChart,
    pub direction_pie: PieChart,
    pub depth_scatter: ScatterChart,
}

#[derive(Debug, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: Option<f64>,
    pub count: usize,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct PieChart {
    pub title: &'static str,
    pub slices: Vec<Slice>,
}

#[derive(Debug, Serialize)]
pub struct Slice {
    pub code: DirectionCode,
    pub label: &'static str,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct ScatterChart {
    pub title: &'static str,
    pub points: Vec<ScatterPoint>,
    pub skipped: usize,
}

pub fn build_report(records: &[Earthquake], source: String, generated_at: String) -> Report {
    let histogram = MagnitudeHistogram::from_records(records);
    let colors = gradient_colors(histogram.bins.len());
    let bars = histogram
        .bins
        .into_iter()
        .zip(colors)
        .map(|(bin, color)| Bar {
            label: bin.label,
            value: bin.value,
            count: bin.count,
            color,
        })
        .collect();

    let slices = aggregate(records)
        .entries
        .into_iter()
        .map(|entry| Slice {
            code: entry.code,
            label: direction_name(entry.code),
            count: entry.count,
            percentage: entry.percentage,
        })
        .collect();

    let scatter = scatter_points(records);

    Report {
        generated_at,
        source,
        records: records.len(),
        magnitude_bar: BarChart {
            title: "Cantidad de Sismos por Magnitud",
            bars,
        },
        direction_pie: PieChart {
            title: "Direcciones de los Sismos",
            slices,
        },
        depth_scatter: ScatterChart {
            title: "Magnitud vs Profundidad (en Km)",
            points: scatter.points,
            skipped: scatter.skipped,
        },
    }
}

pub async fn run(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let records = load_records(input.as_deref(), &config.feed).await?;
    let source = describe(input.as_deref(), &config.feed);
    let report = build_report(&records, source, chrono::Local::now().to_rfc3339());
    let json = serde_json::to_string_pretty(&report)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), records = report.records, "Report written");
            println!("Report saved to: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
