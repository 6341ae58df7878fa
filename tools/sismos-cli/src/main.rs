//! Sismos CLI — Command-line view of the Chilean earthquake feed.
//!
//! Usage:
//!   sismos fetch [-o FILE]         Download the feed to a JSON file
//!   sismos table [--input FILE]    List records with their direction code
//!   sismos directions              Direction counts and percentages
//!   sismos magnitudes              Record counts per magnitude
//!   sismos report [-o FILE]        All chart datasets as one JSON document
//!   sismos classify <TEXT>...      Classify ad hoc reference strings
//!   sismos config [--init]         Show (or write out) the effective config

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use sismos_common::config::AppConfig;

mod commands;
mod labels;

#[derive(Parser)]
#[command(
    name = "sismos",
    about = "Chilean earthquake feed: records, directions, and chart data",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/sismos/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the feed and save it as JSON
    Fetch {
        /// Output file
        #[arg(short, long, default_value = "sismos.json")]
        output: PathBuf,
    },

    /// List records with their direction code
    Table {
        /// Read records from a saved JSON file instead of the feed
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Direction counts and percentages
    Directions {
        /// Read records from a saved JSON file instead of the feed
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Record counts per magnitude
    Magnitudes {
        /// Read records from a saved JSON file instead of the feed
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write the bar, pie, and scatter datasets as one JSON document
    Report {
        /// Read records from a saved JSON file instead of the feed
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify reference strings given on the command line
    Classify {
        /// Reference texts, e.g. "20 km al NE de Santiago"
        #[arg(required = true)]
        references: Vec<String>,
    },

    /// Print the effective configuration
    Config {
        /// Also write it to the standard config location
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?,
        None => AppConfig::load(),
    };

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    sismos_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Fetch { output } => commands::fetch::run(&config, output).await,
        Commands::Table { input, format } => commands::table::run(&config, input, format).await,
        Commands::Directions { input, format } => {
            commands::directions::run(&config, input, format).await
        }
        Commands::Magnitudes { input, format } => {
            commands::magnitudes::run(&config, input, format).await
        }
        Commands::Report { input, output } => commands::report::run(&config, input, output).await,
        Commands::Classify { references } => commands::classify::run(references),
        Commands::Config { init } => commands::config::run(&config, init),
    }
}
