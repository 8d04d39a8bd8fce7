//! Command implementations for the country indicators CLI.
//!
//! Provides subcommands for downloading the dataset snapshot, summarizing
//! it, resolving continents and exporting any dashboard figure as JSON.

use clap::Subcommand;

pub mod continent;
pub mod export;
pub mod fetch;
pub mod summary;

pub use export::{FigureKind, FigureOptions};

/// Where the dashboard reads the dataset from.
pub const DATASET_URL: &str = "https://plotly.github.io/datasets/country_indicators.csv";

#[derive(Subcommand)]
pub enum Command {
    /// Download the long-form country indicators CSV
    Fetch {
        /// Source URL
        #[arg(short, long, default_value = DATASET_URL)]
        url: String,

        /// Output path for the CSV snapshot
        #[arg(short, long, default_value = "fixtures/country_indicators.csv")]
        output: String,
    },

    /// Print row, country, year and indicator counts of a snapshot
    Summary {
        /// Path to a long-form country indicators CSV
        #[arg(short, long)]
        input: String,
    },

    /// Print the continent of each country name (or Unknown and why)
    Continent {
        /// Country names as they appear in the dataset
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Export one dashboard figure as Plotly JSON
    Figure {
        /// Path to a long-form country indicators CSV
        #[arg(short, long)]
        input: String,

        /// Output path for the figure JSON ("-" for stdout)
        #[arg(short, long, default_value = "-")]
        output: String,

        #[arg(value_enum)]
        kind: FigureKind,

        #[command(flatten)]
        options: FigureOptions,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { url, output } => fetch::run_fetch(&url, &output).await,
        Command::Summary { input } => summary::run_summary(&input),
        Command::Continent { names } => {
            continent::run_continent(&names);
            Ok(())
        }
        Command::Figure {
            input,
            output,
            kind,
            options,
        } => export::run_export(&input, &output, kind, &options),
    }
}
