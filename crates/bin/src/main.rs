//! Macropanel CLI binary.
//!
//! Thin wrapper over the library crates: loads the two raw sources from an
//! explicit data directory, builds the merged panel, and reports the
//! train/test split. Model training itself happens elsewhere.

use clap::{Args, Parser, Subcommand};
use macropanel::data::loader::{DEFAULT_GOVEXP_FILE, DEFAULT_MACRO_FILE};
use macropanel::{PanelLoader, SplitConfig, build_panel, make_train_test, schema};
use polars::prelude::DataFrame;
use serde_json::json;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "macropanel")]
#[command(about = "Macropanel: GDP growth dataset preparation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Directory holding the raw source files
    #[arg(long)]
    data_dir: PathBuf,

    /// File name of the macro indicators source
    #[arg(long, default_value = DEFAULT_MACRO_FILE)]
    macro_file: String,

    /// File name of the government expenditure source
    #[arg(long, default_value = DEFAULT_GOVEXP_FILE)]
    govexp_file: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the panel and report the train/test split
    Prepare {
        #[command(flatten)]
        source: SourceArgs,

        /// Last year assigned to the train subset
        #[arg(long, default_value_t = SplitConfig::default().train_end_year)]
        train_end_year: i32,

        /// Emit the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Build and display the merged panel only
    Panel {
        #[command(flatten)]
        source: SourceArgs,

        /// Number of rows to display
        #[arg(long, default_value = "10")]
        rows: usize,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Prepare {
            source,
            train_end_year,
            json,
        } => {
            let panel = load_panel(&source)?;
            let config = SplitConfig { train_end_year };
            let split = make_train_test(&panel, &config)?;

            if json {
                let summary = json!({
                    "panel_rows": panel.height(),
                    "countries": panel.column(schema::COUNTRY)?.as_materialized_series().n_unique()?,
                    "train_end_year": config.train_end_year,
                    "train_rows": split.train_len(),
                    "test_rows": split.test_len(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                let countries = panel.column(schema::COUNTRY)?.as_materialized_series().n_unique()?;
                println!("Panel: {} rows, {} countries", panel.height(), countries);
                println!("Train (year <= {}): {} rows", config.train_end_year, split.train_len());
                println!("Test  (year >  {}): {} rows", config.train_end_year, split.test_len());
            }
        }
        Commands::Panel { source, rows } => {
            let panel = load_panel(&source)?;
            println!("{}", panel.head(Some(rows)));
            println!("({} rows total)", panel.height());
        }
    }

    Ok(())
}

fn load_panel(source: &SourceArgs) -> Result<DataFrame, Box<dyn std::error::Error>> {
    let loader = PanelLoader::new(&source.data_dir)
        .with_files(source.macro_file.as_str(), source.govexp_file.as_str());
    let macro_df = loader.load_macro_data()?;
    let govexp_df = loader.load_govexp_data()?;
    Ok(build_panel(&macro_df, &govexp_df)?)
}
