use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use sentiment_prep::{
    clean_data, get_data_info, load_data, logging, metrics as prep_metrics, validate_data,
    write_csv, MappingMode, PipelineConfig,
};

const CONFIG_ENV: &str = "SENTIMENT_PREP_CONFIG";

#[derive(Parser)]
#[command(name = "sentiment_prep")]
#[command(about = "Load, clean and label social-media sentiment CSV exports")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a CSV and run the cleaning pipeline over it
    Run {
        /// CSV export to read
        #[arg(long)]
        input: PathBuf,
        /// TOML pipeline configuration (falls back to $SENTIMENT_PREP_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Where to write the cleaned dataset as CSV
        #[arg(long)]
        output: Option<PathBuf>,
        /// Derive calendar features from the timestamp column
        #[arg(long)]
        add_time: bool,
        /// Label table: detailed (6 groups) or polarity (3 groups)
        #[arg(long)]
        mode: Option<MappingMode>,
        /// Keep index columns left by earlier exports
        #[arg(long)]
        keep_unnamed: bool,
        /// Print a Prometheus metrics snapshot when done
        #[arg(long)]
        print_metrics: bool,
    },
    /// Load a CSV and print its validation report as JSON
    Validate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        keep_unnamed: bool,
    },
    /// Load a CSV and print its shape, column types and first rows
    Info {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        keep_unnamed: bool,
    },
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<PipelineConfig> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

    match path {
        Some(path) => {
            info!("Using pipeline config {}", path.display());
            PipelineConfig::from_file(&path)
                .with_context(|| format!("loading config {}", path.display()))
        }
        None => Ok(PipelineConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            config,
            output,
            add_time,
            mode,
            keep_unnamed,
            print_metrics,
        } => {
            if print_metrics {
                prep_metrics::init_metrics();
            }

            let config = load_config(config.as_deref())?;
            let mut options = config.clean_options();
            if add_time {
                options.add_time = true;
            }
            if let Some(mode) = mode {
                options.mapping_mode = mode;
            }
            let drop_unnamed = config.loader.drop_unnamed && !keep_unnamed;

            let dataset = load_data(&input, drop_unnamed)
                .with_context(|| format!("loading {}", input.display()))?;
            let cleaned = clean_data(&dataset, &options).context("cleaning pipeline failed")?;

            match output {
                Some(path) => write_csv(&cleaned, &path)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => warn!("No --output given; cleaned dataset was not written"),
            }

            if print_metrics {
                match prep_metrics::render() {
                    Some(snapshot) => println!("{}", snapshot),
                    None => warn!("Metrics recorder unavailable; nothing to print"),
                }
            }
        }
        Commands::Validate {
            input,
            keep_unnamed,
        } => {
            let dataset = load_data(&input, !keep_unnamed)
                .with_context(|| format!("loading {}", input.display()))?;
            let report = validate_data(&dataset);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Info {
            input,
            keep_unnamed,
        } => {
            let dataset = load_data(&input, !keep_unnamed)
                .with_context(|| format!("loading {}", input.display()))?;
            println!("{}", get_data_info(&dataset));
        }
    }

    Ok(())
}
