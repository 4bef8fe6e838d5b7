use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use incidex::ocr::TesseractOcr;
use incidex::{IngestConfig, run_ingest};

#[derive(Parser)]
#[command(name = "incidex")]
#[command(about = "Extract shooting-incident records from scanned newspaper pages")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v = debug, -vv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one ingest pass over a corpus of page images
    Ingest {
        /// Directory containing the scanned page images
        corpus: PathBuf,

        /// Output path for the JSON record index
        #[arg(short, long, default_value = "incidents.json")]
        output: PathBuf,

        /// Configuration file (default: discover incidex.toml upward)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Worker count override
        #[arg(short, long)]
        workers: Option<usize>,

        /// OCR language override (e.g. "eng", "deu")
        #[arg(short, long)]
        language: Option<String>,

        /// Page segmentation mode override
        #[arg(long)]
        psm: Option<u8>,

        /// Per-image OCR timeout override in seconds (0 disables the timeout)
        #[arg(long)]
        ocr_timeout: Option<u64>,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that the OCR engine is installed and usable
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Ingest {
            corpus,
            output,
            config,
            workers,
            language,
            psm,
            ocr_timeout,
            json,
        } => {
            let mut config = match config {
                Some(path) => IngestConfig::from_toml_file(&path)
                    .with_context(|| format!("loading config from {}", path.display()))?,
                None => IngestConfig::discover()
                    .context("discovering incidex.toml")?
                    .unwrap_or_default(),
            };
            if workers.is_some() {
                config.workers = workers;
            }
            if let Some(language) = language {
                config.ocr.language = language;
            }
            if let Some(psm) = psm {
                config.ocr.psm = psm;
            }
            if let Some(timeout) = ocr_timeout {
                config.ocr.timeout_seconds = if timeout == 0 { None } else { Some(timeout) };
            }

            let version = TesseractOcr::version()
                .await
                .context("probing tesseract")?;
            info!(tesseract = %version, "OCR engine ready");

            let summary = run_ingest(&corpus, &output, Arc::new(TesseractOcr::new()), &config)
                .await
                .context("ingest run failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "Accepted {} of {} pages in {} ms -> {}",
                    summary.records_accepted,
                    summary.images_scanned,
                    summary.elapsed_ms,
                    output.display()
                );
            }
        }
        Commands::Doctor => {
            let version = TesseractOcr::version()
                .await
                .context("tesseract is not usable")?;
            println!("tesseract {}", version);
        }
    }

    Ok(())
}
