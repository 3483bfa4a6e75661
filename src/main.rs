//! # Metadata Scrubber - Main Entry Point
//!
//! Questo è il punto di ingresso principale dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing`
//! - Caricamento configurazione (file JSON opzionale + override da CLI)
//! - Avvio dell'orchestratore e stampa del report finale
//!
//! ## Flusso di esecuzione:
//! 1. Parsa gli argomenti CLI (path di input, delay, json, verbose)
//! 2. Configura il logging (INFO o DEBUG a seconda del flag verbose)
//! 3. Crea la configurazione e istanzia MetadataScrubber
//! 4. Classifica il path e scrubba file singolo o directory
//! 5. Riporta i file falliti e, se richiesto, emette il report JSON
//!
//! Il processo esce con status 0 anche quando alcuni item sono falliti:
//! i fallimenti per-item sono visibili solo nel log e nel report.
//!
//! ## Esempio di utilizzo:
//! ```bash
//! metadata-scrubber /path/to/images --delay-ms 250 --json
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use metadata_scrubber::{Config, MetadataScrubber};

#[derive(Parser)]
#[command(name = "metadata-scrubber")]
#[command(about = "Strip embedded EXIF metadata from images via pixel-copy reconstruction")]
struct Args {
    /// Image file or directory of images to scrub
    input_path: PathBuf,

    /// Pause after each scrubbed file, in milliseconds (0 = disabled)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Print the final report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Optional JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration, then apply CLI overrides
    let mut config = match args.config {
        Some(ref config_path) => Config::from_file(config_path).await?,
        None => Config::default(),
    };
    if let Some(delay_ms) = args.delay_ms {
        config.pacing_delay_ms = delay_ms;
    }
    if args.json {
        config.json_report = true;
    }

    let json_report = config.json_report;
    let scrubber = MetadataScrubber::new(config)?;
    let report = scrubber.run(&args.input_path).await?;

    for failure in &report.failures {
        warn!("Failed: {} ({})", failure.file, failure.error);
    }

    if json_report {
        report.emit();
    } else {
        info!(
            "Done: {} scrubbed, {} skipped, {} failed",
            report.files_scrubbed,
            report.files_skipped,
            report.failures.len()
        );
    }

    Ok(())
}
