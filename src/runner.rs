//! # Scrub Runner Main Orchestrator
//!
//! Orchestratore principale: classifica il path di input e smista al flusso
//! directory (un livello, non ricorsivo) o al flusso single-file. Tutti i
//! fallimenti per-item vengono raccolti nel report senza interrompere il
//! batch.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::{
    config::Config,
    error::ScrubError,
    file_manager::{FileManager, PathKind},
    format,
    progress::{ProgressManager, ScrubStats},
    report::ScrubReport,
    scrubber::Scrubber,
};

/// Outcome of processing one candidate entry
#[derive(Debug)]
pub enum ScrubOutcome {
    /// A clean artifact was written at the contained path
    Scrubbed(PathBuf),
    /// Extension not in the writable capability set, nothing done
    Skipped,
    /// The entry could not be processed; the batch continues
    Failed(ScrubError),
}

/// Main orchestrator for metadata scrubbing
pub struct MetadataScrubber {
    config: Config,
}

impl MetadataScrubber {
    /// Create a new scrubber instance with a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Classify the input path and dispatch to the appropriate flow.
    /// A missing path is the only fatal condition at this level.
    pub async fn run(&self, input_path: &Path) -> Result<ScrubReport> {
        match FileManager::classify_path(input_path).await {
            PathKind::Missing => {
                Err(ScrubError::PathNotFound(input_path.display().to_string()).into())
            }
            PathKind::File => self.scrub_single_file(input_path).await,
            PathKind::Dir => self.scrub_directory(input_path).await,
        }
    }

    /// Single-file flow: one entry, no progress bar
    async fn scrub_single_file(&self, file_path: &Path) -> Result<ScrubReport> {
        // Resolve to an absolute path so the artifact lands next to the
        // source regardless of the process working directory
        let file_path = file_path.canonicalize()?;
        info!("Scrubbing single file: {}", file_path.display());

        let mut stats = ScrubStats::new();
        self.record_outcome(&file_path, &mut stats).await;

        info!("{}", stats.format_summary());
        Ok(stats.into_report(file_path))
    }

    /// Directory flow: walk one level and route every entry through the
    /// item processor, ticking the progress bar per entry
    async fn scrub_directory(&self, dir_path: &Path) -> Result<ScrubReport> {
        let dir_path = dir_path.canonicalize()?;
        let entries = FileManager::list_entries(&dir_path)?;
        info!(
            "📂 Scrubbing directory {} ({} entries)",
            dir_path.display(),
            entries.len()
        );

        let progress = ProgressManager::new(entries.len() as u64);
        let mut stats = ScrubStats::new();

        for entry in &entries {
            let entry_name = entry
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| entry.display().to_string());
            debug!("{}", entry_name);

            self.record_outcome(entry, &mut stats).await;
            progress.update(&entry_name);
        }

        progress.finish(&stats.format_summary());
        info!("✅ Directory scrub complete. {}", stats.format_summary());

        Ok(stats.into_report(dir_path))
    }

    /// Process one entry and fold its outcome into the running statistics
    async fn record_outcome(&self, path: &Path, stats: &mut ScrubStats) {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        match self.process_entry(path).await {
            ScrubOutcome::Scrubbed(_) => stats.add_scrubbed(),
            ScrubOutcome::Skipped => stats.add_skipped(),
            ScrubOutcome::Failed(error) => stats.add_failure(&file_name, &error.to_string()),
        }
    }

    /// Item processor: validate the entry's format, scrub it, then apply
    /// the optional pacing delay. Every failure is returned as an outcome,
    /// never propagated, so one bad entry cannot abort the batch.
    async fn process_entry(&self, path: &Path) -> ScrubOutcome {
        let file_name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_string(),
            None => {
                return ScrubOutcome::Failed(ScrubError::Validation(format!(
                    "Invalid file name: {}",
                    path.display()
                )))
            }
        };

        match format::is_supported(&file_name) {
            Ok(false) => {
                debug!("Skipping {} (extension not writable)", file_name);
                ScrubOutcome::Skipped
            }
            Err(error) => {
                warn!("Cannot derive format for {}: {}", file_name, error);
                ScrubOutcome::Failed(error)
            }
            Ok(true) => match Scrubber::scrub(path).await {
                Ok(artifact_path) => {
                    info!(
                        "🧼 Metadata scrubbed: {} -> {}",
                        file_name,
                        artifact_path.display()
                    );
                    if self.config.pacing_delay_ms > 0 {
                        sleep(Duration::from_millis(self.config.pacing_delay_ms)).await;
                    }
                    ScrubOutcome::Scrubbed(artifact_path)
                }
                Err(error) => {
                    error!("Could not scrub {}: {}", file_name, error);
                    ScrubOutcome::Failed(error)
                }
            },
        }
    }
}
