//! # Progress Tracking and Statistics Module
//!
//! Questo modulo gestisce il progress tracking e le statistiche di scrubbing.
//!
//! ## Responsabilità:
//! - Progress bar visual con `indicatif` per feedback real-time
//! - Tracking statistiche del batch (scrubbati, saltati, falliti)
//! - Report finale con la lista dei file falliti
//!
//! ## Statistiche tracciate:
//! - **files_processed**: Totale entry elaborate
//! - **files_scrubbed**: File effettivamente scrubbati
//! - **files_skipped**: File saltati (formato non scrivibile)
//! - **failures**: File falliti, con errore associato
//!
//! La progress bar è puramente cosmetica: nessuna decisione di controllo
//! dipende da essa.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::report::{FailedItem, ScrubReport};

/// Manages progress reporting for a directory scrub
#[derive(Clone)]
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a new progress manager for a known number of entries
    pub fn new(total_entries: u64) -> Self {
        let bar = ProgressBar::new(total_entries);

        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Advance by one entry with a status message
    pub fn update(&self, message: &str) {
        self.bar.inc(1);
        self.bar.set_message(message.to_string());
    }

    /// Finish with a final message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}

/// Statistics tracker for scrub results
#[derive(Debug, Default)]
pub struct ScrubStats {
    pub files_processed: usize,
    pub files_scrubbed: usize,
    pub files_skipped: usize,
    pub failures: Vec<FailedItem>,
}

impl ScrubStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_scrubbed(&mut self) {
        self.files_processed += 1;
        self.files_scrubbed += 1;
    }

    pub fn add_skipped(&mut self) {
        self.files_processed += 1;
        self.files_skipped += 1;
    }

    pub fn add_failure(&mut self, file: &str, error: &str) {
        self.files_processed += 1;
        self.failures.push(FailedItem {
            file: file.to_string(),
            error: error.to_string(),
        });
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Processed: {} entries | Scrubbed: {} | Skipped: {} | Failed: {}",
            self.files_processed,
            self.files_scrubbed,
            self.files_skipped,
            self.failures.len()
        )
    }

    /// Convert the accumulated counters into the final report
    pub fn into_report(self, input_path: PathBuf) -> ScrubReport {
        ScrubReport {
            input_path,
            files_processed: self.files_processed,
            files_scrubbed: self.files_scrubbed,
            files_skipped: self.files_skipped,
            failures: self.failures,
        }
    }
}
