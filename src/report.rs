//! # Scrub Report Module
//!
//! Questo modulo produce il report strutturato di fine batch.
//!
//! ## Responsabilità:
//! - Raccoglie i conteggi finali (processati, scrubbati, saltati, falliti)
//! - Elenca i file falliti con il testo dell'errore associato
//! - Emette il report come JSON su stdout per uso programmatico

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One item that could not be scrubbed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedItem {
    pub file: String,
    pub error: String,
}

/// Final report of a scrub invocation
#[derive(Debug, Serialize, Deserialize)]
pub struct ScrubReport {
    pub input_path: PathBuf,
    pub files_processed: usize,
    pub files_scrubbed: usize,
    pub files_skipped: usize,
    pub failures: Vec<FailedItem>,
}

impl ScrubReport {
    /// Emit the report as pretty JSON on stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            println!("{}", json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_failures() {
        let report = ScrubReport {
            input_path: PathBuf::from("/photos"),
            files_processed: 3,
            files_scrubbed: 1,
            files_skipped: 1,
            failures: vec![FailedItem {
                file: "readme".to_string(),
                error: "No extension found in file name: readme".to_string(),
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"files_scrubbed\":1"));
        assert!(json.contains("\"readme\""));
    }
}
