//! # Configuration Management Module
//!
//! Questo modulo gestisce tutta la configurazione dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con i parametri di scrubbing
//! - Fornisce validazione dei parametri di input
//! - Supporta caricamento/salvataggio configurazione da/verso file JSON
//!
//! ## Parametri di configurazione:
//! - `pacing_delay_ms`: Pausa dopo ogni file scrubbato in millisecondi
//!   (default: 0 = disabilitata; utile solo per pacing visivo interattivo)
//! - `json_report`: Emette il report finale come JSON su stdout
//!   (default: false)
//!
//! ## Validazione:
//! - Controlla che pacing_delay_ms non superi i 60 secondi
//!
//! ## Esempio:
//! ```rust,ignore
//! let config = Config {
//!     pacing_delay_ms: 250,
//!     ..Default::default()
//! };
//! config.validate()?;
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound for the per-item pacing delay
const MAX_PACING_DELAY_MS: u64 = 60_000;

/// Configuration for metadata scrubbing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Delay after each scrubbed file in milliseconds (0 = disabled)
    pub pacing_delay_ms: u64,
    /// Emit the final report as JSON on stdout
    pub json_report: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pacing_delay_ms: 0,
            json_report: false,
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.pacing_delay_ms > MAX_PACING_DELAY_MS {
            return Err(anyhow::anyhow!(
                "Pacing delay must be at most {} ms",
                MAX_PACING_DELAY_MS
            ));
        }

        Ok(())
    }

    /// Load configuration from file
    pub async fn from_file(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.pacing_delay_ms = 1_000;
        assert!(config.validate().is_ok());

        config.pacing_delay_ms = 120_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.pacing_delay_ms, 0);
        assert!(!config.json_report);
    }

    #[tokio::test]
    async fn test_config_save_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let original_config = Config {
            pacing_delay_ms: 500,
            json_report: true,
        };

        original_config.save_to_file(&config_path).await.unwrap();
        let loaded_config = Config::from_file(&config_path).await.unwrap();

        assert_eq!(loaded_config.pacing_delay_ms, 500);
        assert!(loaded_config.json_report);
    }

    #[tokio::test]
    async fn test_config_missing_file_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nope.json");

        let config = Config::from_file(&config_path).await.unwrap();
        assert_eq!(config.pacing_delay_ms, 0);
    }
}
