//! # Metadata Scrubber Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API
//! pubbliche.
//!
//! ## Architettura dei moduli:
//! - `config`: Gestione configurazione e validazione parametri
//! - `error`: Tipi di errore custom per le diverse operazioni
//! - `format`: Risoluzione extension tag e capability set dei formati
//! - `scrubber`: Rimozione metadata tramite ricostruzione pixel-copy
//! - `file_manager`: Classificazione path e listing directory
//! - `runner`: Orchestratore principale (single-file e directory walk)
//! - `progress`: Progress tracking e statistiche
//! - `report`: Report finale strutturato
//!
//! ## Utilizzo:
//! ```rust,ignore
//! use metadata_scrubber::{Config, MetadataScrubber};
//!
//! let scrubber = MetadataScrubber::new(Config::default())?;
//! let report = scrubber.run(&path).await?;
//! ```

pub mod config;
pub mod error;
pub mod file_manager;
pub mod format;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scrubber;

pub use config::Config;
pub use error::ScrubError;
pub use report::{FailedItem, ScrubReport};
pub use runner::{MetadataScrubber, ScrubOutcome};
