//! # Error Types Module
//!
//! Questo modulo definisce tutti i tipi di errore custom dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce `ScrubError` enum per categorizzare tutti gli errori possibili
//! - Fornisce messaggi di errore descrittivi e strutturati
//! - Integra con `thiserror` per automatic error conversion
//!
//! ## Categorie di errori:
//! - `Io`: Errori di I/O (file non trovati, permessi, etc.)
//! - `Image`: Errori di decodifica/codifica immagini (formati corrotti, etc.)
//! - `MissingExtension`: Nome file senza `.`, impossibile derivare il formato
//! - `Reconstruction`: Copia pixel nel nuovo container fallita
//! - `PathNotFound`: Path di input inesistente
//! - `Validation`: Errori di validazione input/configurazione
//!
//! ## Propagazione:
//! Gli errori per-item vengono raccolti nel report finale e NON interrompono
//! il batch; solo gli errori a livello di invocazione (path inesistente,
//! configurazione invalida) risalgono fino al main tramite `anyhow`.

/// Custom error types for metadata scrubbing
#[derive(thiserror::Error, Debug)]
pub enum ScrubError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("No extension found in file name: {0}")]
    MissingExtension(String),

    #[error("Pixel reconstruction error: {0}")]
    Reconstruction(String),

    #[error("Path does not exist: {0}")]
    PathNotFound(String),

    #[error("File validation error: {0}")]
    Validation(String),

    #[error("Background task error: {0}")]
    Join(#[from] tokio::task::JoinError),
}
