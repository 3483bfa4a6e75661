//! # Format Resolution Module
//!
//! Questo modulo deriva il formato di un file dal suo nome e verifica che
//! la imaging capability sia in grado di riscriverlo.
//!
//! ## Responsabilità:
//! - `extension_tag()`: Estrae l'extension tag dal nome file (dal primo `.`
//!   fino alla fine, punto incluso)
//! - `capability_set()`: Calcola l'insieme delle estensioni che la libreria
//!   `image` può sia leggere che scrivere con le feature abilitate
//! - `is_supported()`: Verifica se un nome file appartiene al capability set
//!
//! ## Note:
//! Il capability set viene ricalcolato ad ogni chiamata (nessuna cache):
//! riflette sempre i formati registrati dalla build corrente della libreria.
//! Il confronto è case-insensitive (`photo.JPG` è valido quanto `photo.jpg`).

use std::collections::HashSet;

use crate::error::ScrubError;

/// Derive the extension tag of a file name: the substring from the first
/// `.` to the end of the string, dot included (`archive.tar.gz` -> `.tar.gz`).
pub fn extension_tag(file_name: &str) -> Result<String, ScrubError> {
    match file_name.find('.') {
        Some(index) => Ok(file_name[index..].to_string()),
        None => Err(ScrubError::MissingExtension(file_name.to_string())),
    }
}

/// Compute the set of extension tags the imaging capability can both decode
/// and re-encode. Queried fresh on every call, no caching.
pub fn capability_set() -> HashSet<String> {
    image::ImageFormat::all()
        .filter(|format| format.reading_enabled() && format.writing_enabled())
        .flat_map(|format| format.extensions_str())
        .map(|ext| format!(".{ext}"))
        .collect()
}

/// Check whether a file name carries an extension the capability set can
/// rewrite. Unsupported extensions are a skip, not an error; a name with no
/// `.` propagates `MissingExtension` from the resolver.
pub fn is_supported(file_name: &str) -> Result<bool, ScrubError> {
    let tag = extension_tag(file_name)?.to_ascii_lowercase();
    Ok(capability_set().contains(&tag))
}
