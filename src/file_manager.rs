//! # File Management Module
//!
//! Questo modulo gestisce la classificazione dei path e il listing delle
//! directory.
//!
//! ## Responsabilità:
//! - Classificazione di un path di input: file, directory o inesistente
//! - Listing di un singolo livello di directory (non ricorsivo)
//!
//! ## Note:
//! - L'esistenza viene controllata per prima: un path inesistente viene
//!   classificato `Missing` senza ulteriori ispezioni
//! - Il listing è deterministico (ordinato per nome) e NON scende nelle
//!   sottodirectory; le sottodirectory compaiono come entry normali e
//!   vengono filtrate a valle dalla validazione formato
//!
//! ## Esempio:
//! ```rust,ignore
//! match FileManager::classify_path(&input).await {
//!     PathKind::File => { /* single file flow */ }
//!     PathKind::Dir => { /* directory walk */ }
//!     PathKind::Missing => { /* fatal at top level */ }
//! }
//! ```

use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Classification of an input path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Existing regular file
    File,
    /// Existing directory
    Dir,
    /// Path does not exist (or is neither file nor directory)
    Missing,
}

/// Manages path classification and directory listing
pub struct FileManager;

impl FileManager {
    /// Classify a path as file, directory, or missing. Existence is checked
    /// first; a missing path short-circuits without type inspection.
    pub async fn classify_path(path: &Path) -> PathKind {
        match fs::metadata(path).await {
            Err(_) => PathKind::Missing,
            Ok(metadata) if metadata.is_file() => PathKind::File,
            Ok(metadata) if metadata.is_dir() => PathKind::Dir,
            Ok(_) => PathKind::Missing,
        }
    }

    /// List the immediate entries of one directory level, sorted by name.
    pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            entries.push(entry?.path().to_path_buf());
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_classify_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let ghost = temp_dir.path().join("does-not-exist.png");
        assert_eq!(FileManager::classify_path(&ghost).await, PathKind::Missing);
    }

    #[tokio::test]
    async fn test_classify_file_and_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("photo.jpg");
        std::fs::write(&file_path, b"stub").unwrap();

        assert_eq!(FileManager::classify_path(&file_path).await, PathKind::File);
        assert_eq!(
            FileManager::classify_path(temp_dir.path()).await,
            PathKind::Dir
        );
    }

    #[test]
    fn test_list_entries_single_level_sorted() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), b"b").unwrap();
        std::fs::write(temp_dir.path().join("a.jpg"), b"a").unwrap();
        let nested = temp_dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("deep.png"), b"deep").unwrap();

        let entries = FileManager::list_entries(temp_dir.path()).unwrap();
        let names: Vec<_> = entries
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();

        // one level only: the subdirectory itself is listed, its content is not
        assert_eq!(names, vec!["a.jpg", "b.txt", "nested"]);
    }
}
