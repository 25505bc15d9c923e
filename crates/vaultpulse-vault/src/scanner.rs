//! Recursive note scanning.

use std::path::PathBuf;
use vaultpulse_core::{Error, Result, VaultConfig};
use walkdir::WalkDir;

/// Collect every note file under the vault root, sorted by path.
///
/// Any entry named like the configured settings directory is pruned from
/// the walk wherever it sits in the tree. Other hidden directories are
/// scanned like any other; only the settings name is special.
pub fn scan_notes(config: &VaultConfig) -> Result<Vec<PathBuf>> {
    let settings_dir = config.settings_dir.as_str();

    let mut notes = Vec::new();
    for entry in WalkDir::new(&config.path)
        .into_iter()
        .filter_entry(|entry| entry.file_name().to_str() != Some(settings_dir))
    {
        let entry = entry.map_err(|e| Error::io(e.into()))?;
        if entry.file_type().is_file()
            && let Some(ext) = entry.path().extension().and_then(|e| e.to_str())
            && ext == config.note_extension
        {
            notes.push(entry.into_path());
        }
    }

    notes.sort();
    Ok(notes)
}
