use super::types::{StoreState, STORE_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the default store file path (~/.config/lead-distress/store.json)
pub fn get_store_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("store.json"))
}

/// Load the store from a JSON file
///
/// If the file doesn't exist, returns a new empty state.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_store(path: &Path) -> Result<StoreState> {
    if !path.exists() {
        return Ok(StoreState::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open store file at {}", path.display()))?;

    let state: StoreState = serde_json::from_reader(file)
        .with_context(|| format!("Failed to load store from {}", path.display()))?;

    if state.version != STORE_VERSION {
        anyhow::bail!("Unsupported store version: {}", state.version);
    }

    Ok(state)
}

/// Save the store to a JSON file atomically
///
/// The file is either fully replaced or left untouched.
/// Creates the parent directory if it doesn't exist.
pub fn save_store(path: &Path, state: &StoreState) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create store directory at {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, state).context("Failed to serialize store")?;

    file.commit().context("Failed to save store")?;

    Ok(())
}
