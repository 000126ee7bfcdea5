//! `config.toml` storage.

use crate::paths::CodecrtPaths;
use codecrt_core::config::AppConfig;
use codecrt_core::{CodecrtError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Loads [`AppConfig`] from a TOML file.
///
/// A missing or empty file is the default configuration; a malformed one is
/// an error so typos are not silently ignored.
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Storage at the default location (~/.config/codecrt/config.toml).
    pub fn new() -> Result<Self> {
        let path = CodecrtPaths::config_file().map_err(|e| CodecrtError::config(e.to_string()))?;
        Ok(Self { path })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!("[ConfigStorage] {} not found, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        let config = toml::from_str(&content)?;
        tracing::info!("[ConfigStorage] Loaded {}", self.path.display());
        Ok(config)
    }

    /// Loads the file and applies the process environment on top.
    pub fn load_with_env(&self) -> Result<AppConfig> {
        let mut config = self.load()?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codecrt_core::Era;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(storage.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[execution]\nbase_url = \"http://localhost:2000/api/v2\"\n\n[terminal]\nstart_mode = \"1985\"\n",
        )
        .unwrap();

        let config = ConfigStorage::with_path(path).load().unwrap();
        assert_eq!(config.execution.base_url, "http://localhost:2000/api/v2");
        assert_eq!(config.terminal.start_mode, Era::Era1985);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[terminal\nstart_mode = 1").unwrap();

        let err = ConfigStorage::with_path(path).load().unwrap_err();
        assert!(matches!(err, CodecrtError::Serialization { ref format, .. } if format == "TOML"));
    }
}
