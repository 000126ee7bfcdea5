//! `secret.json` access.
//!
//! The file holds the OpenRouter key in plaintext and is only ever read here;
//! the template is written once by [`CodecrtPaths::ensure_secret_file`].

use crate::paths::CodecrtPaths;
use codecrt_core::config::{OpenRouterSecret, SecretConfig};
use codecrt_core::{CodecrtError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only view of the credentials file.
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    /// Storage at `~/.config/codecrt/secret.json`.
    pub fn new() -> Result<Self> {
        let path = CodecrtPaths::secret_file().map_err(|e| CodecrtError::config(e.to_string()))?;
        Ok(Self { path })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parsed file contents, `None` when the file does not exist.
    pub fn load(&self) -> Result<Option<SecretConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// The OpenRouter entry, if present with a non-empty key.
    ///
    /// An unfilled template counts as absent so the environment can still
    /// supply the key. A malformed file is logged and treated as absent.
    pub fn openrouter(&self) -> Option<OpenRouterSecret> {
        let secret = match self.load() {
            Ok(secret) => secret?,
            Err(e) => {
                tracing::warn!("[SecretStorage] Ignoring {}: {}", self.path.display(), e);
                return None;
            }
        };
        secret
            .openrouter
            .filter(|entry| !entry.api_key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_with(contents: Option<&str>) -> (TempDir, SecretStorage) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        if let Some(contents) = contents {
            fs::write(&path, contents).unwrap();
        }
        (temp_dir, SecretStorage::with_path(path))
    }

    #[test]
    fn test_missing_file_is_none() {
        let (_dir, storage) = storage_with(None);
        assert_eq!(storage.load().unwrap(), None);
        assert!(storage.openrouter().is_none());
    }

    #[test]
    fn test_key_and_model_are_read() {
        let (_dir, storage) = storage_with(Some(
            r#"{ "openrouter": { "api_key": "sk-or-123", "model_name": "openai/gpt-4o" } }"#,
        ));
        let entry = storage.openrouter().unwrap();
        assert_eq!(entry.api_key, "sk-or-123");
        assert_eq!(entry.model_name.as_deref(), Some("openai/gpt-4o"));
    }

    #[test]
    fn test_unfilled_template_counts_as_absent() {
        let (_dir, storage) = storage_with(Some(r#"{ "openrouter": { "api_key": "" } }"#));
        assert!(storage.load().unwrap().unwrap().openrouter.is_some());
        assert!(storage.openrouter().is_none());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let (_dir, storage) = storage_with(Some("{ not json"));
        assert!(matches!(
            storage.load(),
            Err(CodecrtError::Serialization { .. })
        ));
        assert!(storage.openrouter().is_none());
    }
}
