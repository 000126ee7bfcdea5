//! Unified path management for codecrt configuration files.
//!
//! ```text
//! ~/.config/codecrt/           # Config directory
//! ├── config.toml              # Application configuration
//! ├── secret.json              # API keys
//! ├── history.txt              # Default readline history
//! └── logs/                    # Application logs
//!     └── codecrt.log.YYYY-MM-DD
//! ```

use codecrt_core::config::{OpenRouterSecret, SecretConfig};
use std::path::PathBuf;

const APP_DIR: &str = "codecrt";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct CodecrtPaths;

impl CodecrtPaths {
    /// Returns the codecrt configuration directory (e.g. `~/.config/codecrt/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    pub fn history_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("history.txt"))
    }

    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }

    /// Ensures the secret file exists, creating it with an empty template if it doesn't.
    ///
    /// On Unix the new file is created with mode 600.
    pub fn ensure_secret_file() -> Result<PathBuf, std::io::Error> {
        let secret_path = Self::secret_file()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()))?;
        write_secret_template(&secret_path)?;
        Ok(secret_path)
    }
}

/// Writes the `secret.json` template at `path` unless a file is already there.
pub(crate) fn write_secret_template(path: &std::path::Path) -> Result<(), std::io::Error> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let template = SecretConfig {
        openrouter: Some(OpenRouterSecret {
            api_key: String::new(),
            model_name: None,
        }),
    };
    let json = serde_json::to_string_pretty(&template).map_err(std::io::Error::other)?;
    std::fs::write(path, json)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    tracing::info!("[Paths] Created secret template at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_files_live_under_config_dir() {
        let Ok(config_dir) = CodecrtPaths::config_dir() else {
            // No home directory in this environment
            return;
        };
        assert!(config_dir.ends_with("codecrt"));
        assert!(CodecrtPaths::config_file().unwrap().starts_with(&config_dir));
        assert!(CodecrtPaths::secret_file().unwrap().ends_with("secret.json"));
        assert!(CodecrtPaths::logs_dir().unwrap().ends_with("logs"));
    }

    #[test]
    fn test_secret_template_is_written_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("secret.json");

        write_secret_template(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"openrouter\""));
        assert!(written.contains("\"api_key\": \"\""));

        std::fs::write(&path, "{}").unwrap();
        write_secret_template(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
