//! Writes exported editor contents to disk.

use codecrt_core::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `export` payloads into a target directory.
pub struct ExportWriter {
    dir: PathBuf,
}

impl ExportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Writer targeting the process working directory.
    pub fn current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `contents` as `<dir>/<filename>`, creating the directory if needed.
    ///
    /// Only the final path component of `filename` is used.
    pub fn write(&self, filename: &str, contents: &str) -> Result<PathBuf> {
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| codecrt_core::CodecrtError::io(format!("invalid export file name '{filename}'")))?;
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        fs::write(&path, contents)?;
        tracing::info!("[Export] Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ExportWriter::new(temp_dir.path().join("out"));

        let path = writer.write("codecrt_2025-01-01T00-00-00.py", "print(1)\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "print(1)\n");
        assert!(path.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_directory_components_are_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ExportWriter::new(temp_dir.path());

        let path = writer.write("../escape.c", "int main(){}").unwrap();
        assert_eq!(path, temp_dir.path().join("escape.c"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ExportWriter::new(temp_dir.path());
        assert!(writer.write("..", "x").is_err());
    }
}
