pub mod input;
pub mod output;
pub mod writers;

pub use input::{parse_csv, parse_json, parse_toml, read_session_table, InputFormat};
pub use output::{create_writer, sort_sessions, OutputFormat, OutputWriter, SortKey};

use crate::errors::{ProfitmapError, Result};
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ProfitmapError::io(path, e))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path).map_err(|e| ProfitmapError::io(path, e))?;
    }
    Ok(())
}

/// Create `path` for writing, creating parent directories as needed.
pub fn create_output_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::File::create(path).map_err(|e| ProfitmapError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_output_file_makes_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("reports").join("2026").join("out.csv");
        create_output_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_ensure_dir_ignores_empty_parent() {
        // Path::new("out.csv").parent() is Some("")
        assert!(ensure_dir(Path::new("")).is_ok());
    }
}
