use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::ProfitmapConfig;
use crate::errors::ProfitmapError;

pub const CONFIG_FILE_NAME: &str = ".profitmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<ProfitmapConfig, ProfitmapError> {
    Ok(toml::from_str::<ProfitmapConfig>(contents)?)
}

/// Load an explicitly requested config file. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<ProfitmapConfig, ProfitmapError> {
    let contents = read_config_file(path).map_err(|e| ProfitmapError::io(path, e))?;
    let config = parse_config(&contents).map_err(|e| {
        ProfitmapError::config(format!("failed to parse {}: {}", path.display(), e))
    })?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ProfitmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Failed to parse {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while walking up the tree
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.profitmap.toml`.
pub fn discover_config(start: PathBuf) -> ProfitmapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ProfitmapConfig::default()
        })
}

pub fn load_config() -> ProfitmapConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ProfitmapConfig::default()
        }
    }
}
