use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::RiskmapConfig;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML config string and check the catalog invariants.
pub fn parse_config(contents: &str) -> Result<RiskmapConfig> {
    let config: RiskmapConfig =
        toml::from_str(contents).context("failed to parse riskmap config")?;
    config
        .catalog()
        .validate()
        .context("invalid criteria catalog")?;
    Ok(config)
}

/// Pure function to try loading config from a specific path
fn try_load_config_from_path(config_path: &Path) -> Option<RiskmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("ignoring {}: {:#}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
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

/// Load an explicitly named config file. Unlike discovery, every
/// failure here is fatal.
pub fn load_config_from(path: &Path) -> Result<RiskmapConfig> {
    let contents = read_config_file(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&contents)
}

/// Load configuration from `.riskmap.toml`, searching the directory
/// hierarchy, falling back to defaults when nothing usable is found.
pub fn load_config() -> RiskmapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    // Get current directory or return default
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("failed to get current directory: {e}. Using default config.");
            return RiskmapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".riskmap.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "no config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RiskmapConfig::default()
        })
}
