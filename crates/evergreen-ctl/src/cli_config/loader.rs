//! Config file discovery for `.evergreen-ctl.toml`.
//!
//! Precedence: `./.evergreen-ctl.toml`, then `~/.config/evergreen-ctl.toml`.
//! A missing or broken file falls back to defaults.

use std::path::{Path, PathBuf};

use super::CliConfig;

pub(crate) const CONFIG_FILENAME: &str = ".evergreen-ctl.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "evergreen-ctl.toml";

/// Load CLI config from the first discovered location, or return defaults.
pub(crate) fn load_cli_config() -> CliConfig {
    match find_config_file(Path::new(".")) {
        Some(path) => load_from(&path),
        None => CliConfig::default(),
    }
}

fn load_from(path: &Path) -> CliConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to read CLI config, using defaults");
            return CliConfig::default();
        }
    };

    match toml::from_str(&contents) {
        Ok(config) => {
            tracing::debug!(?path, "Loaded CLI config");
            config
        }
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to parse CLI config, using defaults");
            CliConfig::default()
        }
    }
}

fn find_config_file(project_dir: &Path) -> Option<PathBuf> {
    let local = project_dir.join(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    let global = home_dir()?
        .join(GLOBAL_CONFIG_DIR)
        .join(GLOBAL_CONFIG_FILENAME);
    global.is_file().then_some(global)
}

/// Resolve a leading `~/` against the home directory.
pub(crate) fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}
