use std::fs;
use std::path::Path;

use crate::model::config::Config;

/// Read `config.toml` from the data directory.
///
/// Preferences are best-effort: a missing or malformed file yields the
/// defaults rather than a startup failure.
pub fn read_config(data_dir: &Path) -> Config {
    let path = data_dir.join("config.toml");
    match fs::read_to_string(&path) {
        Ok(text) => toml::from_str(&text).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}
