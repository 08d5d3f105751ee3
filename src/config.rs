//! Configuration management for the Last.fm artists exporter.
//!
//! This module merges option values from two sources into a single [`Options`]
//! record: command-line flags and an optional INI-format config file. Command
//! line values always win key-by-key; the config file only fills the gaps.
//!
//! The resolution order is dictated by the `--config` flag: the command line
//! has to be inspected first to discover an override of the config file path
//! before that file can be read. The file is read exactly once — a `config`
//! key *inside* the file is merged like any other key but never triggers a
//! second read.

use std::{
    collections::HashMap,
    env,
    path::{Path, PathBuf},
};

use ini::Ini;

use crate::{
    error::LastFmError,
    types::{CliOverrides, Options},
    warning,
};

/// Config file name probed when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

/// Minimum play count an artist needs to be included in the output.
pub const DEFAULT_PLAYS_LIMIT: u64 = 1;

/// Maximum number of artists requested from the API in one call.
pub const DEFAULT_ARTISTS_LIMIT: u64 = 9999;

const USER_KEY: &str = "user";
const PLAYS_LIMIT_KEY: &str = "plays-limit";
const ARTISTS_LIMIT_KEY: &str = "artists-limit";
const FILE_KEY: &str = "file";
const CONFIG_KEY: &str = "config";

/// Merges command-line values with the optional config file into [`Options`].
///
/// The config file path is taken from the command line if given, otherwise
/// [`DEFAULT_CONFIG_FILE`] is probed next to the executable and in the
/// working directory. A missing file is not an error; an unreadable or
/// malformed file degrades to "no file options" with a warning.
///
/// # Returns
///
/// Returns the resolved `Options`, or [`LastFmError::Config`] if no username
/// is present in either source after merging.
///
/// # Example
///
/// ```
/// use lastfm_artists::{config, types::CliOverrides};
///
/// let options = config::resolve(CliOverrides {
///     user: Some("alice".to_string()),
///     ..Default::default()
/// })
/// .await?;
/// assert_eq!(options.username, "alice");
/// ```
pub async fn resolve(cli: CliOverrides) -> Result<Options, LastFmError> {
    let config_name = cli
        .config
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

    let file_options = match locate_config_file(&config_name) {
        Some(path) => load_config_file(&path).await,
        None => HashMap::new(),
    };

    let username = cli
        .user
        .or_else(|| file_options.get(USER_KEY).cloned())
        .ok_or_else(|| LastFmError::Config("Please specify user name".to_string()))?;

    let plays_limit = cli
        .plays_limit
        .or_else(|| parse_limit(&file_options, PLAYS_LIMIT_KEY))
        .unwrap_or(DEFAULT_PLAYS_LIMIT);

    let artists_limit = cli
        .artists_limit
        .or_else(|| parse_limit(&file_options, ARTISTS_LIMIT_KEY))
        .unwrap_or(DEFAULT_ARTISTS_LIMIT);

    let output_file = cli.file.or_else(|| file_options.get(FILE_KEY).cloned());

    let config_file = cli
        .config
        .or_else(|| file_options.get(CONFIG_KEY).cloned())
        .unwrap_or(config_name);

    Ok(Options {
        username,
        plays_limit,
        artists_limit,
        output_file,
        config_file,
    })
}

fn parse_limit(options: &HashMap<String, String>, key: &str) -> Option<u64> {
    let raw = options.get(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warning!("Ignoring non-numeric {} value in config file: {}", key, raw);
            None
        }
    }
}

/// Probes for the config file next to the executable first, then relative
/// to the working directory.
fn locate_config_file(name: &str) -> Option<PathBuf> {
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    let candidate = PathBuf::from(name);
    candidate.is_file().then_some(candidate)
}

async fn load_config_file(path: &Path) -> HashMap<String, String> {
    let content = match async_fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            warning!("Cannot read config file {}: {}", path.display(), e);
            return HashMap::new();
        }
    };

    match Ini::load_from_str(&content) {
        Ok(ini) => flatten_sections(&ini),
        Err(e) => {
            warning!("Cannot parse config file {}: {}", path.display(), e);
            HashMap::new()
        }
    }
}

/// Section headers are ignored: all key/value pairs share one flat key
/// space, later occurrences overriding earlier ones.
fn flatten_sections(ini: &Ini) -> HashMap<String, String> {
    let mut flat = HashMap::new();
    for (_section, properties) in ini.iter() {
        for (key, value) in properties.iter() {
            flat.insert(key.to_string(), value.to_string());
        }
    }
    flat
}
