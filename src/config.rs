use crate::error::{Result, TakeoutError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variables carrying the profile-lookup credentials.
pub const DATASET_ID_VAR: &str = "TAKEOUT_DATASET_ID";
pub const API_KEY_VAR: &str = "TAKEOUT_API_KEY";
pub const ACCOUNT_ID_VAR: &str = "TAKEOUT_ACCOUNT_ID";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub contacts: ContactsConfig,
    pub notes: NotesConfig,
}

/// Settings for the contact scraping pipeline. The lookup credentials are
/// deliberately not here; secrets come from the environment only.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactsConfig {
    /// JSON file holding an array of profile URL strings.
    pub input_file: PathBuf,
    /// Directory the timestamped contact report is written into.
    pub output_dir: PathBuf,
    /// Base URL of the profile-lookup service.
    pub api_base_url: String,
    /// Ask the lookup service to include work-experience data.
    pub include_experience: bool,
    /// Fixed part of the pause between lookups, in milliseconds.
    pub base_delay_ms: u64,
    /// Upper bound of the random jitter added to each pause.
    pub jitter_ms: u64,
    pub timeout_seconds: u64,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("input/profile_urls.json"),
            output_dir: PathBuf::from("output"),
            api_base_url: "https://api.profile-lookup.example".to_string(),
            include_experience: true,
            base_delay_ms: 2000,
            jitter_ms: 1500,
            timeout_seconds: 30,
        }
    }
}

/// Settings for the note conversion pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Directory scanned for exported `*.json` note files.
    pub input_dir: PathBuf,
    /// Root under which each run creates its timestamped output directory.
    pub output_root: PathBuf,
    /// Property names excluded from the metadata block at any depth.
    pub ignore_keys: Vec<String>,
    /// Metadata paths listed first in the rendered block, in this order.
    pub priority_keys: Vec<String>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input/notes"),
            output_root: PathBuf::from("output"),
            ignore_keys: vec![
                "title".to_string(),
                "textContent".to_string(),
                "isTrashed".to_string(),
                "isArchived".to_string(),
            ],
            priority_keys: vec![
                "createdTimestampUsec".to_string(),
                "userEditedTimestampUsec".to_string(),
                "labels".to_string(),
                "color".to_string(),
                "isPinned".to_string(),
            ],
        }
    }
}

impl Config {
    /// Reads the config file if present; a missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            TakeoutError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// The three values the profile-lookup service requires. All must be set
/// before a contacts run starts; a missing one aborts the run up front.
#[derive(Debug, Clone)]
pub struct LookupCredentials {
    pub dataset_id: String,
    pub api_key: String,
    pub account_id: String,
}

impl LookupCredentials {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            dataset_id: require_env(DATASET_ID_VAR)?,
            api_key: require_env(API_KEY_VAR)?,
            account_id: require_env(ACCOUNT_ID_VAR)?,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TakeoutError::Config(format!(
            "Missing required environment variable {}",
            name
        ))),
    }
}
