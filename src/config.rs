use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".hanlocrc.json";

/// Chat-completion endpoint used when the config file does not override it.
pub const DEFAULT_ENDPOINT: &str = "https://open.bigmodel.cn/api/paas/v4/chat/completions";

pub const DEFAULT_MODEL: &str = "glm-4-flash-250414";

/// Minimum plausible length for a backend API key.
pub const MIN_API_KEY_LEN: usize = 10;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Backend API key. May be left empty in the file and supplied via
    /// `--api-key` or the `HANLOC_API_KEY` environment variable instead.
    #[serde(default)]
    pub api_key: String,
    /// Directory of installed components, relative or absolute.
    #[serde(default = "default_components_root")]
    pub components_root: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Glob patterns of component directory names to leave untouched.
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_components_root() -> String {
    "custom_components".to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            components_root: default_components_root(),
            endpoint: default_endpoint(),
            model: default_model(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }
}

/// Why an API key was rejected.
///
/// The variants carry the same error codes the setup flow reports, so callers
/// can surface `missing_api_key` / `invalid_api_key` verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyError {
    Missing,
    TooShort,
}

impl ApiKeyError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiKeyError::Missing => "missing_api_key",
            ApiKeyError::TooShort => "invalid_api_key",
        }
    }
}

impl std::fmt::Display for ApiKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiKeyError::Missing => write!(f, "API key is not configured ({})", self.code()),
            ApiKeyError::TooShort => write!(
                f,
                "API key must be at least {} characters ({})",
                MIN_API_KEY_LEN,
                self.code()
            ),
        }
    }
}

impl std::error::Error for ApiKeyError {}

/// Check that a backend API key is present and plausible.
pub fn validate_api_key(api_key: &str) -> Result<(), ApiKeyError> {
    let trimmed = api_key.trim();
    if trimmed.is_empty() {
        return Err(ApiKeyError::Missing);
    }
    if trimmed.len() < MIN_API_KEY_LEN {
        return Err(ApiKeyError::TooShort);
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
