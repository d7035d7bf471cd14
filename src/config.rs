//! Configuration loading, legacy normalization and validation.
//!
//! Settings come from three places, applied in this order:
//! 1. An optional config file (YAML, or TOML when the path ends in `.toml`)
//! 2. Command-line flags, which override file values
//! 3. Environment variables, consulted only for values still missing
//!
//! The result is a validated [`Settings`] value; every failure here is fatal
//! and happens before any network call.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::batch::SecretRequest;
use crate::cli::Cli;
use crate::constants;
use crate::errors::ConfigError;
use crate::validation;

/// Raw config file contents.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    /// GitHub username or organization name.
    pub owner: Option<String>,
    /// Repository name.
    pub repo: Option<String>,
    /// Personal access token.
    pub token: Option<String>,
    /// API base URL for GitHub Enterprise Server.
    pub api_url: Option<String>,
    /// Secret name to raw value (literal or `file(<path>)`).
    pub secrets: BTreeMap<String, String>,
    /// Deprecated single-secret name, folded into `secrets` on load.
    pub secret: Option<String>,
    /// Deprecated single-secret value, folded into `secrets` on load.
    pub value: Option<String>,
}

impl FileConfig {
    /// Load a config file and fold the legacy `secret`/`value` pair into
    /// `secrets`.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_string(),
            source,
        })?;

        let mut config = Self::parse(path, &content)?;
        config.normalize_legacy();
        tracing::debug!(path, secrets = config.secrets.len(), "loaded config file");
        Ok(config)
    }

    fn parse(path: &str, content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let parse_error = |message: String| ConfigError::ParseError {
            path: path.to_string(),
            message,
        };

        let is_toml = Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            toml::from_str(content).map_err(|e| parse_error(e.to_string()))
        } else {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
    }

    /// Move the deprecated single `secret`/`value` pair into `secrets`.
    ///
    /// The pair only counts when both halves are non-empty; it overwrites a
    /// `secrets` entry with the same name.
    pub fn normalize_legacy(&mut self) {
        let name = self.secret.take().filter(|s| !s.is_empty());
        let value = self.value.take().filter(|v| !v.is_empty());

        match (name, value) {
            (Some(name), Some(value)) => {
                self.secrets.insert(name, value);
            }
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!("ignoring config 'secret'/'value': both fields must be set");
            }
            (None, None) => {}
        }
    }
}

/// Values read from the process environment.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    pub token: Option<String>,
    pub api_url: Option<String>,
}

impl Environment {
    /// Snapshot the relevant environment variables.
    pub fn from_process() -> Self {
        Self {
            token: std::env::var(constants::env::GITHUB_TOKEN).ok(),
            api_url: std::env::var(constants::env::GITHUB_API_URL).ok(),
        }
    }
}

/// Validated settings for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub owner: String,
    pub repo: String,
    pub token: String,
    pub api_url: Option<String>,
    /// Sorted by name, which fixes the processing order.
    pub secrets: BTreeMap<String, String>,
}

impl Settings {
    /// Load the config file named by `--config` (if any) and merge it with
    /// flags and environment.
    pub fn load(cli: &Cli, env: &Environment) -> Result<Self, ConfigError> {
        let file = match non_empty(cli.config.as_deref()) {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        Self::merge(file, cli, env)
    }

    /// Merge an already-normalized file config with flags and environment,
    /// then validate.
    pub fn merge(file: FileConfig, cli: &Cli, env: &Environment) -> Result<Self, ConfigError> {
        let owner = pick(cli.owner.as_deref(), file.owner);
        let repo = pick(cli.repo.as_deref(), file.repo);
        let token = pick(cli.token.as_deref(), file.token);
        let api_url = pick(cli.api_url.as_deref(), file.api_url);

        let mut secrets = file.secrets;
        match (non_empty(cli.secret.as_deref()), non_empty(cli.value.as_deref())) {
            (Some(name), Some(value)) => {
                if secrets.insert(name.to_string(), value.to_string()).is_some() {
                    tracing::debug!(secret = name, "--secret overrides config entry");
                }
            }
            (None, None) => {}
            _ => return Err(ConfigError::UnpairedSecretFlag),
        }

        let (Some(owner), Some(repo)) = (owner, repo) else {
            return Err(ConfigError::MissingIdentity);
        };
        validation::validate_repo_owner(&owner)?;
        validation::validate_repo_name(&repo)?;

        if secrets.is_empty() {
            return Err(ConfigError::NoSecrets);
        }

        let token = token
            .or_else(|| env.token.clone().filter(|t| !t.is_empty()))
            .ok_or(ConfigError::MissingToken)?;

        let api_url = api_url.or_else(|| env.api_url.clone().filter(|u| !u.is_empty()));

        Ok(Self {
            owner,
            repo,
            token,
            api_url,
            secrets,
        })
    }

    /// Repository path in the format "owner/repo".
    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Secrets to process, in name order.
    pub fn requests(&self) -> Vec<SecretRequest> {
        self.secrets
            .iter()
            .map(|(name, raw_value)| SecretRequest::new(name, raw_value))
            .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A non-empty flag wins over a non-empty file value.
fn pick(flag: Option<&str>, file: Option<String>) -> Option<String> {
    non_empty(flag)
        .map(str::to_string)
        .or_else(|| file.filter(|v| !v.is_empty()))
}
