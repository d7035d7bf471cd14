//! `.env` discovery.
//!
//! A token kept in a dotenv file is picked up without exporting it in the
//! shell. Locations follow the XDG Base Directory Specification, with the
//! current directory checked first.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "gh-secret-seal";

/// Candidate `.env` locations, highest priority first:
/// 1. Current directory/.env
/// 2. XDG_CONFIG_HOME/gh-secret-seal/.env (if XDG_CONFIG_HOME is set)
/// 3. ~/.config/gh-secret-seal/.env
pub fn env_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(current_dir) = env::current_dir() {
        candidates.push(current_dir.join(".env"));
    }

    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME")
        && !xdg_config_home.is_empty()
    {
        candidates.push(PathBuf::from(xdg_config_home).join(APP_DIR).join(".env"));
    }

    if let Some(home) = dirs::home_dir() {
        let default_xdg_env = home.join(".config").join(APP_DIR).join(".env");
        if !candidates.contains(&default_xdg_env) {
            candidates.push(default_xdg_env);
        }
    }

    candidates
}

/// Load the first existing `.env` file. Variables already set in the
/// process environment are left untouched.
///
/// Returns the path that was loaded, if any.
pub fn load_env_file() -> Option<PathBuf> {
    let path = env_file_candidates().into_iter().find(|p| p.is_file())?;

    match dotenv::from_path(&path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded .env file");
            Some(path)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to load .env file: {}", e);
            None
        }
    }
}
