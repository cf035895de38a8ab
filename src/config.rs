use log::debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "quick-commit";

/// Overrides the config file location (mainly for tests and CI).
pub const CONFIG_ENV: &str = "QUICK_COMMIT_CONFIG";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Remote pushed to, and registered by `first`.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Animated spinners while each step runs.
    #[serde(default = "default_progress")]
    pub progress: bool,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_progress() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            progress: default_progress(),
        }
    }
}

pub fn load() -> miette::Result<Config> {
    let config: Config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            debug!("loading config from {CONFIG_ENV}");
            confy::load_path(PathBuf::from(path))
        }
        None => confy::load(APP_NAME, None),
    }
    .map_err(|e| miette::miette!("Failed to load config: {}", e))?;

    Ok(config)
}
