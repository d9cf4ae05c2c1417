//! Configuration loading and discovery for `xfl.toml`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::schema::Config;

/// Name of the configuration file.
pub const CONFIG_FILE: &str = "xfl.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse xfl.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override input directory
    pub input: Option<PathBuf>,
    /// Override output directory
    pub output: Option<PathBuf>,
    /// Force pretty-printed JSON
    pub pretty_json: Option<bool>,
    /// Skip the media copy
    pub copy_media: Option<bool>,
    /// Worker pool size
    pub jobs: Option<usize>,
}

impl CliOverrides {
    /// Apply these overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.project.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.project.output = output.clone();
        }
        if let Some(pretty) = self.pretty_json {
            config.convert.pretty_json = pretty;
        }
        if let Some(copy) = self.copy_media {
            config.convert.copy_media = copy;
        }
        if let Some(jobs) = self.jobs {
            config.convert.jobs = Some(jobs);
        }
    }
}

/// Find `xfl.toml` by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    find_config_from(cwd)
}

/// Find `xfl.toml` by walking up from a starting directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut dir = Some(start.as_path());
    while let Some(current) = dir {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = current.parent();
    }
    None
}

/// Load configuration.
///
/// With an explicit path the file must exist and parse; without one, a
/// discovered `xfl.toml` is used if present, else all defaults. Relative
/// project directories in a loaded file are rebased onto the file's own
/// directory.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let resolved = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    let Some(config_path) = resolved else {
        return Ok(Config::default());
    };

    let text = fs::read_to_string(&config_path)?;
    let mut config: Config = toml::from_str(&text)?;
    if let Some(dir) = config_path.parent() {
        config.rebase_on(dir);
    }
    Ok(config)
}
