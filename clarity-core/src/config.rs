//! Clarity configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::day_start::DayStart;
use crate::error::{ClarityError, ClarityResult};
use crate::layout::DEFAULT_BUFFER_MINUTES;

/// Environment variable holding the extraction credential. Takes precedence over the file.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

fn default_buffer_minutes() -> i64 {
    DEFAULT_BUFFER_MINUTES
}

/// Configuration at ~/.config/clarity/config.toml. Every key is optional.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClarityConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default = "default_buffer_minutes")]
    pub buffer_minutes: i64,

    #[serde(default)]
    pub day_start: DayStart,

    /// Where exported .ics files go. Defaults to the working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for ClarityConfig {
    fn default() -> Self {
        ClarityConfig {
            api_key: None,
            model: None,
            max_tokens: None,
            base_url: None,
            buffer_minutes: DEFAULT_BUFFER_MINUTES,
            day_start: DayStart::default(),
            output_dir: None,
        }
    }
}

impl ClarityConfig {
    pub fn config_path() -> ClarityResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ClarityError::Config("Could not determine config directory".into()))?
            .join("clarity");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> ClarityResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> ClarityResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClarityError::Config(format!("Could not read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| ClarityError::Config(format!("Could not parse {}: {e}", path.display())))
    }

    /// Directory for exported files, with a leading `~` expanded.
    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).into_owned()),
            None => PathBuf::from("."),
        }
    }

    /// The extraction credential, from the environment or the config file.
    pub fn api_key(&self) -> ClarityResult<String> {
        resolve_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }

    /// Create a config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ClarityResult<()> {
        let contents = format!(
            "\
# Clarity Planner configuration

# Anthropic API key (the {API_KEY_ENV} environment variable wins if set):
# api_key = \"sk-ant-...\"

# Model and response size for task extraction:
# model = \"claude-sonnet-4-5\"
# max_tokens = 2048

# Minutes of breathing room between tasks:
# buffer_minutes = {DEFAULT_BUFFER_MINUTES}

# When the first task starts (quarter hours only):
# day_start = \"{}\"

# Where exported .ics files are written:
# output_dir = \"~/Downloads\"
",
            DayStart::default()
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClarityError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ClarityError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn resolve_api_key(from_env: Option<String>, from_file: Option<&str>) -> ClarityResult<String> {
    from_env
        .filter(|k| !k.trim().is_empty())
        .or_else(|| {
            from_file
                .filter(|k| !k.trim().is_empty())
                .map(str::to_string)
        })
        .map(|k| k.trim().to_string())
        .ok_or_else(|| {
            ClarityError::Config(format!(
                "{API_KEY_ENV} not set.\n\n\
                Export it in your shell, or add it to the config file:\n\n\
                api_key = \"sk-ant-...\""
            ))
        })
}
