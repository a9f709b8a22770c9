// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{RankverError, Result};
use crate::version::SortOptions;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const HOME_ENV: &str = "RANKVER_HOME";
const ENV_PREFIX: &str = "RANKVER";
const DEFAULT_HOME_DIR: &str = ".rankver";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RankverConfig {
    #[serde(skip)]
    pub home: PathBuf,

    #[serde(default)]
    pub sort: SortConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SortConfig {
    #[serde(default)]
    pub reverse: bool,

    #[serde(default)]
    pub unique: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

/// Load configuration from `$RANKVER_HOME` (or `~/.rankver`), layered with
/// `RANKVER_*` environment overrides.
pub fn new_rankver_config() -> Result<RankverConfig> {
    let home = match std::env::var_os(HOME_ENV) {
        Some(home) => PathBuf::from(home),
        None => dirs::home_dir()
            .map(|dir| dir.join(DEFAULT_HOME_DIR))
            .ok_or_else(|| {
                RankverError::ConfigError(format!(
                    "Unable to determine home directory; set {HOME_ENV}"
                ))
            })?,
    };

    RankverConfig::load(&home)
}

impl RankverConfig {
    pub fn load(home: &Path) -> Result<Self> {
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        Self::load_with_environment(home, environment)
    }

    fn load_with_environment(home: &Path, environment: Environment) -> Result<Self> {
        let config_path = home.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            log::debug!("Loading config from {config_path:?}");
        } else {
            log::debug!("Config file not found at {config_path:?}, using defaults");
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(environment)
            .build()?;

        let mut config: RankverConfig = settings.try_deserialize()?;
        config.home = home.to_path_buf();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = self.home.join(CONFIG_FILE_NAME);
        fs::create_dir_all(&self.home)?;

        let contents = toml::to_string_pretty(self).map_err(|e| {
            RankverError::ConfigError(format!("Failed to serialize config: {e}"))
        })?;

        fs::write(&config_path, contents)?;
        log::debug!("Saved config to {config_path:?}");
        Ok(())
    }

    /// Sort defaults from configuration, with command-line flags OR'ed in.
    pub fn sort_options(&self, reverse: bool, unique: bool) -> SortOptions {
        SortOptions {
            reverse: reverse || self.sort.reverse,
            unique: unique || self.sort.unique,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> Environment {
        let source = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn test_default_config() {
        let config = RankverConfig::default();
        assert!(!config.sort.reverse);
        assert!(!config.sort.unique);
        assert!(config.output.color);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = RankverConfig::load_with_environment(temp_dir.path(), env_from(&[])).unwrap();
        assert!(!config.sort.reverse);
        assert!(config.output.color);
        assert_eq!(config.home, temp_dir.path());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let home = temp_dir.path().join("nested");

        let mut config = RankverConfig {
            home: home.clone(),
            ..Default::default()
        };
        config.sort.unique = true;
        config.output.color = false;
        config.save().unwrap();

        let loaded = RankverConfig::load_with_environment(&home, env_from(&[])).unwrap();
        assert!(loaded.sort.unique);
        assert!(!loaded.sort.reverse);
        assert!(!loaded.output.color);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[sort]\nreverse = true\n",
        )
        .unwrap();

        let loaded =
            RankverConfig::load_with_environment(temp_dir.path(), env_from(&[])).unwrap();
        assert!(loaded.sort.reverse);
        assert!(!loaded.sort.unique);
        assert!(loaded.output.color);
    }

    #[test]
    fn test_environment_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[sort]\nreverse = false\n",
        )
        .unwrap();

        let env = env_from(&[
            ("RANKVER_SORT__REVERSE", "true"),
            ("RANKVER_OUTPUT__COLOR", "false"),
        ]);
        let loaded = RankverConfig::load_with_environment(temp_dir.path(), env).unwrap();
        assert!(loaded.sort.reverse);
        assert!(!loaded.output.color);
    }

    #[test]
    fn test_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[sort]\nreverse = \"sometimes\"\n",
        )
        .unwrap();

        let result = RankverConfig::load_with_environment(temp_dir.path(), env_from(&[]));
        assert!(matches!(result, Err(RankverError::ConfigError(_))));
    }

    #[test]
    fn test_sort_options_merge_flags() {
        let mut config = RankverConfig::default();
        assert_eq!(config.sort_options(false, false), SortOptions::default());

        config.sort.unique = true;
        let options = config.sort_options(true, false);
        assert!(options.reverse);
        assert!(options.unique);
    }
}
