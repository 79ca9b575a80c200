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

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const CONFIG_DIR_NAME: &str = "android-sdk-info";
pub const CONFIG_DIR_ENV_VAR: &str = "ANDROID_SDK_INFO_CONFIG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SdkConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub preferences: PreferencesConfig,
}

/// Explicit locations; each one takes precedence over discovery.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(default)]
    pub android_sdk: Option<PathBuf>,

    #[serde(default)]
    pub android_ndk: Option<PathBuf>,

    #[serde(default)]
    pub java_sdk: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PreferencesConfig {
    #[serde(default)]
    pub build_tools_version: Option<String>,

    #[serde(default)]
    pub cmdline_tools_version: Option<String>,
}

impl SdkConfig {
    /// `$ANDROID_SDK_INFO_CONFIG_DIR`, else `<config dir>/android-sdk-info`.
    pub fn default_location() -> Option<PathBuf> {
        if let Some(dir) = env::var_os(CONFIG_DIR_ENV_VAR).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(dir));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    pub fn load_default() -> Result<Self> {
        match Self::default_location() {
            Some(dir) => Self::load(&dir),
            None => {
                log::debug!("No configuration directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: SdkConfig = toml::from_str(&contents)
            .map_err(|e| SdkError::ConfigError(format!("Failed to parse config.toml: {e}")))?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }

    pub fn preferred_build_tools_version(&self) -> Option<&str> {
        self.preferences
            .build_tools_version
            .as_deref()
            .filter(|v| !v.is_empty())
    }

    pub fn preferred_cmdline_tools_version(&self) -> Option<&str> {
        self.preferences
            .cmdline_tools_version
            .as_deref()
            .filter(|v| !v.is_empty())
    }
}
