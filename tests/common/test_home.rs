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

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DISCOVERY_ENV_VARS: &[&str] = &[
    "ANDROID_HOME",
    "ANDROID_SDK_ROOT",
    "ANDROID_NDK_HOME",
    "ANDROID_NDK_ROOT",
    "ANDROID_NDK_PATH",
    "NDK_HOME",
    "JAVA_HOME",
    "RUST_LOG",
];

/// Isolated home directory holding an SDK, a JDK and a config directory
///
/// The directory is removed when the guard is dropped
pub struct TestHomeGuard {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestHomeGuard {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create test home directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn sdk_root(&self) -> PathBuf {
        self.path().join("sdk")
    }

    pub fn jdk_root(&self) -> PathBuf {
        self.path().join("jdk")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.path().join("config")
    }

    /// Creates the SDK, JDK and config directories
    pub fn setup_structure(&self) -> &Self {
        fs::create_dir_all(self.sdk_root()).expect("Failed to create sdk directory");
        fs::create_dir_all(self.jdk_root()).expect("Failed to create jdk directory");
        fs::create_dir_all(self.config_dir()).expect("Failed to create config directory");
        self
    }

    pub fn write_config(&self, contents: &str) {
        fs::create_dir_all(self.config_dir()).expect("Failed to create config directory");
        fs::write(self.config_dir().join("config.toml"), contents)
            .expect("Failed to write config.toml");
    }

    /// The binary with discovery confined to this home
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_android-sdk-info"));
        for var in DISCOVERY_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.path())
            .env("USERPROFILE", self.path())
            .env("ANDROID_SDK_INFO_CONFIG_DIR", self.config_dir())
            .env("PATH", "");
        cmd
    }

    /// [`Self::command`] with `--sdk` and `--java` pointing into this home
    pub fn sdk_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--sdk")
            .arg(self.sdk_root())
            .arg("--java")
            .arg(self.jdk_root());
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_and_cleans_up_directory() {
        let test_path = {
            let guard = TestHomeGuard::new();
            let path = guard.path().to_path_buf();
            assert!(path.exists());
            path
        };
        assert!(!test_path.exists());
    }

    #[test]
    fn test_setup_structure() {
        let guard = TestHomeGuard::new();
        let guard = guard.setup_structure();

        assert!(guard.sdk_root().is_dir());
        assert!(guard.jdk_root().is_dir());
        assert!(guard.config_dir().is_dir());
    }
}
