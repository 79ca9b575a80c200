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

/// Shared test fixtures for building SDK trees in unit tests
use crate::provider::FixedProvider;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates every relative directory in `dirs` under `root`
pub fn create_dirs(root: &Path, dirs: &[&str]) {
    for dir in dirs {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
}

/// Basenames of `paths`, in order
pub fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

/// Creates an SDK root with the layout used by most resolver tests
///
/// # Returns
/// The SDK root, containing `build-tools/{28.0.3,29.0.2,30.0.3,preview}`,
/// `platform-tools`, `cmdline-tools/{latest,6.0,5.0}`, `tools` and
/// `platforms/{android-30,android-34}`
pub fn create_test_sdk(root: &Path) -> PathBuf {
    let sdk = root.join("sdk");
    create_dirs(
        &sdk,
        &[
            "build-tools/28.0.3",
            "build-tools/29.0.2",
            "build-tools/30.0.3",
            "build-tools/preview",
            "platform-tools",
            "cmdline-tools/latest",
            "cmdline-tools/6.0",
            "cmdline-tools/5.0",
            "tools",
            "platforms/android-30",
            "platforms/android-34",
        ],
    );
    sdk
}

/// Provider returning `sdk` and a sibling `jdk` directory
pub fn create_test_provider(root: &Path, sdk: &Path) -> FixedProvider {
    let jdk = root.join("jdk");
    fs::create_dir_all(&jdk).unwrap();
    FixedProvider::new(sdk.to_path_buf(), jdk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_test_sdk() {
        let temp_dir = TempDir::new().unwrap();
        let sdk = create_test_sdk(temp_dir.path());
        assert!(sdk.join("build-tools").join("preview").is_dir());
        assert!(sdk.join("cmdline-tools").join("latest").is_dir());
        assert!(sdk.join("platforms").join("android-34").is_dir());
    }

    #[test]
    fn test_names() {
        let paths = vec![PathBuf::from("/sdk/build-tools/30.0.3"), PathBuf::from("/sdk/tools")];
        assert_eq!(names(&paths), vec!["30.0.3", "tools"]);
    }
}
