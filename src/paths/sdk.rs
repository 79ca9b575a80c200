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

use std::path::{Path, PathBuf};

pub const BUILD_TOOLS_DIR: &str = "build-tools";
pub const CMDLINE_TOOLS_DIR: &str = "cmdline-tools";
pub const PLATFORM_TOOLS_DIR: &str = "platform-tools";
pub const TOOLS_DIR: &str = "tools";
pub const PLATFORMS_DIR: &str = "platforms";
pub const NDK_DIR: &str = "ndk";
pub const NDK_BUNDLE_DIR: &str = "ndk-bundle";

/// Name of the `cmdline-tools` entry that always tracks the newest release.
pub const LATEST_DIR_NAME: &str = "latest";

/// Prefix of every directory under `platforms/`.
pub const PLATFORM_DIR_PREFIX: &str = "android-";

pub fn build_tools_dir(sdk_root: &Path) -> PathBuf {
    sdk_root.join(BUILD_TOOLS_DIR)
}

pub fn cmdline_tools_dir(sdk_root: &Path) -> PathBuf {
    sdk_root.join(CMDLINE_TOOLS_DIR)
}

pub fn platform_tools_dir(sdk_root: &Path) -> PathBuf {
    sdk_root.join(PLATFORM_TOOLS_DIR)
}

pub fn tools_dir(sdk_root: &Path) -> PathBuf {
    sdk_root.join(TOOLS_DIR)
}

pub fn platforms_dir(sdk_root: &Path) -> PathBuf {
    sdk_root.join(PLATFORMS_DIR)
}

pub fn ndk_dir(sdk_root: &Path) -> PathBuf {
    sdk_root.join(NDK_DIR)
}

pub fn ndk_bundle_dir(sdk_root: &Path) -> PathBuf {
    sdk_root.join(NDK_BUNDLE_DIR)
}

/// `android-<id>`, where `id` is a numeric API level or a platform id.
pub fn platform_dir_name(id: &str) -> String {
    format!("{PLATFORM_DIR_PREFIX}{id}")
}

/// `<sdk_root>/platforms/android-<id>`. Never touches the filesystem.
pub fn platform_dir(sdk_root: &Path, id: &str) -> PathBuf {
    platforms_dir(sdk_root).join(platform_dir_name(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_helpers_join_expected_paths() {
        let root = Path::new("/opt/android-sdk");
        assert_eq!(
            build_tools_dir(root),
            PathBuf::from("/opt/android-sdk/build-tools")
        );
        assert_eq!(
            cmdline_tools_dir(root),
            PathBuf::from("/opt/android-sdk/cmdline-tools")
        );
        assert_eq!(
            platform_tools_dir(root),
            PathBuf::from("/opt/android-sdk/platform-tools")
        );
        assert_eq!(tools_dir(root), PathBuf::from("/opt/android-sdk/tools"));
        assert_eq!(ndk_dir(root), PathBuf::from("/opt/android-sdk/ndk"));
        assert_eq!(
            ndk_bundle_dir(root),
            PathBuf::from("/opt/android-sdk/ndk-bundle")
        );
    }

    #[test]
    fn test_platform_dir_composes_without_checking_existence() {
        let root = Path::new("/does/not/exist");
        assert_eq!(
            platform_dir(root, "30"),
            PathBuf::from("/does/not/exist/platforms/android-30")
        );
        assert_eq!(
            platform_dir(root, "Baklava"),
            PathBuf::from("/does/not/exist/platforms/android-Baklava")
        );
    }
}
