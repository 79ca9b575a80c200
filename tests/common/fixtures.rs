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

/// Shared test fixtures for creating SDK directory layouts
use std::fs;
use std::path::Path;

/// Creates every relative directory in `dirs` under `root`
#[allow(dead_code)]
pub fn create_dirs(root: &Path, dirs: &[&str]) {
    for dir in dirs {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
}

/// Creates the layout most CLI tests run against
///
/// # Arguments
/// * `sdk` - The SDK root directory
#[allow(dead_code)]
pub fn create_test_sdk_fs(sdk: &Path) {
    create_dirs(
        sdk,
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
            "platforms/android-33",
            "platforms/android-34",
            "platforms/android-Baklava",
        ],
    );
}

/// Basename of each non-empty stdout line
#[allow(dead_code)]
pub fn line_names(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            Path::new(line)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect()
}
