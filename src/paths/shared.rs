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

/// Whether `path` currently exists and is a directory (symlinks followed).
pub fn is_existing_dir(path: &Path) -> bool {
    path.is_dir()
}

/// Return the path back when it currently exists as a directory.
pub fn existing_dir(path: PathBuf) -> Option<PathBuf> {
    if is_existing_dir(&path) {
        Some(path)
    } else {
        None
    }
}
