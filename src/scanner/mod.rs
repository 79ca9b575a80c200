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

//! Enumeration of version-named component directories.
//!
//! Every scan reads the directory once, sorts entries whose name parses as a
//! [`Version`] newest first and appends the remaining ("preview") entries in
//! enumeration order.

use crate::logging::SdkLogger;
use crate::version::Version;
use std::fs;
use std::path::{Path, PathBuf};

/// An immediate subdirectory of a scanned root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
}

/// Scan result split into the two mutually exclusive buckets.
#[derive(Debug, Default)]
pub struct ScanBuckets {
    /// Entries with a parseable name, newest first.
    pub versioned: Vec<(Version, DirectoryEntry)>,
    /// Entries without a parseable name, in enumeration order.
    pub preview: Vec<DirectoryEntry>,
}

impl ScanBuckets {
    pub fn is_empty(&self) -> bool {
        self.versioned.is_empty() && self.preview.is_empty()
    }

    pub fn newest(&self) -> Option<&(Version, DirectoryEntry)> {
        self.versioned.first()
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.versioned
            .into_iter()
            .map(|(_, entry)| entry.path)
            .chain(self.preview.into_iter().map(|entry| entry.path))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct VersionedDirectoryScanner {
    skip_names: Vec<String>,
    logger: SdkLogger,
}

impl VersionedDirectoryScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(mut self, logger: SdkLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Leave out entries whose name is exactly `name`.
    pub fn skip_name(mut self, name: &str) -> Self {
        self.skip_names.push(name.to_string());
        self
    }

    /// Immediate subdirectories of `root` in enumeration order.
    ///
    /// A missing or unreadable root yields no entries.
    pub fn entries(&self, root: &Path) -> Vec<DirectoryEntry> {
        let read_dir = match fs::read_dir(root) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                self.logger
                    .trace(format_args!("Skipping {}: {e}", root.display()));
                return Vec::new();
            }
        };

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.logger.debug(format_args!(
                        "Failed to read entry under {}: {e}",
                        root.display()
                    ));
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if self.skip_names.iter().any(|skip| *skip == name) {
                continue;
            }

            entries.push(DirectoryEntry { path, name });
        }

        entries
    }

    pub fn partition(&self, root: &Path) -> ScanBuckets {
        let mut buckets = ScanBuckets::default();

        for entry in self.entries(root) {
            match Version::parse(&entry.name) {
                Some(version) => buckets.versioned.push((version, entry)),
                None => buckets.preview.push(entry),
            }
        }

        // Stable sort keeps enumeration order for equal versions ("30.0" vs "30.0.0")
        buckets.versioned.sort_by(|(a, _), (b, _)| b.cmp(a));

        self.logger.trace(format_args!(
            "Scanned {}: {} versioned, {} preview",
            root.display(),
            buckets.versioned.len(),
            buckets.preview.len()
        ));

        buckets
    }

    /// Default resolution order for `root`, evaluated on first use.
    pub fn scan(&self, root: &Path) -> VersionedDirs {
        VersionedDirs {
            state: ScanState::Pending {
                scanner: self.clone(),
                root: root.to_path_buf(),
            },
        }
    }
}

/// Scan `root` with default options.
pub fn scan(root: &Path) -> VersionedDirs {
    VersionedDirectoryScanner::new().scan(root)
}

#[derive(Debug)]
enum ScanState {
    Pending {
        scanner: VersionedDirectoryScanner,
        root: PathBuf,
    },
    Ready(std::vec::IntoIter<PathBuf>),
}

/// Finite, single-pass sequence of directories from one scan.
///
/// The directory is read when the first element is requested; calling
/// [`VersionedDirectoryScanner::scan`] again performs a fresh read.
#[derive(Debug)]
pub struct VersionedDirs {
    state: ScanState,
}

impl Iterator for VersionedDirs {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        if let ScanState::Pending { scanner, root } = &self.state {
            let paths = scanner.partition(root).into_paths();
            self.state = ScanState::Ready(paths.into_iter());
        }

        match &mut self.state {
            ScanState::Ready(paths) => paths.next(),
            ScanState::Pending { .. } => None,
        }
    }
}
