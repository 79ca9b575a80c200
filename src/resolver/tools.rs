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

use crate::logging::SdkLogger;
use crate::paths::{
    LATEST_DIR_NAME, build_tools_dir, cmdline_tools_dir, existing_dir, platform_tools_dir,
    tools_dir,
};
use crate::scanner::{VersionedDirectoryScanner, VersionedDirs};
use crate::version::Version;
use std::path::{Component, Path, PathBuf};

/// Ordered candidate directories for one tool category.
///
/// Yields an optional hoisted entry, then the default-ordered scan with that
/// entry removed, then an optional fixed trailing directory that is checked
/// for existence only once the scan is exhausted.
#[derive(Debug)]
pub struct CandidatePaths {
    head: Option<PathBuf>,
    body: VersionedDirs,
    exclude: Option<PathBuf>,
    tail: Option<PathBuf>,
}

impl Iterator for CandidatePaths {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        if let Some(head) = self.head.take() {
            return Some(head);
        }

        for path in self.body.by_ref() {
            if self.exclude.as_ref() != Some(&path) {
                return Some(path);
            }
        }

        self.tail.take().and_then(existing_dir)
    }
}

#[derive(Debug, Clone)]
pub struct ToolPathResolver {
    sdk_root: PathBuf,
    logger: SdkLogger,
}

impl ToolPathResolver {
    pub fn new(sdk_root: PathBuf) -> Self {
        Self {
            sdk_root,
            logger: SdkLogger::default(),
        }
    }

    pub fn with_logger(mut self, logger: SdkLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn sdk_root(&self) -> &Path {
        &self.sdk_root
    }

    fn scanner(&self) -> VersionedDirectoryScanner {
        VersionedDirectoryScanner::new().with_logger(self.logger.clone())
    }

    /// `preferred` when it names a single directory entry.
    ///
    /// Empty strings, `.`, `..`, absolute paths and multi-component paths are
    /// treated as no preference.
    fn preferred_name<'p>(&self, preferred: Option<&'p str>) -> Option<&'p str> {
        let preferred = preferred.filter(|p| !p.is_empty())?;
        let mut components = Path::new(preferred).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(preferred),
            _ => {
                self.logger.debug(format_args!(
                    "Ignoring preferred version '{preferred}': not a directory name"
                ));
                None
            }
        }
    }

    /// `<category_dir>/<preferred>` when `preferred` exists.
    fn preferred_dir(&self, category_dir: &Path, preferred: &str) -> Option<PathBuf> {
        let found = existing_dir(category_dir.join(preferred));
        if found.is_none() {
            self.logger.debug(format_args!(
                "Preferred version '{preferred}' not found under {}",
                category_dir.display()
            ));
        }
        found
    }

    /// Build-tools directories, newest first, followed by `platform-tools`.
    ///
    /// An existing `preferred` version is hoisted to the front and not
    /// repeated later; an empty, non-name or missing one leaves the default order.
    pub fn build_tools_paths(&self, preferred: Option<&str>) -> CandidatePaths {
        let build_tools = build_tools_dir(&self.sdk_root);
        let head = self
            .preferred_name(preferred)
            .and_then(|name| self.preferred_dir(&build_tools, name));

        CandidatePaths {
            exclude: head.clone(),
            head,
            body: self.scanner().scan(&build_tools),
            tail: Some(platform_tools_dir(&self.sdk_root)),
        }
    }

    /// Command-line tools directories followed by the legacy `tools` directory.
    ///
    /// Without a preference, `cmdline-tools/latest` comes first and the
    /// remaining versions follow newest first. With a usable one, an
    /// existing `preferred` version comes first and the rest of
    /// `cmdline-tools` follows in plain default order, where `latest` sorts
    /// with the other unversioned entries. A preference that does not exist
    /// does not bring back the `latest` hoisting.
    pub fn command_line_tools_paths(&self, preferred: Option<&str>) -> CandidatePaths {
        let cmdline_tools = cmdline_tools_dir(&self.sdk_root);
        let tail = Some(tools_dir(&self.sdk_root));

        if let Some(name) = self.preferred_name(preferred) {
            let head = self.preferred_dir(&cmdline_tools, name);
            return CandidatePaths {
                exclude: head.clone(),
                head,
                body: self.scanner().scan(&cmdline_tools),
                tail,
            };
        }

        CandidatePaths {
            head: existing_dir(cmdline_tools.join(LATEST_DIR_NAME)),
            body: self
                .scanner()
                .skip_name(LATEST_DIR_NAME)
                .scan(&cmdline_tools),
            exclude: None,
            tail,
        }
    }

    pub fn first_command_line_tools_path(&self) -> Option<PathBuf> {
        self.command_line_tools_paths(Some(LATEST_DIR_NAME)).next()
    }

    pub fn latest_build_tools_version(&self) -> Option<Version> {
        self.scanner()
            .partition(&build_tools_dir(&self.sdk_root))
            .versioned
            .into_iter()
            .next()
            .map(|(version, _)| version)
    }

    pub fn is_build_tools_version_installed(&self, version: &str) -> bool {
        !version.is_empty() && build_tools_dir(&self.sdk_root).join(version).is_dir()
    }
}
