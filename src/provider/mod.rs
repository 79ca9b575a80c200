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

//! Root-path discovery for the Android SDK, NDK and Java SDK.
//!
//! [`SdkInfo`](crate::sdk_info::SdkInfo) only ever talks to the
//! [`SdkRootProvider`] trait. [`create_root_provider`] picks the host-specific
//! discovery strategy once at startup.

use crate::config::PathsConfig;
use crate::error::Result;
use crate::logging::SdkLogger;
use crate::paths::{existing_dir, ndk_bundle_dir, ndk_dir};
use crate::platform::HostOs;
use crate::scanner::VersionedDirectoryScanner;
use std::env;
use std::path::{Path, PathBuf};

pub const SDK_ENV_VARS: &[&str] = &["ANDROID_HOME", "ANDROID_SDK_ROOT"];
pub const NDK_ENV_VARS: &[&str] = &[
    "ANDROID_NDK_HOME",
    "ANDROID_NDK_ROOT",
    "ANDROID_NDK_PATH",
    "NDK_HOME",
];
pub const JAVA_ENV_VAR: &str = "JAVA_HOME";

pub trait SdkRootProvider {
    fn android_sdk_path(&self) -> Option<PathBuf>;

    fn android_ndk_path(&self) -> Option<PathBuf>;

    fn java_sdk_path(&self) -> Option<PathBuf>;

    /// Every SDK root this provider knows about, preferred one first.
    fn all_android_sdk_paths(&self) -> Vec<PathBuf>;

    fn android_ndk_host_platform(&self) -> Result<String>;

    /// Locations consulted for the SDK, for error reporting.
    fn searched_sdk_locations(&self) -> Vec<String> {
        Vec::new()
    }

    /// Locations consulted for the Java SDK, for error reporting.
    fn searched_java_locations(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Select the discovery strategy for the running host.
pub fn create_root_provider(
    overrides: PathsConfig,
    logger: SdkLogger,
) -> Box<dyn SdkRootProvider> {
    Box::new(EnvironmentProvider::new(HostOs::current(), overrides).with_logger(logger))
}

/// Explicit paths with no discovery.
#[derive(Debug, Clone, Default)]
pub struct FixedProvider {
    sdk: Option<PathBuf>,
    ndk: Option<PathBuf>,
    java: Option<PathBuf>,
    extra_sdks: Vec<PathBuf>,
}

impl FixedProvider {
    pub fn new(sdk: PathBuf, java: PathBuf) -> Self {
        Self {
            sdk: Some(sdk),
            java: Some(java),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_sdk(mut self, sdk: Option<PathBuf>) -> Self {
        self.sdk = sdk;
        self
    }

    pub fn with_java(mut self, java: Option<PathBuf>) -> Self {
        self.java = java;
        self
    }

    pub fn with_ndk(mut self, ndk: PathBuf) -> Self {
        self.ndk = Some(ndk);
        self
    }

    pub fn with_extra_sdk(mut self, sdk: PathBuf) -> Self {
        self.extra_sdks.push(sdk);
        self
    }
}

impl SdkRootProvider for FixedProvider {
    fn android_sdk_path(&self) -> Option<PathBuf> {
        self.sdk.clone()
    }

    fn android_ndk_path(&self) -> Option<PathBuf> {
        self.ndk.clone()
    }

    fn java_sdk_path(&self) -> Option<PathBuf> {
        self.java.clone()
    }

    fn all_android_sdk_paths(&self) -> Vec<PathBuf> {
        self.sdk
            .iter()
            .chain(self.extra_sdks.iter())
            .cloned()
            .collect()
    }

    fn android_ndk_host_platform(&self) -> Result<String> {
        HostOs::current().ndk_host_platform().map(String::from)
    }
}

/// A candidate location together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub source: String,
    pub path: PathBuf,
}

impl Candidate {
    fn new(source: impl Into<String>, path: PathBuf) -> Self {
        Self {
            source: source.into(),
            path,
        }
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.path.display(), self.source)
    }
}

/// Discovery from configuration, environment variables, `PATH` and the
/// default install locations of the host.
#[derive(Debug, Clone)]
pub struct EnvironmentProvider {
    host: HostOs,
    overrides: PathsConfig,
    home: Option<PathBuf>,
    search_path: bool,
    logger: SdkLogger,
}

impl EnvironmentProvider {
    pub fn new(host: HostOs, overrides: PathsConfig) -> Self {
        Self {
            host,
            overrides,
            home: dirs::home_dir(),
            search_path: true,
            logger: SdkLogger::default(),
        }
    }

    pub fn with_logger(mut self, logger: SdkLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Base directory for the per-user default locations.
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    /// Whether to derive locations from `adb`/`javac` found on `PATH`.
    pub fn with_path_search(mut self, search_path: bool) -> Self {
        self.search_path = search_path;
        self
    }

    pub fn sdk_candidates(&self) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        if let Some(path) = &self.overrides.android_sdk {
            candidates.push(Candidate::new("configured", path.clone()));
        }
        for var in SDK_ENV_VARS {
            if let Some(path) = env_path(var) {
                candidates.push(Candidate::new(*var, path));
            }
        }
        // <sdk>/platform-tools/adb
        if let Some(path) = self.tool_home_on_path("adb") {
            candidates.push(Candidate::new("adb on PATH", path));
        }
        for path in self.default_sdk_locations() {
            candidates.push(Candidate::new("default location", path));
        }

        candidates
    }

    pub fn java_candidates(&self) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        if let Some(path) = &self.overrides.java_sdk {
            candidates.push(Candidate::new("configured", path.clone()));
        }
        if let Some(path) = env_path(JAVA_ENV_VAR) {
            candidates.push(Candidate::new(JAVA_ENV_VAR, path));
        }
        // <jdk>/bin/javac
        if let Some(path) = self.tool_home_on_path("javac") {
            candidates.push(Candidate::new("javac on PATH", path));
        }
        for path in self.default_java_locations() {
            candidates.push(Candidate::new("default location", path));
        }

        candidates
    }

    fn default_sdk_locations(&self) -> Vec<PathBuf> {
        let Some(home) = &self.home else {
            return Vec::new();
        };
        match self.host {
            HostOs::MacOs => vec![home.join("Library").join("Android").join("sdk")],
            HostOs::Windows => vec![
                home.join("AppData")
                    .join("Local")
                    .join("Android")
                    .join("Sdk"),
            ],
            HostOs::Linux | HostOs::Other(_) => vec![home.join("Android").join("Sdk")],
        }
    }

    fn default_java_locations(&self) -> Vec<PathBuf> {
        match self.host {
            HostOs::MacOs => vec![PathBuf::from(
                "/Applications/Android Studio.app/Contents/jbr/Contents/Home",
            )],
            HostOs::Windows => vec![PathBuf::from(
                r"C:\Program Files\Android\Android Studio\jbr",
            )],
            HostOs::Linux | HostOs::Other(_) => vec![
                PathBuf::from("/opt/android-studio/jbr"),
                PathBuf::from("/usr/lib/jvm/default-java"),
            ],
        }
    }

    /// Grandparent of the resolved executable, e.g. `<sdk>` for
    /// `<sdk>/platform-tools/adb`.
    fn tool_home_on_path(&self, tool: &str) -> Option<PathBuf> {
        if !self.search_path {
            return None;
        }
        let found = which::which(tool).ok()?;
        let resolved = found.canonicalize().unwrap_or(found);
        let home = resolved.parent()?.parent()?.to_path_buf();
        self.logger.trace(format_args!(
            "Found {tool} on PATH at {}",
            resolved.display()
        ));
        Some(home)
    }

    fn first_existing(&self, kind: &str, candidates: Vec<Candidate>) -> Option<PathBuf> {
        for candidate in candidates {
            if candidate.path.as_os_str().is_empty() {
                continue;
            }
            if let Some(path) = existing_dir(candidate.path.clone()) {
                self.logger.debug(format_args!(
                    "Using {kind} from {}",
                    candidate.describe()
                ));
                return Some(path);
            }
            self.logger.trace(format_args!(
                "Ignoring missing {kind} {}",
                candidate.describe()
            ));
        }
        None
    }

    fn ndk_from_env(&self) -> Option<PathBuf> {
        let (var, path) = first_consistent_env_path(NDK_ENV_VARS, &self.logger)?;
        let path = existing_dir(path)?;
        self.logger
            .debug(format_args!("Using NDK from {var}: {}", path.display()));
        // The variable may point at a directory of side-by-side NDKs
        Some(newest_versioned_dir(&path, &self.logger).unwrap_or(path))
    }
}

impl SdkRootProvider for EnvironmentProvider {
    fn android_sdk_path(&self) -> Option<PathBuf> {
        self.first_existing("Android SDK", self.sdk_candidates())
    }

    fn android_ndk_path(&self) -> Option<PathBuf> {
        if let Some(path) = self.overrides.android_ndk.clone().and_then(existing_dir) {
            return Some(path);
        }
        if let Some(path) = self.ndk_from_env() {
            return Some(path);
        }

        let sdk = self.android_sdk_path()?;
        newest_versioned_dir(&ndk_dir(&sdk), &self.logger)
            .or_else(|| existing_dir(ndk_bundle_dir(&sdk)))
    }

    fn java_sdk_path(&self) -> Option<PathBuf> {
        self.first_existing("Java SDK", self.java_candidates())
    }

    fn all_android_sdk_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = Vec::new();
        for candidate in self.sdk_candidates() {
            if let Some(path) = existing_dir(candidate.path) {
                if !paths.contains(&path) {
                    paths.push(path);
                }
            }
        }
        paths
    }

    fn android_ndk_host_platform(&self) -> Result<String> {
        self.host.ndk_host_platform().map(String::from)
    }

    fn searched_sdk_locations(&self) -> Vec<String> {
        self.sdk_candidates().iter().map(Candidate::describe).collect()
    }

    fn searched_java_locations(&self) -> Vec<String> {
        self.java_candidates().iter().map(Candidate::describe).collect()
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// First variable in `vars` that is set; later ones that disagree are reported.
fn first_consistent_env_path<'a>(
    vars: &'a [&'a str],
    logger: &SdkLogger,
) -> Option<(&'a str, PathBuf)> {
    let mut first: Option<(&str, PathBuf)> = None;
    for var in vars {
        let Some(path) = env_path(var) else {
            continue;
        };
        match &first {
            Some((first_var, first_path)) => {
                if *first_path != path {
                    logger.warn(format_args!(
                        "Environment variable `{var} = {}` doesn't match `{first_var} = {}`",
                        path.display(),
                        first_path.display()
                    ));
                }
            }
            None => first = Some((*var, path)),
        }
    }
    first
}

fn newest_versioned_dir(root: &Path, logger: &SdkLogger) -> Option<PathBuf> {
    VersionedDirectoryScanner::new()
        .with_logger(logger.clone())
        .partition(root)
        .versioned
        .into_iter()
        .next()
        .map(|(_, entry)| entry.path)
}
