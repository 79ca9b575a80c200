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

use crate::catalog::{AndroidVersion, VersionCatalog};
use crate::config::SdkConfig;
use crate::error::{Result, SdkError};
use crate::logging::SdkLogger;
use crate::provider::SdkRootProvider;
use crate::resolver::{CandidatePaths, PlatformResolver, ToolPathResolver};
use crate::version::Version;
use std::path::{Path, PathBuf};

/// Queries against one Android SDK installation.
///
/// The SDK and Java locations are resolved once at construction; every
/// query re-reads the filesystem.
pub struct SdkInfo {
    provider: Box<dyn SdkRootProvider>,
    sdk_path: PathBuf,
    java_path: PathBuf,
    tools: ToolPathResolver,
    platforms: PlatformResolver,
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

impl SdkInfo {
    /// Fails with [`SdkError::SdkPathNotFound`] or
    /// [`SdkError::JavaPathNotFound`] when the provider cannot supply the
    /// corresponding root.
    pub fn new(provider: Box<dyn SdkRootProvider>, logger: Option<SdkLogger>) -> Result<Self> {
        let logger = logger.unwrap_or_default();

        let sdk_path = non_empty(provider.android_sdk_path()).ok_or_else(|| {
            SdkError::SdkPathNotFound {
                searched: provider.searched_sdk_locations(),
            }
        })?;
        let java_path = non_empty(provider.java_sdk_path()).ok_or_else(|| {
            SdkError::JavaPathNotFound {
                searched: provider.searched_java_locations(),
            }
        })?;

        logger.debug(format_args!(
            "Android SDK: {}, Java SDK: {}",
            sdk_path.display(),
            java_path.display()
        ));

        Ok(Self {
            tools: ToolPathResolver::new(sdk_path.clone()).with_logger(logger.clone()),
            platforms: PlatformResolver::new(sdk_path.clone()).with_logger(logger),
            provider,
            sdk_path,
            java_path,
        })
    }

    pub fn android_sdk_path(&self) -> &Path {
        &self.sdk_path
    }

    pub fn java_sdk_path(&self) -> &Path {
        &self.java_path
    }

    pub fn android_ndk_path(&self) -> Option<PathBuf> {
        non_empty(self.provider.android_ndk_path())
    }

    pub fn all_android_sdk_paths(&self) -> Vec<PathBuf> {
        self.provider.all_android_sdk_paths()
    }

    pub fn android_ndk_host_platform(&self) -> Result<String> {
        self.provider.android_ndk_host_platform()
    }

    pub fn build_tools_paths(&self, preferred: Option<&str>) -> CandidatePaths {
        self.tools.build_tools_paths(preferred)
    }

    pub fn command_line_tools_paths(&self, preferred: Option<&str>) -> CandidatePaths {
        self.tools.command_line_tools_paths(preferred)
    }

    /// Like [`Self::build_tools_paths`], falling back to the configured
    /// preference when `preferred` is absent or empty.
    pub fn build_tools_paths_with_config(
        &self,
        config: &SdkConfig,
        preferred: Option<&str>,
    ) -> CandidatePaths {
        let preferred = preferred
            .filter(|p| !p.is_empty())
            .or_else(|| config.preferred_build_tools_version());
        self.build_tools_paths(preferred)
    }

    pub fn command_line_tools_paths_with_config(
        &self,
        config: &SdkConfig,
        preferred: Option<&str>,
    ) -> CandidatePaths {
        let preferred = preferred
            .filter(|p| !p.is_empty())
            .or_else(|| config.preferred_cmdline_tools_version());
        self.command_line_tools_paths(preferred)
    }

    pub fn first_command_line_tools_path(&self) -> Option<PathBuf> {
        self.tools.first_command_line_tools_path()
    }

    pub fn latest_build_tools_version(&self) -> Option<Version> {
        self.tools.latest_build_tools_version()
    }

    pub fn platform_directory(&self, api_level: u32) -> PathBuf {
        self.platforms.platform_directory(api_level)
    }

    pub fn platform_directory_from_id(&self, id: &str) -> PathBuf {
        self.platforms.platform_directory_from_id(id)
    }

    pub fn resolve_platform_directory<C>(&self, id_or_api_level: &str, catalog: &C) -> Option<PathBuf>
    where
        C: VersionCatalog + ?Sized,
    {
        self.platforms
            .resolve_platform_directory(id_or_api_level, catalog)
    }

    pub fn installed_platforms<'a, C>(
        &'a self,
        catalog: &'a C,
    ) -> impl Iterator<Item = &'a AndroidVersion> + 'a
    where
        C: VersionCatalog + ?Sized,
    {
        self.platforms.installed_platforms(catalog)
    }

    pub fn is_platform_installed(&self, api_level: u32) -> bool {
        self.platforms.is_platform_installed(api_level)
    }

    pub fn installed_api_levels(&self) -> Vec<u32> {
        self.platforms.installed_api_levels()
    }
}

impl std::fmt::Debug for SdkInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkInfo")
            .field("sdk_path", &self.sdk_path)
            .field("java_path", &self.java_path)
            .finish()
    }
}
