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
use crate::logging::SdkLogger;
use crate::paths::{PLATFORM_DIR_PREFIX, existing_dir, platform_dir, platforms_dir};
use crate::scanner::VersionedDirectoryScanner;
use std::path::{Path, PathBuf};

/// API level `0` means "unspecified" and never names an installed platform.
pub const UNSPECIFIED_API_LEVEL: u32 = 0;

#[derive(Debug, Clone)]
pub struct PlatformResolver {
    sdk_root: PathBuf,
    logger: SdkLogger,
}

impl PlatformResolver {
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

    /// `<sdk>/platforms/android-<api_level>`, whether or not it exists.
    pub fn platform_directory(&self, api_level: u32) -> PathBuf {
        platform_dir(&self.sdk_root, &api_level.to_string())
    }

    /// `<sdk>/platforms/android-<id>`, whether or not it exists.
    pub fn platform_directory_from_id(&self, id: &str) -> PathBuf {
        platform_dir(&self.sdk_root, id)
    }

    /// Installed platform directory for an API level or platform id.
    ///
    /// Tries the directory named after the catalog's canonical id first, then
    /// the one named after the id's numeric API level.
    pub fn resolve_platform_directory<C>(&self, id_or_api_level: &str, catalog: &C) -> Option<PathBuf>
    where
        C: VersionCatalog + ?Sized,
    {
        let Some(id) = catalog.id_from_api_level(id_or_api_level) else {
            self.logger.debug(format_args!(
                "Unknown platform id or API level '{id_or_api_level}'"
            ));
            return None;
        };

        if let Some(dir) = existing_dir(self.platform_directory_from_id(&id)) {
            return Some(dir);
        }

        let level = catalog.api_level_from_id(&id)?;
        let dir = existing_dir(self.platform_directory(level));
        if dir.is_some() {
            self.logger.trace(format_args!(
                "Platform '{id}' found under its API level {level}"
            ));
        }
        dir
    }

    /// Catalog versions whose platform directory resolves, in catalog order.
    ///
    /// The filesystem is checked per record while iterating.
    pub fn installed_platforms<'a, C>(
        &'a self,
        catalog: &'a C,
    ) -> impl Iterator<Item = &'a AndroidVersion> + 'a
    where
        C: VersionCatalog + ?Sized,
    {
        catalog
            .installed_binding_versions()
            .iter()
            .filter(move |version| {
                self.resolve_platform_directory(&version.id, catalog)
                    .is_some()
            })
    }

    pub fn is_platform_installed(&self, api_level: u32) -> bool {
        if api_level == UNSPECIFIED_API_LEVEL {
            return false;
        }
        self.platform_directory(api_level).is_dir()
    }

    /// Numeric levels of the `platforms/android-<n>` directories, highest first.
    pub fn installed_api_levels(&self) -> Vec<u32> {
        let mut levels: Vec<u32> = VersionedDirectoryScanner::new()
            .with_logger(self.logger.clone())
            .entries(&platforms_dir(&self.sdk_root))
            .into_iter()
            .filter_map(|entry| {
                entry
                    .name
                    .strip_prefix(PLATFORM_DIR_PREFIX)
                    .and_then(|level| level.parse::<u32>().ok())
            })
            .collect();
        levels.sort_unstable_by(|a, b| b.cmp(a));
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AndroidVersions;
    use crate::test::fixtures::create_dirs;
    use tempfile::TempDir;

    #[test]
    fn test_platform_directory_is_pure_composition() {
        let resolver = PlatformResolver::new(PathBuf::from("/nowhere/sdk"));
        assert_eq!(
            resolver.platform_directory(30),
            PathBuf::from("/nowhere/sdk/platforms/android-30")
        );
        assert_eq!(
            resolver.platform_directory_from_id("Baklava"),
            PathBuf::from("/nowhere/sdk/platforms/android-Baklava")
        );
    }

    #[test]
    fn test_resolve_by_level_and_id() {
        let temp_dir = TempDir::new().unwrap();
        create_dirs(temp_dir.path(), &["platforms/android-33"]);
        let resolver = PlatformResolver::new(temp_dir.path().to_path_buf());
        let catalog = AndroidVersions::known();
        let expected = temp_dir.path().join("platforms").join("android-33");

        assert_eq!(
            resolver.resolve_platform_directory("33", &catalog),
            Some(expected.clone())
        );
        assert_eq!(
            resolver.resolve_platform_directory("Tiramisu", &catalog),
            Some(expected)
        );
    }

    #[test]
    fn test_resolve_falls_back_to_level_named_directory() {
        let temp_dir = TempDir::new().unwrap();
        create_dirs(temp_dir.path(), &["platforms/android-36"]);
        let resolver = PlatformResolver::new(temp_dir.path().to_path_buf());
        let catalog = AndroidVersions::known();

        assert_eq!(
            resolver.resolve_platform_directory("Baklava", &catalog),
            Some(temp_dir.path().join("platforms").join("android-36"))
        );
    }

    #[test]
    fn test_resolve_prefers_id_named_directory() {
        let temp_dir = TempDir::new().unwrap();
        create_dirs(
            temp_dir.path(),
            &["platforms/android-36", "platforms/android-Baklava"],
        );
        let resolver = PlatformResolver::new(temp_dir.path().to_path_buf());
        let catalog = AndroidVersions::known();

        assert_eq!(
            resolver.resolve_platform_directory("36", &catalog),
            Some(temp_dir.path().join("platforms").join("android-Baklava"))
        );
    }

    #[test]
    fn test_resolve_unknown_id_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        create_dirs(temp_dir.path(), &["platforms/android-99"]);
        let resolver = PlatformResolver::new(temp_dir.path().to_path_buf());
        let catalog = AndroidVersions::known();

        assert_eq!(resolver.resolve_platform_directory("99", &catalog), None);
        assert_eq!(resolver.resolve_platform_directory("Nope", &catalog), None);
    }

    #[test]
    fn test_resolve_missing_directory_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = PlatformResolver::new(temp_dir.path().to_path_buf());
        let catalog = AndroidVersions::known();

        assert_eq!(resolver.resolve_platform_directory("34", &catalog), None);
    }

    #[test]
    fn test_installed_platforms_filters_catalog() {
        let temp_dir = TempDir::new().unwrap();
        create_dirs(
            temp_dir.path(),
            &[
                "platforms/android-21",
                "platforms/android-34",
                "platforms/android-36",
                "platforms/android-99",
            ],
        );
        let resolver = PlatformResolver::new(temp_dir.path().to_path_buf());
        let catalog = AndroidVersions::known();

        let installed: Vec<u32> = resolver
            .installed_platforms(&catalog)
            .map(|v| v.api_level)
            .collect();
        assert_eq!(installed, vec![21, 34, 36]);
    }

    #[test]
    fn test_is_platform_installed() {
        let temp_dir = TempDir::new().unwrap();
        create_dirs(temp_dir.path(), &["platforms/android-30", "platforms/android-0"]);
        let resolver = PlatformResolver::new(temp_dir.path().to_path_buf());

        assert!(resolver.is_platform_installed(30));
        assert!(!resolver.is_platform_installed(31));
        // Zero is the unspecified sentinel even when android-0 exists
        assert!(!resolver.is_platform_installed(0));
    }

    #[test]
    fn test_installed_api_levels() {
        let temp_dir = TempDir::new().unwrap();
        create_dirs(
            temp_dir.path(),
            &[
                "platforms/android-30",
                "platforms/android-9",
                "platforms/android-34",
                "platforms/android-Baklava",
            ],
        );
        let resolver = PlatformResolver::new(temp_dir.path().to_path_buf());

        assert_eq!(resolver.installed_api_levels(), vec![34, 30, 9]);
    }
}
