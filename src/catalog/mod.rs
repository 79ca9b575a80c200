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

//! Mapping between Android API levels and platform ids.

use serde::{Deserialize, Serialize};

/// One Android platform release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidVersion {
    pub api_level: u32,
    /// Directory-naming id; equals the API level for stable releases.
    pub id: String,
    /// Other ids accepted when resolving, e.g. `"Tiramisu"` for 33.
    #[serde(default)]
    pub alternate_ids: Vec<String>,
    pub code_name: Option<String>,
    pub os_version: String,
    pub stable: bool,
}

impl AndroidVersion {
    pub fn new(api_level: u32, os_version: &str) -> Self {
        Self {
            api_level,
            id: api_level.to_string(),
            alternate_ids: Vec::new(),
            code_name: None,
            os_version: os_version.to_string(),
            stable: true,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_code_name(mut self, code_name: &str) -> Self {
        self.code_name = Some(code_name.to_string());
        self
    }

    pub fn with_alternate_id(mut self, id: &str) -> Self {
        self.alternate_ids.push(id.to_string());
        self
    }

    pub fn preview(mut self) -> Self {
        self.stable = false;
        self
    }

    pub fn matches_id(&self, id: &str) -> bool {
        self.id == id || self.alternate_ids.iter().any(|alt| alt == id)
    }
}

/// Lookups the platform resolver needs from a version table.
pub trait VersionCatalog {
    /// Canonical id for a numeric API level or any known id.
    fn id_from_api_level(&self, id_or_level: &str) -> Option<String>;

    fn api_level_from_id(&self, id: &str) -> Option<u32>;

    /// Versions the catalog can bind against, in catalog order.
    fn installed_binding_versions(&self) -> &[AndroidVersion];
}

#[derive(Debug, Clone, Default)]
pub struct AndroidVersions {
    versions: Vec<AndroidVersion>,
}

impl AndroidVersions {
    pub fn new(versions: Vec<AndroidVersion>) -> Self {
        Self { versions }
    }

    /// Releases from Lollipop (API 21) to the Baklava preview.
    pub fn known() -> Self {
        Self::new(vec![
            AndroidVersion::new(21, "5.0").with_code_name("Lollipop"),
            AndroidVersion::new(22, "5.1").with_code_name("Lollipop"),
            AndroidVersion::new(23, "6.0").with_code_name("Marshmallow"),
            AndroidVersion::new(24, "7.0").with_code_name("Nougat"),
            AndroidVersion::new(25, "7.1").with_code_name("Nougat"),
            AndroidVersion::new(26, "8.0").with_code_name("Oreo"),
            AndroidVersion::new(27, "8.1").with_code_name("Oreo"),
            AndroidVersion::new(28, "9.0").with_code_name("Pie"),
            AndroidVersion::new(29, "10.0")
                .with_code_name("Q")
                .with_alternate_id("Q"),
            AndroidVersion::new(30, "11.0")
                .with_code_name("R")
                .with_alternate_id("R"),
            AndroidVersion::new(31, "12.0")
                .with_code_name("S")
                .with_alternate_id("S"),
            AndroidVersion::new(32, "12.1")
                .with_code_name("Sv2")
                .with_alternate_id("Sv2"),
            AndroidVersion::new(33, "13.0")
                .with_code_name("Tiramisu")
                .with_alternate_id("Tiramisu"),
            AndroidVersion::new(34, "14.0")
                .with_code_name("UpsideDownCake")
                .with_alternate_id("UpsideDownCake"),
            AndroidVersion::new(35, "15.0")
                .with_code_name("VanillaIceCream")
                .with_alternate_id("VanillaIceCream"),
            AndroidVersion::new(36, "16.0")
                .with_id("Baklava")
                .with_code_name("Baklava")
                .preview(),
        ])
    }

    pub fn versions(&self) -> &[AndroidVersion] {
        &self.versions
    }

    pub fn by_api_level(&self, api_level: u32) -> Option<&AndroidVersion> {
        self.versions.iter().find(|v| v.api_level == api_level)
    }

    pub fn by_id(&self, id: &str) -> Option<&AndroidVersion> {
        self.versions.iter().find(|v| v.matches_id(id))
    }
}

impl VersionCatalog for AndroidVersions {
    fn id_from_api_level(&self, id_or_level: &str) -> Option<String> {
        let version = match id_or_level.parse::<u32>() {
            Ok(level) => self.by_api_level(level),
            Err(_) => self.by_id(id_or_level),
        };
        version.map(|v| v.id.clone())
    }

    fn api_level_from_id(&self, id: &str) -> Option<u32> {
        if let Some(version) = self.by_id(id) {
            return Some(version.api_level);
        }
        let level = id.parse::<u32>().ok()?;
        self.by_api_level(level).map(|v| v.api_level)
    }

    fn installed_binding_versions(&self) -> &[AndroidVersion] {
        &self.versions
    }
}
