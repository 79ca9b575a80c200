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

use crate::catalog::{AndroidVersions, VersionCatalog};
use crate::error::{Result, SdkError};
use crate::sdk_info::SdkInfo;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct PlatformOutput {
    requested: String,
    id: Option<String>,
    api_level: Option<u32>,
    path: PathBuf,
}

pub struct PlatformCommand<'a> {
    info: &'a SdkInfo,
    catalog: AndroidVersions,
}

impl<'a> PlatformCommand<'a> {
    pub fn new(info: &'a SdkInfo) -> Result<Self> {
        Ok(Self {
            info,
            catalog: AndroidVersions::known(),
        })
    }

    pub fn execute(&self, id_or_api_level: &str, json: bool) -> Result<()> {
        let path = self
            .info
            .resolve_platform_directory(id_or_api_level, &self.catalog)
            .ok_or_else(|| SdkError::PlatformNotFound(id_or_api_level.to_string()))?;

        if json {
            let id = self.catalog.id_from_api_level(id_or_api_level);
            let api_level = id
                .as_deref()
                .and_then(|id| self.catalog.api_level_from_id(id));
            let output = PlatformOutput {
                requested: id_or_api_level.to_string(),
                id,
                api_level,
                path,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", path.display());
        }

        Ok(())
    }
}
