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

use crate::catalog::{AndroidVersion, AndroidVersions};
use crate::error::Result;
use crate::sdk_info::SdkInfo;
use comfy_table::{Cell, CellAlignment, Table};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct InstalledPlatform<'a> {
    #[serde(flatten)]
    version: &'a AndroidVersion,
    path: PathBuf,
}

pub struct PlatformsCommand<'a> {
    info: &'a SdkInfo,
    catalog: AndroidVersions,
}

impl<'a> PlatformsCommand<'a> {
    pub fn new(info: &'a SdkInfo) -> Result<Self> {
        Ok(Self {
            info,
            catalog: AndroidVersions::known(),
        })
    }

    pub fn execute(&self, json: bool) -> Result<()> {
        let installed: Vec<InstalledPlatform<'_>> = self
            .info
            .installed_platforms(&self.catalog)
            .filter_map(|version| {
                self.info
                    .resolve_platform_directory(&version.id, &self.catalog)
                    .map(|path| InstalledPlatform { version, path })
            })
            .collect();

        if json {
            println!("{}", serde_json::to_string_pretty(&installed)?);
            return Ok(());
        }

        if installed.is_empty() {
            eprintln!(
                "No known platforms installed under {}",
                self.info.android_sdk_path().display()
            );
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
        table.set_header(vec![
            Cell::new("Directory"),
            Cell::new("API"),
            Cell::new("Android"),
            Cell::new("Code name"),
            Cell::new("Status"),
        ]);

        for InstalledPlatform { version, path } in &installed {
            let directory = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            table.add_row(vec![
                Cell::new(directory),
                Cell::new(version.api_level.to_string()).set_alignment(CellAlignment::Right),
                Cell::new(&version.os_version),
                Cell::new(version.code_name.as_deref().unwrap_or("-")),
                Cell::new(if version.stable { "stable" } else { "preview" }),
            ]);
        }

        println!("{table}");

        Ok(())
    }
}
