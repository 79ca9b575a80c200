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

use crate::error::Result;
use crate::sdk_info::SdkInfo;
use crate::version::Version;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct InfoOutput<'a> {
    android_sdk: &'a Path,
    java_sdk: &'a Path,
    android_ndk: Option<PathBuf>,
    ndk_host_platform: Option<String>,
    latest_build_tools: Option<Version>,
    api_levels: Vec<u32>,
    all_android_sdks: Vec<PathBuf>,
}

pub struct InfoCommand<'a> {
    info: &'a SdkInfo,
}

impl<'a> InfoCommand<'a> {
    pub fn new(info: &'a SdkInfo) -> Result<Self> {
        Ok(Self { info })
    }

    pub fn execute(&self, json: bool) -> Result<()> {
        // An unsupported host only hides the NDK tag
        let ndk_host_platform = match self.info.android_ndk_host_platform() {
            Ok(tag) => Some(tag),
            Err(e) => {
                log::debug!("{e}");
                None
            }
        };

        let output = InfoOutput {
            android_sdk: self.info.android_sdk_path(),
            java_sdk: self.info.java_sdk_path(),
            android_ndk: self.info.android_ndk_path(),
            ndk_host_platform,
            latest_build_tools: self.info.latest_build_tools_version(),
            api_levels: self.info.installed_api_levels(),
            all_android_sdks: self.info.all_android_sdk_paths(),
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!("Android SDK:      {}", output.android_sdk.display());
        println!("Java SDK:         {}", output.java_sdk.display());
        println!(
            "Android NDK:      {}",
            display_or_none(output.android_ndk.as_deref())
        );
        println!(
            "NDK host:         {}",
            output.ndk_host_platform.as_deref().unwrap_or("unsupported")
        );
        println!(
            "Build-tools:      {}",
            output
                .latest_build_tools
                .as_ref()
                .map(Version::to_string)
                .unwrap_or_else(|| "none".to_string())
        );
        let levels: Vec<String> = output.api_levels.iter().map(u32::to_string).collect();
        println!(
            "API levels:       {}",
            if levels.is_empty() {
                "none".to_string()
            } else {
                levels.join(", ")
            }
        );
        if output.all_android_sdks.len() > 1 {
            println!("Other SDK roots:");
            for sdk in output.all_android_sdks.iter().skip(1) {
                println!("  {}", sdk.display());
            }
        }

        Ok(())
    }
}

fn display_or_none(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "none".to_string())
}
