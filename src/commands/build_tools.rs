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

use crate::commands::print_paths;
use crate::config::SdkConfig;
use crate::error::Result;
use crate::sdk_info::SdkInfo;

pub struct BuildToolsCommand<'a> {
    info: &'a SdkInfo,
    config: &'a SdkConfig,
}

impl<'a> BuildToolsCommand<'a> {
    pub fn new(info: &'a SdkInfo, config: &'a SdkConfig) -> Result<Self> {
        Ok(Self { info, config })
    }

    pub fn execute(&self, preferred: Option<&str>, json: bool) -> Result<()> {
        let paths: Vec<_> = self
            .info
            .build_tools_paths_with_config(self.config, preferred)
            .collect();
        log::debug!("Found {} build-tools candidates", paths.len());
        print_paths(&paths, json)
    }
}
