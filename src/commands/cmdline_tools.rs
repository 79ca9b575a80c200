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
use crate::error::{Result, SdkError};
use crate::sdk_info::SdkInfo;

pub struct CmdlineToolsCommand<'a> {
    info: &'a SdkInfo,
    config: &'a SdkConfig,
}

impl<'a> CmdlineToolsCommand<'a> {
    pub fn new(info: &'a SdkInfo, config: &'a SdkConfig) -> Result<Self> {
        Ok(Self { info, config })
    }

    /// With `first`, prints only the directory a build would pick and fails
    /// when neither `cmdline-tools` nor `tools` is installed.
    pub fn execute(&self, preferred: Option<&str>, first: bool, json: bool) -> Result<()> {
        let mut paths = self
            .info
            .command_line_tools_paths_with_config(self.config, preferred);

        if first {
            let path = paths.next().ok_or(SdkError::NoCommandLineTools)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&path)?);
            } else {
                println!("{}", path.display());
            }
            return Ok(());
        }

        print_paths(&paths.collect::<Vec<_>>(), json)
    }
}
