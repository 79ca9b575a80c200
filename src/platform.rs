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

//! Host platform detection.
//!
//! The host is detected once per process and drives the OS-specific parts of
//! SDK discovery.

use crate::error::{Result, SdkError};
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Linux,
    MacOs,
    Windows,
    Other(&'static str),
}

static CURRENT_HOST: OnceLock<HostOs> = OnceLock::new();

impl HostOs {
    pub fn current() -> HostOs {
        *CURRENT_HOST.get_or_init(|| HostOs::from_os_name(std::env::consts::OS))
    }

    pub fn from_os_name(name: &'static str) -> HostOs {
        match name {
            "linux" => HostOs::Linux,
            "macos" => HostOs::MacOs,
            "windows" => HostOs::Windows,
            other => HostOs::Other(other),
        }
    }

    /// Prebuilt directory tag used inside the NDK (`toolchains/llvm/prebuilt/<tag>`).
    ///
    /// macOS NDKs ship universal binaries under the `darwin-x86_64` tag.
    pub fn ndk_host_platform(self) -> Result<&'static str> {
        match self {
            HostOs::Linux => Ok("linux-x86_64"),
            HostOs::MacOs => Ok("darwin-x86_64"),
            HostOs::Windows => Ok("windows-x86_64"),
            HostOs::Other(_) => Err(self.unsupported("android_ndk_host_platform")),
        }
    }

    fn unsupported(self, operation: &str) -> SdkError {
        SdkError::UnsupportedPlatform {
            operation: operation.to_string(),
            host: self.to_string(),
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostOs::Linux => write!(f, "linux"),
            HostOs::MacOs => write!(f, "macos"),
            HostOs::Windows => write!(f, "windows"),
            HostOs::Other(name) => write!(f, "{name}"),
        }
    }
}
