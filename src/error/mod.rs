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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::format_error_with_color;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Android SDK location could not be determined")]
    SdkPathNotFound { searched: Vec<String> },

    #[error("Java SDK location could not be determined")]
    JavaPathNotFound { searched: Vec<String> },

    #[error("'{operation}' is not supported on {host}")]
    UnsupportedPlatform { operation: String, host: String },

    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No installed platform matches '{0}'")]
    PlatformNotFound(String),

    #[error("No command-line tools installed")]
    NoCommandLineTools,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SdkError>;
