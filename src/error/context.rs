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

use crate::error::SdkError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a SdkError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

fn searched_list(searched: &[String]) -> Option<String> {
    if searched.is_empty() {
        return None;
    }
    Some(format!(
        "Searched in:\n{}",
        searched
            .iter()
            .map(|p| format!("  - {p}"))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a SdkError) -> Self {
        let (suggestion, details) = match error {
            SdkError::SdkPathNotFound { searched } => {
                let suggestion = Some(
                    "Set ANDROID_HOME (or ANDROID_SDK_ROOT) to your SDK directory, pass --sdk, \
                     or add 'android_sdk' under [paths] in config.toml."
                        .to_string(),
                );
                (suggestion, searched_list(searched))
            }
            SdkError::JavaPathNotFound { searched } => {
                let suggestion = Some(
                    "Set JAVA_HOME to a JDK installation, pass --java, or add 'java_sdk' under \
                     [paths] in config.toml."
                        .to_string(),
                );
                (suggestion, searched_list(searched))
            }
            SdkError::UnsupportedPlatform { operation, host } => {
                let suggestion = Some(
                    "Supported hosts: linux-x86_64, darwin-x86_64, windows-x86_64.".to_string(),
                );
                let details = Some(format!("Host '{host}' cannot run '{operation}'."));
                (suggestion, details)
            }
            SdkError::InvalidVersionFormat(msg) => {
                let suggestion = Some(
                    "Versions are dot-separated non-negative integers (e.g., '34.0.0' or '11.0')."
                        .to_string(),
                );
                let details = Some(format!("Invalid format: {msg}"));
                (suggestion, details)
            }
            SdkError::ConfigError(msg) => {
                let suggestion =
                    Some("Check the syntax of config.toml and try again.".to_string());
                let details = Some(msg.clone());
                (suggestion, details)
            }
            SdkError::PlatformNotFound(id) => {
                let suggestion = Some(format!(
                    "Install the platform with: sdkmanager \"platforms;android-{id}\""
                ));
                let details = None;
                (suggestion, details)
            }
            SdkError::NoCommandLineTools => {
                let suggestion = Some(
                    "Install the command-line tools with: sdkmanager \"cmdline-tools;latest\""
                        .to_string(),
                );
                let details = None;
                (suggestion, details)
            }
            SdkError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check the permissions of the SDK directory.".to_string())
                    }
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
            SdkError::Json(_) => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
