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

use log::Level;
use std::fmt;
use std::sync::Arc;

/// Initialize the logger with the specified verbosity level
///
/// # Arguments
/// * `verbose` - Verbosity level (0=warn, 1=info, 2=debug, 3+=trace)
pub fn setup_logger(verbose: u8) {
    let env_filter = match verbose {
        0 => "android_sdk_info=warn",
        1 => "android_sdk_info=info",
        2 => "android_sdk_info=debug",
        _ => "android_sdk_info=trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(env_filter))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

pub type LogCallback = dyn Fn(Level, &str) + Send + Sync;

/// Diagnostic sink handed to [`SdkInfo`](crate::sdk_info::SdkInfo) and the
/// resolvers at construction time.
///
/// Without a callback, messages are forwarded to the `log` facade, which stays
/// silent unless the host application installed a logger.
#[derive(Clone, Default)]
pub struct SdkLogger {
    callback: Option<Arc<LogCallback>>,
}

impl SdkLogger {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Level, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Some(Arc::new(callback)),
        }
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        match &self.callback {
            Some(callback) => callback(level, &args.to_string()),
            None => log::log!(target: "android_sdk_info", level, "{args}"),
        }
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args);
    }
}

impl fmt::Debug for SdkLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkLogger")
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_callback_receives_level_and_message() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let logger = SdkLogger::new(move |level, message| {
            sink.lock().unwrap().push((level, message.to_string()));
        });

        logger.debug(format_args!("scanning {}", "/opt/sdk/build-tools"));
        logger.warn(format_args!("missing"));

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (Level::Debug, "scanning /opt/sdk/build-tools".to_string()),
                (Level::Warn, "missing".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_logger_has_no_callback() {
        let logger = SdkLogger::default();
        assert!(!logger.has_callback());
        // Falls through to the log facade without panicking
        logger.trace(format_args!("ignored"));
    }
}
