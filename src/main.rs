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

use android_sdk_info::commands::build_tools::BuildToolsCommand;
use android_sdk_info::commands::cmdline_tools::CmdlineToolsCommand;
use android_sdk_info::commands::info::InfoCommand;
use android_sdk_info::commands::platform::PlatformCommand;
use android_sdk_info::commands::platforms::PlatformsCommand;
use android_sdk_info::config::SdkConfig;
use android_sdk_info::error::{Result, format_error_with_color, get_exit_code};
use android_sdk_info::logging::{self, SdkLogger};
use android_sdk_info::provider::create_root_provider;
use android_sdk_info::sdk_info::SdkInfo;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "android-sdk-info")]
#[command(author, version, about = "Locate tools and platforms in an Android SDK", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Android SDK root (overrides config and ANDROID_HOME)
    #[arg(long, value_name = "PATH", global = true)]
    sdk: Option<PathBuf>,

    /// Java SDK root (overrides config and JAVA_HOME)
    #[arg(long, value_name = "PATH", global = true)]
    java: Option<PathBuf>,

    /// Android NDK root (overrides config and ANDROID_NDK_HOME)
    #[arg(long, value_name = "PATH", global = true)]
    ndk: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List build-tools directories in search order
    #[command(visible_alias = "bt")]
    BuildTools {
        /// Version to search first (e.g., "34.0.0")
        #[arg(long, value_name = "VERSION")]
        preferred: Option<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List command-line tools directories in search order
    #[command(visible_alias = "ct")]
    CmdlineTools {
        /// Version to search first (e.g., "latest", "11.0")
        #[arg(long, value_name = "VERSION")]
        preferred: Option<String>,

        /// Show only the first match
        #[arg(long)]
        first: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show the installed directory of one platform
    Platform {
        /// API level or platform id (e.g., "34", "Tiramisu", "Baklava")
        id: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List installed platforms
    #[command(visible_alias = "ls")]
    Platforms {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved SDK, NDK and Java locations
    Info {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn setup_logger(cli: &Cli) {
    logging::setup_logger(cli.verbose);
}

fn load_config(cli: &Cli) -> Result<SdkConfig> {
    let mut config = SdkConfig::load_default()?;

    // Command-line paths win over the config file
    if let Some(sdk) = &cli.sdk {
        config.paths.android_sdk = Some(sdk.clone());
    }
    if let Some(java) = &cli.java {
        config.paths.java_sdk = Some(java.clone());
    }
    if let Some(ndk) = &cli.ndk {
        config.paths.android_ndk = Some(ndk.clone());
    }

    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let logger = SdkLogger::default();
    let provider = create_root_provider(config.paths.clone(), logger.clone());
    let info = SdkInfo::new(provider, Some(logger))?;

    match cli.command {
        Commands::BuildTools { preferred, json } => {
            let command = BuildToolsCommand::new(&info, &config)?;
            command.execute(preferred.as_deref(), json)
        }
        Commands::CmdlineTools {
            preferred,
            first,
            json,
        } => {
            let command = CmdlineToolsCommand::new(&info, &config)?;
            command.execute(preferred.as_deref(), first, json)
        }
        Commands::Platform { id, json } => {
            let command = PlatformCommand::new(&info)?;
            command.execute(&id, json)
        }
        Commands::Platforms { json } => {
            let command = PlatformsCommand::new(&info)?;
            command.execute(json)
        }
        Commands::Info { json } => {
            let command = InfoCommand::new(&info)?;
            command.execute(json)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger based on CLI flags and environment
    setup_logger(&cli);

    if let Err(e) = run(cli) {
        eprintln!(
            "{}",
            format_error_with_color(&e, std::io::stderr().is_terminal())
        );
        std::process::exit(get_exit_code(&e));
    }
}
