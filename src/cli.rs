//! CLI argument parsing and command execution

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use registry_paths::client::ApiClient;
use registry_paths::defaults::{DEFAULT_LOG_LEVEL, DEFAULT_ROOT_GROUP};
use registry_paths::format::format_item;
use registry_paths::item::GroupId;
use registry_paths::traversal;

/// Registry Paths - List every group, project and registry repository under a group
#[derive(Parser, Debug)]
#[command(name = "registry-paths")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the platform API (e.g. https://gitlab.example.com/api/v4)
    #[arg(value_name = "BASE_URL")]
    base_url: String,

    /// Access token, sent as `Authorization: Bearer <TOKEN>`
    #[arg(value_name = "TOKEN")]
    token: String,

    /// Root group to enumerate
    #[arg(
        long,
        value_name = "ID",
        env = "REGISTRY_PATHS_GROUP",
        default_value_t = DEFAULT_ROOT_GROUP
    )]
    group: u64,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        env = "REGISTRY_PATHS_LOG",
        default_value = DEFAULT_LOG_LEVEL
    )]
    log_level: String,
}

impl Cli {
    /// Execute the enumeration and print one line per record.
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let client = ApiClient::new(&self.base_url, self.token)
            .with_context(|| format!("Failed to set up API client for {}", self.base_url))?;

        let root = GroupId(self.group);
        let items = traversal::enumerate(&client, root)
            .with_context(|| format!("Failed to enumerate group {}", root))?;

        let mut stdout = io::stdout().lock();
        for item in &items {
            writeln!(stdout, "{}", format_item(item))?;
        }
        stdout.flush()?;

        Ok(())
    }
}

/// Diagnostics go to stderr so stdout only carries result lines.
fn init_logging(filters: &str) {
    env_logger::Builder::new()
        .parse_filters(filters)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}
