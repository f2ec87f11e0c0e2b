//! Application configuration
//!
//! Every setting comes from a command-line flag or its environment variable
//! (a `.env` file in the working directory is loaded first).

use std::path::PathBuf;

use clap::Args;
use reserve_client::config::DEFAULT_BASE_URL;
use reserve_client::ClientConfig;

/// Connection and logging flags shared by every subcommand
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Reservation API base URL
    #[arg(long, global = true, env = "RESERVE_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds (none by default)
    #[arg(long, global = true, env = "RESERVE_API_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Accept self-signed backend certificates
    #[arg(long, global = true, env = "RESERVE_API_INSECURE")]
    pub insecure: bool,

    /// Also write daily rolling log files to this directory
    #[arg(long, global = true, env = "RESERVE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Answer yes to confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub log_dir: Option<PathBuf>,
    pub assume_yes: bool,
}

impl AppConfig {
    pub fn from_args(args: &GlobalArgs) -> Self {
        let mut client =
            ClientConfig::new(args.api_url.clone()).with_accept_invalid_certs(args.insecure);
        if let Some(seconds) = args.timeout {
            client = client.with_timeout(seconds);
        }

        Self {
            client,
            log_dir: args.log_dir.clone(),
            assume_yes: args.yes,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            log_dir: None,
            assume_yes: false,
        }
    }
}
