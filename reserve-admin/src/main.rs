use clap::Parser;
use reserve_admin::commands::{self, Cli, Context};
use reserve_admin::core::logging::init_logging;
use reserve_admin::core::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = AppConfig::from_args(&cli.global);
    let _log_guard = init_logging(config.log_dir.as_deref())?;

    tracing::debug!(api_url = %config.client.base_url, "Starting reserve-admin");

    let ctx = Context::new(&config)?;
    if let Err(e) = commands::run(cli.command, &ctx).await {
        tracing::error!(error = %e, "Command failed");
        return Err(e);
    }
    Ok(())
}
