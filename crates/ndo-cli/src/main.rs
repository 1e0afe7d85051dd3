use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use ndo_client::NdoClient;
use ndo_config::NdoConfig;

mod cli;
mod commands;
mod logging;
mod progress;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("ndomig error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let config = NdoConfig::load_with_dotenv().context("failed to load configuration")?;
    let _log_guard = logging::init(Path::new(&config.log.dir), cli.debug)?;

    config
        .controller
        .require_complete()
        .context("controller connection is not configured")?;

    let client = NdoClient::new(
        &config.controller.base_url(),
        Duration::from_secs(config.controller.timeout_secs),
        cli.ssl,
    )
    .context("failed to build HTTP client")?;

    client
        .login(
            &config.controller.domain,
            &config.controller.username,
            &config.controller.password,
        )
        .await
        .context("controller login failed")?;

    if cli.get {
        commands::export::handle(&client, &cli.filename).await
    } else {
        commands::migrate::handle(&client, &config.migrate, &cli.filename).await
    }
}
