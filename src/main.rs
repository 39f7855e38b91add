use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use elogin::auth::{MockApiService, SessionGateway};
use elogin::cli::Cli;
use elogin::config::Config;
use elogin::logging::init_tracing;
use elogin::ui::runtime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config.logging.level, &config.log_path())?;

    let gateway = Arc::new(SessionGateway::new(Arc::new(MockApiService)));
    runtime::run(&config, gateway).await?;
    Ok(())
}
