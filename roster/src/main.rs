//! Roster entry-point: wires the HTTP user source, the datasource and the
//! console front end.

use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tokio::io::{BufReader, stdin, stdout};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_roster::domain::{UserDatasource, UsersPage};
use user_roster::inbound::console::run_console;
use user_roster::outbound::jsonplaceholder::HttpUserSource;
use user_roster::RosterSettings;

/// Application bootstrap.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // Logs go to stderr so stdout carries only the console session.
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        RosterSettings::load().map_err(|error| eyre!("failed to load settings: {error}"))?;
    let endpoint = settings.endpoint()?;
    let source = HttpUserSource::with_timeout(endpoint, settings.request_timeout())
        .wrap_err("failed to build HTTP client")?;
    info!(endpoint = %source.endpoint(), "starting user roster");

    let datasource = Arc::new(UserDatasource::new(Arc::new(source)));
    let mut page = UsersPage::new(datasource);
    run_console(&mut page, BufReader::new(stdin()), stdout())
        .await
        .wrap_err("console session failed")?;
    Ok(())
}
