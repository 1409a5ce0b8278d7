// ── Session setup ──
//
// Builds the authenticated transport from a `ControllerConfig`. Called
// once by the entry point; the resulting client is then passed to
// `PortBounce` and reused for every request of the run.

use portbounce_api::{CatalystClient, Credentials};
use tracing::debug;

use crate::config::ControllerConfig;
use crate::error::CoreError;
use crate::workflow::PortBounce;

/// Authenticate against the controller and return a ready client.
pub async fn connect(config: &ControllerConfig) -> Result<CatalystClient, CoreError> {
    let transport = config.transport();
    let credentials = Credentials::from(&config.auth);

    debug!(url = %config.url, "connecting to controller");
    let client = CatalystClient::connect(&config.url, &credentials, &transport).await?;
    debug!("session established");
    Ok(client)
}

/// Connect and wrap the client in a workflow using the configured polling.
pub async fn open(config: &ControllerConfig) -> Result<PortBounce<CatalystClient>, CoreError> {
    let client = connect(config).await?;
    Ok(PortBounce::new(client).with_poll_config(config.poll))
}
