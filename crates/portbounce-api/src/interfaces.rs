// Interface lookup and administrative state changes

use tracing::debug;

use crate::client::CatalystClient;
use crate::error::Error;
use crate::models::{AdminStatus, AdminStatusUpdate, InterfaceResponse, TaskSubmission};

impl CatalystClient {
    /// Find an interface on a network device by its name.
    ///
    /// `GET /dna/intent/api/v1/interface/network-device/{device_id}/interface-name?name={name}`
    pub async fn interface_by_name(
        &self,
        device_id: &str,
        interface_name: &str,
    ) -> Result<InterfaceResponse, Error> {
        let url = self.intent_url(&[
            "interface",
            "network-device",
            device_id,
            "interface-name",
        ])?;
        self.get(url, &[("name", interface_name)]).await
    }

    /// Set an interface's administrative state.
    ///
    /// `PUT /dna/intent/api/v1/interface/{interface_id}?deploymentMode={mode}`
    ///
    /// The controller applies the change asynchronously and answers with a
    /// task handle. `deployment_mode` is passed through untouched.
    pub async fn update_admin_status(
        &self,
        interface_id: &str,
        admin_status: AdminStatus,
        deployment_mode: &str,
    ) -> Result<TaskSubmission, Error> {
        let url = self.intent_url(&["interface", interface_id])?;
        debug!(interface_id, %admin_status, deployment_mode, "updating admin status");
        self.put(
            url,
            &[("deploymentMode", deployment_mode)],
            &AdminStatusUpdate { admin_status },
        )
        .await
    }

    /// Set an interface's administrative state without tracking the task.
    ///
    /// Same request as [`update_admin_status`](Self::update_admin_status).
    /// Any non-blank 2xx body counts as accepted; the task handle is not
    /// required and is not parsed.
    pub async fn apply_admin_status(
        &self,
        interface_id: &str,
        admin_status: AdminStatus,
        deployment_mode: &str,
    ) -> Result<(), Error> {
        let url = self.intent_url(&["interface", interface_id])?;
        debug!(interface_id, %admin_status, deployment_mode, "applying admin status");
        self.put_acknowledged(
            url,
            &[("deploymentMode", deployment_mode)],
            &AdminStatusUpdate { admin_status },
        )
        .await
    }
}
