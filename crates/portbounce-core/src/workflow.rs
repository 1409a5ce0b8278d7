// ── Workflow entry ──
//
// Sequential composition: resolve client → resolve interface → bounce.
// Errors from any stage propagate untouched.

use tracing::info;

use crate::api::ControllerApi;
use crate::bounce::bounce_interface;
use crate::classify::{NoChangeClassifier, NoChangeInSetting};
use crate::config::PollConfig;
use crate::error::CoreError;
use crate::model::{BounceOutcome, DeploymentMode, MacAddress, PortLookup, TaskStatus};
use crate::poller::fetch_task_status;
use crate::resolver::{resolve_client, resolve_interface};

/// Owns the controller transport for the lifetime of a run and exposes
/// the port-bounce workflow on top of it.
pub struct PortBounce<A, C = NoChangeInSetting> {
    api: A,
    poll: PollConfig,
    classifier: C,
}

impl<A: ControllerApi> PortBounce<A> {
    /// Default polling (1s, unbounded) and the default no-change classifier.
    pub fn new(api: A) -> Self {
        Self {
            api,
            poll: PollConfig::default(),
            classifier: NoChangeInSetting,
        }
    }
}

impl<A, C> PortBounce<A, C>
where
    A: ControllerApi,
    C: NoChangeClassifier,
{
    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    /// Swap the predicate that recognises "already in that state" errors.
    pub fn with_classifier<D: NoChangeClassifier>(self, classifier: D) -> PortBounce<A, D> {
        PortBounce {
            api: self.api,
            poll: self.poll,
            classifier,
        }
    }

    pub fn poll_config(&self) -> &PollConfig {
        &self.poll
    }

    /// Resolve where a client is plugged in without changing anything.
    pub async fn lookup_port(&self, mac: &MacAddress) -> Result<PortLookup, CoreError> {
        let client = resolve_client(&self.api, mac).await?;
        let interface =
            resolve_interface(&self.api, &client.parent_device_id, &client.interface_name).await?;
        Ok(PortLookup {
            mac_address: mac.clone(),
            client,
            interface,
        })
    }

    /// Shut / no-shut the port a client is attached to.
    pub async fn bounce_port(
        &self,
        mac: &MacAddress,
        mode: &DeploymentMode,
    ) -> Result<BounceOutcome, CoreError> {
        let lookup = self.lookup_port(mac).await?;
        info!(
            %mac,
            interface = %lookup.client.interface_name,
            device = %lookup.client.parent_device_id,
            admin_status = %lookup.interface.admin_status,
            "port located"
        );

        let outcome = bounce_interface(
            &self.api,
            &lookup.interface,
            mode,
            &self.poll,
            &self.classifier,
        )
        .await?;

        info!(%mac, %outcome, "port bounce finished");
        Ok(outcome)
    }

    /// Current status of a controller task (single check, no polling).
    pub async fn task_status(&self, task_id: &str) -> Result<TaskStatus, CoreError> {
        fetch_task_status(&self.api, task_id).await
    }
}
