// ── Port-bounce orchestrator ──
//
// Down port: bring it up and wait for the task.
// Up port: shut, wait for the task, then re-enable without waiting.
//
// The re-enable is not polled; only an immediate rejection from the
// controller fails the bounce. If the re-enable fails for any
// reason other than a no-change response, the port is left down.

use portbounce_api::{AdminStatus, Error as ApiError};
use tracing::{info, warn};

use crate::api::ControllerApi;
use crate::classify::NoChangeClassifier;
use crate::config::PollConfig;
use crate::error::CoreError;
use crate::model::{BounceOutcome, DeploymentMode, InterfaceDescriptor, TaskHandle};
use crate::poller::await_task_completion;

/// Cycle a port according to its current administrative state.
pub async fn bounce_interface<A, C>(
    api: &A,
    interface: &InterfaceDescriptor,
    mode: &DeploymentMode,
    poll: &PollConfig,
    classifier: &C,
) -> Result<BounceOutcome, CoreError>
where
    A: ControllerApi,
    C: NoChangeClassifier,
{
    let interface_id = interface.interface_id.as_str();

    match interface.admin_status {
        AdminStatus::Down => {
            info!(interface_id, %mode, "port is down, bringing it up");
            let task = submit_tracked(api, interface_id, AdminStatus::Up, mode).await?;
            await_task_completion(api, &task.task_id, poll).await?;
            Ok(BounceOutcome::BroughtUp)
        }
        AdminStatus::Up => {
            info!(interface_id, %mode, "shutting port");
            let task = submit_tracked(api, interface_id, AdminStatus::Down, mode).await?;
            await_task_completion(api, &task.task_id, poll).await?;

            info!(interface_id, "re-enabling port");
            restore(api, interface_id, mode, classifier).await
        }
    }
}

/// Submit a state change whose task will be polled; a task id is required.
async fn submit_tracked<A: ControllerApi>(
    api: &A,
    interface_id: &str,
    admin_status: AdminStatus,
    mode: &DeploymentMode,
) -> Result<TaskHandle, CoreError> {
    let submission = api
        .submit_admin_status(interface_id, admin_status, mode)
        .await?;

    submission
        .task_id()
        .map(|task_id| TaskHandle {
            task_id: task_id.to_owned(),
        })
        .ok_or_else(|| CoreError::TaskSubmissionFailed {
            interface_id: interface_id.to_owned(),
        })
}

/// Final `UP` request. Fire-and-forget: no task id needed, nothing polled.
async fn restore<A, C>(
    api: &A,
    interface_id: &str,
    mode: &DeploymentMode,
    classifier: &C,
) -> Result<BounceOutcome, CoreError>
where
    A: ControllerApi,
    C: NoChangeClassifier,
{
    match api
        .apply_admin_status(interface_id, AdminStatus::Up, mode)
        .await
    {
        Ok(()) => Ok(BounceOutcome::Cycled),
        Err(ApiError::Http { status, ref body, .. }) if classifier.is_no_change(body) => {
            warn!(interface_id, status, "controller reported no change on re-enable");
            Ok(BounceOutcome::CycledNoChange)
        }
        Err(e) => Err(e.into()),
    }
}
