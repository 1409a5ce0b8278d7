// ── Task poller ──
//
// Drives a controller-side asynchronous task to a terminal state with a
// fixed delay between checks. No backoff. With the default `PollConfig`
// there is no upper bound either: a task stuck in PENDING is polled forever.

use tracing::{debug, trace};

use crate::api::ControllerApi;
use crate::config::PollConfig;
use crate::error::CoreError;
use crate::model::TaskStatus;

/// Fetch a task's current status once.
pub async fn fetch_task_status<A: ControllerApi>(
    api: &A,
    task_id: &str,
) -> Result<TaskStatus, CoreError> {
    let detail = api.fetch_task(task_id).await?;
    detail
        .status()
        .map(TaskStatus::from)
        .ok_or_else(|| CoreError::EmptyResponse {
            endpoint: format!("tasks/{task_id}"),
            detail: "response carried no task status".into(),
        })
}

/// Poll until the task reaches `SUCCESS`.
///
/// Any other terminal status fails immediately with `TaskFailed`. When
/// `poll.max_attempts` is set and exhausted, fails with `TaskTimedOut`.
pub async fn await_task_completion<A: ControllerApi>(
    api: &A,
    task_id: &str,
    poll: &PollConfig,
) -> Result<(), CoreError> {
    let mut attempts: u32 = 0;
    loop {
        let status = fetch_task_status(api, task_id).await?;
        attempts = attempts.saturating_add(1);

        match status {
            TaskStatus::Success => {
                debug!(task_id, attempts, "task completed");
                return Ok(());
            }
            TaskStatus::Pending => {
                if poll.max_attempts.is_some_and(|max| attempts >= max) {
                    return Err(CoreError::TaskTimedOut {
                        task_id: task_id.to_owned(),
                        attempts,
                    });
                }
                trace!(task_id, attempts, "task pending");
                tokio::time::sleep(poll.interval).await;
            }
            TaskStatus::Other(status) => {
                return Err(CoreError::TaskFailed {
                    task_id: task_id.to_owned(),
                    status,
                });
            }
        }
    }
}
