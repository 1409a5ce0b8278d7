//! `portbounce task <TASK_ID>`

use serde::Serialize;

use portbounce_core::{ControllerApi, PortBounce};

use crate::cli::TaskArgs;
use crate::error::CliError;
use crate::output::{self, Field, Render};

#[derive(Debug, Serialize)]
struct TaskReport {
    task_id: String,
    status: String,
    terminal: bool,
}

pub async fn handle<A: ControllerApi>(
    args: TaskArgs,
    workflow: &PortBounce<A>,
    render: &Render,
) -> Result<(), CliError> {
    let status = workflow.task_status(&args.task_id).await?;
    let report = TaskReport {
        task_id: args.task_id,
        status: status.to_string(),
        terminal: status.is_terminal(),
    };

    let rendered = output::render_single(
        render.format,
        &report,
        |r| {
            vec![
                Field::new("Task", r.task_id.clone()),
                Field::new("Status", r.status.clone()),
                Field::new("Finished", if r.terminal { "yes" } else { "no" }),
            ]
        },
        |r| r.status.clone(),
    )?;
    render.print(&rendered);
    Ok(())
}
