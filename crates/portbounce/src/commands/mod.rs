//! Command handlers. Each needs a connected workflow except `config`
//! and `completions`, which main handles before connecting.

pub mod bounce;
pub mod config_cmd;
pub mod lookup;
pub mod task;

use portbounce_core::{ControllerApi, PortBounce};

use crate::cli::Command;
use crate::error::CliError;
use crate::output::Render;

/// Route a controller-backed command to its handler.
pub async fn dispatch<A: ControllerApi>(
    cmd: Command,
    workflow: &PortBounce<A>,
    render: &Render,
    default_mode: &str,
) -> Result<(), CliError> {
    match cmd {
        Command::Bounce(args) => bounce::handle(args, workflow, render, default_mode).await,
        Command::Lookup(args) => lookup::handle(args, workflow, render).await,
        Command::Task(args) => task::handle(args, workflow, render).await,
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
