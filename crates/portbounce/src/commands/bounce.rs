//! `portbounce bounce <MAC>`

use serde::Serialize;

use portbounce_core::{BounceOutcome, ControllerApi, DeploymentMode, MacAddress, PortBounce};

use crate::cli::BounceArgs;
use crate::error::CliError;
use crate::output::{self, Field, Render};

#[derive(Debug, Serialize)]
struct BounceReport {
    mac_address: MacAddress,
    deployment_mode: DeploymentMode,
    outcome: BounceOutcome,
    summary: String,
}

/// Map the `--mode` value onto the controller's spelling.
///
/// `deploy` and `preview` are matched case-insensitively; anything else is
/// forwarded untouched.
pub fn parse_mode(raw: &str) -> DeploymentMode {
    if raw.eq_ignore_ascii_case(DeploymentMode::DEPLOY) {
        DeploymentMode::deploy()
    } else if raw.eq_ignore_ascii_case(DeploymentMode::PREVIEW) {
        DeploymentMode::preview()
    } else {
        DeploymentMode::new(raw)
    }
}

fn outcome_code(outcome: BounceOutcome) -> &'static str {
    match outcome {
        BounceOutcome::BroughtUp => "brought_up",
        BounceOutcome::Cycled => "cycled",
        BounceOutcome::CycledNoChange => "cycled_no_change",
    }
}

pub async fn handle<A: ControllerApi>(
    args: BounceArgs,
    workflow: &PortBounce<A>,
    render: &Render,
    default_mode: &str,
) -> Result<(), CliError> {
    let mac = args.mac;
    let mode = parse_mode(args.mode.as_deref().unwrap_or(default_mode));

    let outcome = workflow.bounce_port(&mac, &mode).await?;

    let report = BounceReport {
        mac_address: mac,
        deployment_mode: mode,
        outcome,
        summary: outcome.to_string(),
    };

    let rendered = output::render_single(
        render.format,
        &report,
        |r| {
            vec![
                Field::new("MAC", r.mac_address.to_string()),
                Field::new("Mode", r.deployment_mode.to_string()),
                Field::new("Outcome", outcome_code(r.outcome)),
            ]
        },
        |r| outcome_code(r.outcome).to_owned(),
    )?;

    if matches!(render.format, crate::cli::OutputFormat::Table) {
        let ok = outcome != BounceOutcome::CycledNoChange;
        render.print(&output::paint_status(&report.summary, ok, render.color));
    }
    render.print(&rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_modes_are_canonicalised() {
        assert_eq!(parse_mode("deploy"), DeploymentMode::deploy());
        assert_eq!(parse_mode("PREVIEW"), DeploymentMode::preview());
        assert_eq!(parse_mode("Deploy"), DeploymentMode::deploy());
    }

    #[test]
    fn unknown_modes_pass_through() {
        assert_eq!(parse_mode("Staged").as_str(), "Staged");
    }
}
