//! `portbounce lookup <MAC>`

use portbounce_core::{ControllerApi, PortBounce, PortLookup};

use crate::cli::LookupArgs;
use crate::error::CliError;
use crate::output::{self, Field, Render};

fn fields(lookup: &PortLookup) -> Vec<Field> {
    vec![
        Field::new("MAC", lookup.mac_address.to_string()),
        Field::new("Interface", lookup.client.interface_name.clone()),
        Field::new("Device ID", lookup.client.parent_device_id.clone()),
        Field::new("Interface ID", lookup.interface.interface_id.clone()),
        Field::new("Admin status", lookup.interface.admin_status.to_string()),
    ]
}

pub async fn handle<A: ControllerApi>(
    args: LookupArgs,
    workflow: &PortBounce<A>,
    render: &Render,
) -> Result<(), CliError> {
    let mac = args.mac;
    let lookup = workflow.lookup_port(&mac).await?;

    let rendered = output::render_single(render.format, &lookup, fields, |l| {
        l.client.interface_name.clone()
    })?;
    render.print(&rendered);
    Ok(())
}
