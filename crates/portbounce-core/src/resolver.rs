// ── Interface resolver ──
//
// Hardware address → (port name, parent device) → (interface id, admin
// status). Two lookups, each against a single controller response.

use portbounce_api::AdminStatus;
use portbounce_api::models::{ClientDetail, TopologyNode};
use tracing::debug;

use crate::api::ControllerApi;
use crate::error::CoreError;
use crate::model::{ClientLookup, InterfaceDescriptor, MacAddress};

/// Find the switch port and parent device a client is attached to.
pub async fn resolve_client<A: ControllerApi>(
    api: &A,
    mac: &MacAddress,
) -> Result<ClientLookup, CoreError> {
    let resp = api.fetch_client_detail(mac).await?;
    let detail = resp.detail.as_ref();

    let interface_name = detail
        .and_then(|d| d.port.as_deref())
        .filter(|port| !port.is_empty())
        .ok_or_else(|| CoreError::resolution(format!("connected port for client {mac}")))?;

    let parent_device_id = detail
        .and_then(parent_from_connected_device)
        .or_else(|| {
            resp.topology
                .as_ref()
                .and_then(|t| parent_from_topology(&t.nodes))
        })
        .ok_or_else(|| CoreError::resolution(format!("parent device for client {mac}")))?;

    debug!(%mac, interface_name, parent_device_id, "client resolved");
    Ok(ClientLookup {
        interface_name: interface_name.to_owned(),
        parent_device_id: parent_device_id.to_owned(),
    })
}

/// Primary source: the first entry of the detail's connected-device list.
fn parent_from_connected_device(detail: &ClientDetail) -> Option<&str> {
    detail
        .connected_device
        .as_deref()?
        .first()?
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
}

/// Best-effort fallback: the second node of the client's topology graph.
///
/// Assumes the controller lists the client itself first and its
/// immediate upstream neighbour second. That ordering is observed, not
/// documented, so this is a heuristic; a graph of one node or fewer
/// yields nothing.
pub fn parent_from_topology(nodes: &[TopologyNode]) -> Option<&str> {
    nodes
        .get(1)?
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
}

/// Find an interface's id and administrative state on its parent device.
pub async fn resolve_interface<A: ControllerApi>(
    api: &A,
    parent_device_id: &str,
    interface_name: &str,
) -> Result<InterfaceDescriptor, CoreError> {
    let resp = api.fetch_interface(parent_device_id, interface_name).await?;
    let record = resp.response.unwrap_or_default();

    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
    let (Some(interface_id), Some(raw_status)) =
        (non_empty(record.id), non_empty(record.admin_status))
    else {
        return Err(CoreError::resolution(format!(
            "id and admin status of {interface_name} on device {parent_device_id}"
        )));
    };

    let admin_status = raw_status.parse::<AdminStatus>().map_err(|_| {
        CoreError::resolution(format!(
            "admin status of {interface_name}: unexpected value {raw_status:?}"
        ))
    })?;

    debug!(%interface_id, %admin_status, "interface resolved");
    Ok(InterfaceDescriptor {
        interface_id,
        admin_status,
    })
}
