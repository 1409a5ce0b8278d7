// Wire types for the intent API endpoints used by portbounce.
//
// Every field the controller may omit is an `Option`; deciding whether a
// missing field is fatal is the caller's job, not the deserializer's.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

// ── Client detail ────────────────────────────────────────────────────

/// `GET /client-detail?macAddress=...`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetailResponse {
    #[serde(default)]
    pub detail: Option<ClientDetail>,
    #[serde(default)]
    pub topology: Option<Topology>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetail {
    /// Name of the switch port the client is attached to.
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub connected_device: Option<Vec<ConnectedDevice>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedDevice {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
    #[serde(default)]
    pub nodes: Vec<TopologyNode>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyNode {
    #[serde(default)]
    pub id: Option<String>,
}

// ── Interfaces ───────────────────────────────────────────────────────

/// `GET /interface/network-device/{id}/interface-name?name=...`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InterfaceResponse {
    #[serde(default)]
    pub response: Option<InterfaceRecord>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceRecord {
    #[serde(default)]
    pub id: Option<String>,
    /// Raw administrative state, normally `UP` or `DOWN`.
    #[serde(default)]
    pub admin_status: Option<String>,
}

/// Administrative state of a switch port.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AdminStatus {
    Up,
    Down,
}

/// Body of `PUT /interface/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatusUpdate {
    pub admin_status: AdminStatus,
}

// ── Tasks ────────────────────────────────────────────────────────────

/// Envelope returned by state-mutating calls.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskSubmission {
    #[serde(default)]
    pub response: Option<TaskRef>,
}

impl TaskSubmission {
    /// The asynchronous task identifier, if the controller issued one.
    pub fn task_id(&self) -> Option<&str> {
        self.response
            .as_ref()
            .and_then(|r| r.task_id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    #[serde(default)]
    pub task_id: Option<String>,
}

/// `GET /tasks/{id}`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskDetail {
    #[serde(default)]
    pub response: Option<TaskRecord>,
}

impl TaskDetail {
    /// The raw task status string (`PENDING`, `SUCCESS`, `FAILURE`, ...).
    pub fn status(&self) -> Option<&str> {
        self.response.as_ref().and_then(|r| r.status.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    #[serde(default)]
    pub status: Option<String>,
}
