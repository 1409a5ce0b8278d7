// ── Domain types ──
//
// Transient values passed between resolver, poller, and orchestrator.
// Nothing here outlives a single workflow run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use portbounce_api::AdminStatus;

// ── MacAddress ──────────────────────────────────────────────────────

/// Hardware address, normalized to uppercase colon-separated form
/// (`00:A2:89:AA:AA:AA`), which is what the client-detail lookup expects.
///
/// Parsed with [`FromStr`]: colon-separated, dash-separated, Cisco dotted,
/// or bare hex. Anything that is not exactly twelve hex digits is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MacAddress(String);

/// Input that does not spell a 48-bit hardware address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid MAC address '{input}': expected 12 hex digits, e.g. 00:A2:89:AA:AA:AA")]
pub struct InvalidMacAddress {
    pub input: String,
}

impl MacAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MacAddress {
    type Err = InvalidMacAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex: Vec<char> = trimmed
            .chars()
            .filter(|c| !matches!(c, ':' | '-' | '.'))
            .collect();

        if hex.len() != 12 || !hex.iter().all(char::is_ascii_hexdigit) {
            return Err(InvalidMacAddress {
                input: trimmed.to_owned(),
            });
        }

        let pairs: Vec<String> = hex
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>().to_ascii_uppercase())
            .collect();
        Ok(Self(pairs.join(":")))
    }
}

// ── DeploymentMode ──────────────────────────────────────────────────

/// Value of the `deploymentMode` query parameter on state changes.
///
/// Opaque to this crate: forwarded verbatim to the controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentMode(String);

impl DeploymentMode {
    pub const DEPLOY: &'static str = "Deploy";
    pub const PREVIEW: &'static str = "Preview";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Apply the change.
    pub fn deploy() -> Self {
        Self::new(Self::DEPLOY)
    }

    /// Dry run: the controller validates but does not push config.
    pub fn preview() -> Self {
        Self::new(Self::PREVIEW)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DeploymentMode {
    fn default() -> Self {
        Self::deploy()
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Lookup results ──────────────────────────────────────────────────

/// Where a client is plugged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientLookup {
    pub interface_name: String,
    pub parent_device_id: String,
}

/// Identity and administrative state of a switch port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceDescriptor {
    pub interface_id: String,
    pub admin_status: AdminStatus,
}

/// Both resolution steps for one hardware address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortLookup {
    pub mac_address: MacAddress,
    pub client: ClientLookup,
    pub interface: InterfaceDescriptor,
}

// ── Tasks ───────────────────────────────────────────────────────────

/// Handle to a controller-side asynchronous job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskHandle {
    pub task_id: String,
}

/// Observed state of a task. Only `PENDING` is non-terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TaskStatus {
    Pending,
    Success,
    Other(String),
}

impl TaskStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl From<&str> for TaskStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "PENDING" => Self::Pending,
            "SUCCESS" => Self::Success,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("PENDING"),
            Self::Success => f.write_str("SUCCESS"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

// ── Outcome ─────────────────────────────────────────────────────────

/// What the orchestrator did to the port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum BounceOutcome {
    /// Port was administratively down; it was brought up.
    #[strum(to_string = "port was down and has been brought up")]
    BroughtUp,
    /// Port was taken down and brought back up.
    #[strum(to_string = "port was shut and re-enabled")]
    Cycled,
    /// Port was taken down; the controller reported the re-enable as a no-op.
    #[strum(to_string = "port was shut; controller reported no change on re-enable")]
    CycledNoChange,
}
