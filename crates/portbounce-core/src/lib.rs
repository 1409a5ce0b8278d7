//! Port resolution and shut/no-shut orchestration for Catalyst Center.
//!
//! Given a client's hardware address, this crate finds the switch port the
//! client is attached to and cycles it administratively, which forces the
//! endpoint (typically a PoE phone, camera, or access point) to
//! re-negotiate its link.
//!
//! - **[`PortBounce`]**: the workflow entry point. Owns the controller
//!   transport and composes the steps below.
//! - **[`resolver`]**: hardware address → port name and parent device →
//!   interface id and admin status.
//! - **[`bounce`]**: the state machine issuing admin-state changes.
//! - **[`poller`]**: fixed-interval polling of controller-side tasks.
//! - **[`ControllerApi`]**: the transport capability the workflow calls
//!   through, implemented by [`portbounce_api::CatalystClient`].

pub mod api;
pub mod bounce;
pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod poller;
pub mod resolver;
pub mod session;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

// ── Primary re-exports ──────────────────────────────────────────────
pub use api::ControllerApi;
pub use classify::{NO_CHANGE_MARKER, NoChangeClassifier, NoChangeInSetting};
pub use config::{AuthCredentials, ControllerConfig, PollConfig, TlsVerification};
pub use error::CoreError;
pub use model::{
    AdminStatus, BounceOutcome, ClientLookup, DeploymentMode, InterfaceDescriptor,
    InvalidMacAddress, MacAddress, PortLookup, TaskHandle, TaskStatus,
};
pub use session::{connect, open};
pub use workflow::PortBounce;
