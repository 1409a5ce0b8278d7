// portbounce-api: Async Rust client for the Catalyst Center intent API

pub mod auth;
pub mod client;
pub mod clients;
pub mod error;
pub mod interfaces;
pub mod models;
pub mod tasks;
pub mod transport;

pub use auth::Credentials;
pub use client::CatalystClient;
pub use error::Error;
pub use models::AdminStatus;
pub use transport::{TlsMode, TransportConfig};
