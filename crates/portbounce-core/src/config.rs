// ── Runtime connection configuration ──
//
// These types describe *how* to reach a Catalyst Center controller.
// They carry credential data and tuning, but never touch disk or the
// process environment. The CLI builds a `ControllerConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use portbounce_api::{Credentials, TlsMode, TransportConfig};
use secrecy::SecretString;
use url::Url;

/// How to authenticate with a controller.
#[derive(Debug, Clone)]
pub enum AuthCredentials {
    /// Pre-issued session token.
    Token(SecretString),
    /// Username/password, exchanged for a token on connect.
    Credentials {
        username: String,
        password: SecretString,
    },
}

impl From<&AuthCredentials> for Credentials {
    fn from(auth: &AuthCredentials) -> Self {
        match auth {
            AuthCredentials::Token(token) => Credentials::Token(token.clone()),
            AuthCredentials::Credentials { username, password } => Credentials::Basic {
                username: username.clone(),
                password: password.clone(),
            },
        }
    }
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs). Default for on-prem controllers.
    #[default]
    DangerAcceptInvalid,
}

/// Task polling behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Fixed delay between status checks of a `PENDING` task.
    pub interval: Duration,
    /// Give up after this many status checks. `None` polls forever.
    pub max_attempts: Option<u32>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: None,
        }
    }
}

/// Connection descriptor for a single controller.
///
/// Built by the CLI, borrowed by the core -- core never reads config files.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Controller URL (e.g., `https://dnac.example.com`).
    pub url: Url,
    /// Authentication method and credentials.
    pub auth: AuthCredentials,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Task polling behaviour.
    pub poll: PollConfig,
}

impl ControllerConfig {
    /// Transport settings for the API client.
    pub fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
