//! Configuration for the portbounce CLI.
//!
//! TOML profiles and the credential, TLS, and polling pieces of a
//! `portbounce_core::ControllerConfig`. The CLI layers its flag overrides
//! on top of the functions here.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use portbounce_core::{AuthCredentials, PollConfig, TlsVerification};

/// Controller base URL (full, including scheme).
pub const ENV_URL: &str = "CCC_URL";
/// Username for the token exchange.
pub const ENV_USERNAME: &str = "CCC_UN";
/// Password for the token exchange.
pub const ENV_PASSWORD: &str = "CCC_PW";

/// Prefix for file-level overrides (`PORTBOUNCE_DEFAULTS__TIMEOUT=60`).
pub const ENV_PREFIX: &str = "PORTBOUNCE_";

/// `PORTBOUNCE_*` variables consumed directly as CLI flag values. They are
/// not config keys and must not reach the figment extraction.
const FLAG_ENV_KEYS: [&str; 6] = [
    "profile",
    "controller",
    "username",
    "password",
    "token",
    "output",
];

const KEYRING_SERVICE: &str = "portbounce";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no controller URL configured for profile '{profile}'")]
    NoController { profile: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named controller profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Delay between task status checks, in seconds.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Give up on a task after this many checks. Unset polls forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_poll_attempts: Option<u32>,

    /// Forwarded verbatim as `deploymentMode` on admin-state changes.
    #[serde(default = "default_deployment_mode")]
    pub deployment_mode: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
            poll_interval_secs: default_poll_interval(),
            max_poll_attempts: None,
            deployment_mode: default_deployment_mode(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_poll_interval() -> u64 {
    1
}
fn default_deployment_mode() -> String {
    portbounce_core::DeploymentMode::DEPLOY.into()
}

/// A named controller profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Controller base URL (e.g., "https://dnac.example.com").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,

    /// Username for the token exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Password (plaintext, prefer keyring or env var).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Environment variable name containing the password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,

    /// Pre-issued session token. Skips the token exchange when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Path to custom CA certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,

    /// `true` skips verification, `false` forces the system store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,

    /// Override timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Override poll interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_secs: Option<u64>,

    /// Override poll bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_poll_attempts: Option<u32>,
}

const REDACTED: &str = "********";

impl Profile {
    /// Copy with secrets masked, for display.
    pub fn redacted(&self) -> Self {
        let mask = |v: &Option<String>| v.as_ref().map(|_| REDACTED.to_owned());
        Self {
            password: mask(&self.password),
            token: mask(&self.token),
            ..self.clone()
        }
    }

    /// Render as a standalone TOML table.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "portbounce", "portbounce").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("portbounce");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(
            Env::prefixed(ENV_PREFIX)
                .ignore(&FLAG_ENV_KEYS)
                .split("__"),
        );

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Credential resolution (without CLI flags) ───────────────────────

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn keyring_secret(profile_name: &str, kind: &str) -> Option<String> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/{kind}"))
        .ok()?
        .get_password()
        .ok()
}

/// Parse and sanity-check a controller base URL.
pub fn parse_controller_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Validation {
        field: "controller".into(),
        reason: format!("invalid URL '{raw}': {e}"),
    })?;
    match url.scheme() {
        "https" | "http" => Ok(url),
        other => Err(ConfigError::Validation {
            field: "controller".into(),
            reason: format!("unsupported scheme '{other}' in '{raw}'"),
        }),
    }
}

/// Controller URL: `CCC_URL` wins over the profile.
pub fn resolve_controller(profile: &Profile, profile_name: &str) -> Result<Url, ConfigError> {
    resolve_controller_with(profile, profile_name, process_env)
}

fn resolve_controller_with(
    profile: &Profile,
    profile_name: &str,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Url, ConfigError> {
    let raw = env(ENV_URL)
        .or_else(|| profile.controller.clone())
        .ok_or_else(|| ConfigError::NoController {
            profile: profile_name.into(),
        })?;
    parse_controller_url(&raw)
}

/// Username: `CCC_UN` wins over the profile.
pub fn resolve_username(profile: &Profile) -> Option<String> {
    resolve_username_with(profile, process_env)
}

fn resolve_username_with(profile: &Profile, env: impl Fn(&str) -> Option<String>) -> Option<String> {
    env(ENV_USERNAME).or_else(|| profile.username.clone())
}

/// Resolve a password from the credential chain (no CLI flag step).
///
/// Order: the profile's `password_env`, `CCC_PW`, `PORTBOUNCE_PASSWORD`,
/// the system keyring, then plaintext in the profile.
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Option<SecretString> {
    resolve_password_with(profile, profile_name, process_env)
}

fn resolve_password_with(
    profile: &Profile,
    profile_name: &str,
    env: impl Fn(&str) -> Option<String>,
) -> Option<SecretString> {
    // 1. Environment
    let from_env = profile
        .password_env
        .as_deref()
        .and_then(&env)
        .or_else(|| env(ENV_PASSWORD))
        .or_else(|| env("PORTBOUNCE_PASSWORD"));
    if let Some(pw) = from_env {
        return Some(SecretString::from(pw));
    }

    // 2. System keyring
    if let Some(pw) = keyring_secret(profile_name, "password") {
        return Some(SecretString::from(pw));
    }

    // 3. Plaintext in config
    profile.password.clone().map(SecretString::from)
}

/// Resolve `AuthCredentials`: a token if one is configured, otherwise
/// username + password for the token exchange.
pub fn resolve_auth(profile: &Profile, profile_name: &str) -> Result<AuthCredentials, ConfigError> {
    resolve_auth_with(profile, profile_name, process_env)
}

fn resolve_auth_with(
    profile: &Profile,
    profile_name: &str,
    env: impl Fn(&str) -> Option<String>,
) -> Result<AuthCredentials, ConfigError> {
    if let Some(ref token) = profile.token {
        return Ok(AuthCredentials::Token(SecretString::from(token.clone())));
    }

    let no_credentials = || ConfigError::NoCredentials {
        profile: profile_name.into(),
    };
    let username = resolve_username_with(profile, &env).ok_or_else(no_credentials)?;
    let password = resolve_password_with(profile, profile_name, &env).ok_or_else(no_credentials)?;
    Ok(AuthCredentials::Credentials { username, password })
}

/// TLS mode for a profile.
///
/// Controllers are usually self-signed, so verification is off unless the
/// profile supplies a CA or sets `insecure = false` explicitly.
pub fn resolve_tls(profile: &Profile) -> TlsVerification {
    if profile.insecure == Some(true) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else if profile.insecure == Some(false) {
        TlsVerification::SystemDefaults
    } else {
        TlsVerification::DangerAcceptInvalid
    }
}

/// Task polling from profile values, falling back to `defaults`.
pub fn resolve_poll(profile: &Profile, defaults: &Defaults) -> PollConfig {
    PollConfig {
        interval: Duration::from_secs(
            profile
                .poll_interval_secs
                .unwrap_or(defaults.poll_interval_secs),
        ),
        max_attempts: profile.max_poll_attempts.or(defaults.max_poll_attempts),
    }
}
