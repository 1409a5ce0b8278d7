//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use portbounce_config::ConfigError;
use portbounce_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const TASK_FAILED: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}")]
    #[diagnostic(
        code(portbounce::connection_failed),
        help(
            "Check that the controller is reachable from this host.\n\
             For self-signed certificates use --insecure (-k) or set ca_cert in your profile."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Controller request timed out")]
    #[diagnostic(
        code(portbounce::timeout),
        help("Increase the request timeout with --timeout or check controller responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(portbounce::auth_failed),
        help(
            "Verify the username and password (or token) for this controller.\n\
             Credentials are read from flags, CCC_UN / CCC_PW, the system keyring, or the profile."
        )
    )]
    AuthFailed { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(portbounce::no_credentials),
        help(
            "Pass --username and --password, or --token.\n\
             Or set CCC_UN and CCC_PW environment variables."
        )
    )]
    NoCredentials { profile: String },

    // ── Resolution ───────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(portbounce::not_resolved),
        help(
            "Check that the MAC address belongs to a client the controller currently sees.\n\
             Run: portbounce lookup <MAC> to inspect the resolution."
        )
    )]
    NotResolved { message: String },

    #[error("Empty or unparsable response from {endpoint}")]
    #[diagnostic(code(portbounce::protocol), help("Controller said: {detail}"))]
    Protocol { endpoint: String, detail: String },

    // ── Tasks ────────────────────────────────────────────────────────
    #[error("Controller did not return a task id for interface {interface_id}")]
    #[diagnostic(code(portbounce::task_submission))]
    TaskSubmission { interface_id: String },

    #[error("Task {task_id} finished with status {status}")]
    #[diagnostic(
        code(portbounce::task_failed),
        help("Run: portbounce task {task_id} to re-check it. The port may have been left down.")
    )]
    TaskFailed { task_id: String, status: String },

    #[error("Task {task_id} still pending after {attempts} status checks")]
    #[diagnostic(
        code(portbounce::task_timed_out),
        help("Raise --max-polls or --poll-interval, then run: portbounce task {task_id}")
    )]
    TaskTimedOut { task_id: String, attempts: u32 },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Controller returned HTTP {status} for {url}")]
    #[diagnostic(code(portbounce::api_error), help("Response body: {body}"))]
    ApiError {
        status: u16,
        url: String,
        body: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(portbounce::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(portbounce::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No controller configured")]
    #[diagnostic(
        code(portbounce::no_config),
        help(
            "Pass --controller, set CCC_URL, or add a profile to the config file.\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(portbounce::config))]
    Config(Box<ConfigError>),

    // ── Serialization ────────────────────────────────────────────────
    #[error("Failed to render JSON output: {0}")]
    #[diagnostic(code(portbounce::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML output: {0}")]
    #[diagnostic(code(portbounce::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotResolved { .. } | Self::ApiError { status: 404, .. } => exit_code::NOT_FOUND,
            Self::Timeout | Self::TaskTimedOut { .. } => exit_code::TIMEOUT,
            Self::TaskFailed { .. } | Self::TaskSubmission { .. } => exit_code::TASK_FAILED,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::NoController { .. } => CliError::NoConfig {
                path: portbounce_config::config_path().display().to_string(),
            },
            other => CliError::Config(Box::new(other)),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::Timeout => CliError::Timeout,

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::ResolutionFailed { message } => CliError::NotResolved {
                message: format!("Could not resolve {message}"),
            },

            CoreError::EmptyResponse { endpoint, detail } => {
                CliError::Protocol { endpoint, detail }
            }

            CoreError::TaskSubmissionFailed { interface_id } => {
                CliError::TaskSubmission { interface_id }
            }

            CoreError::TaskFailed { task_id, status } => CliError::TaskFailed { task_id, status },

            CoreError::TaskTimedOut { task_id, attempts } => {
                CliError::TaskTimedOut { task_id, attempts }
            }

            CoreError::Http { status, url, body } => CliError::ApiError { status, url, body },

            CoreError::Config { message } => CliError::Validation {
                field: "controller".into(),
                reason: message,
            },
        }
    }
}
