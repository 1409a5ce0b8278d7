// ── Core error types ──
//
// Workflow-level errors. The `From<portbounce_api::Error>` impl translates
// transport-layer failures into this taxonomy; every other variant is
// raised by the resolver, poller, or orchestrator itself.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Protocol errors ──────────────────────────────────────────────
    #[error("Empty or unparsable response from {endpoint}: {detail}")]
    EmptyResponse { endpoint: String, detail: String },

    #[error("Could not resolve {message}")]
    ResolutionFailed { message: String },

    // ── Task errors ──────────────────────────────────────────────────
    #[error("Controller did not return a task id for interface {interface_id}")]
    TaskSubmissionFailed { interface_id: String },

    #[error("Task {task_id} finished with status {status}")]
    TaskFailed { task_id: String, status: String },

    #[error("Task {task_id} still pending after {attempts} status checks")]
    TaskTimedOut { task_id: String, attempts: u32 },

    // ── HTTP errors ──────────────────────────────────────────────────
    #[error("Controller returned HTTP {status} for {url}: {body}")]
    Http {
        status: u16,
        url: String,
        body: String,
    },

    // ── Connection errors ────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Controller request timed out")]
    Timeout,

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub(crate) fn resolution(message: impl Into<String>) -> Self {
        Self::ResolutionFailed {
            message: message.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<portbounce_api::Error> for CoreError {
    fn from(err: portbounce_api::Error) -> Self {
        use portbounce_api::Error as ApiError;

        match err {
            ApiError::Authentication { message } => CoreError::AuthenticationFailed { message },
            ApiError::Transport(e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                }
            }
            ApiError::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            ApiError::Tls(reason) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {reason}"),
            },
            ApiError::Http { status, url, body } => CoreError::Http { status, url, body },
            ApiError::EmptyResponse { url } => CoreError::EmptyResponse {
                endpoint: url,
                detail: "blank body".into(),
            },
            ApiError::Deserialization { url, message, .. } => CoreError::EmptyResponse {
                endpoint: url,
                detail: message,
            },
        }
    }
}
