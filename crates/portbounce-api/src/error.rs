use thiserror::Error;

/// Top-level error type for the `portbounce-api` crate.
///
/// Covers every failure mode of the intent API surface: token acquisition,
/// transport, non-2xx responses, and malformed bodies. `portbounce-core`
/// maps these into workflow-level errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Token request rejected, or the controller refused the current token.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Responses ───────────────────────────────────────────────────
    /// Non-2xx response. The raw body is kept verbatim because the
    /// controller reports some conditions only as free text.
    #[error("HTTP {status} from {url}: {body}")]
    Http {
        status: u16,
        url: String,
        body: String,
    },

    /// 2xx response with a blank body where JSON was expected.
    #[error("Empty response from {url}")]
    EmptyResponse { url: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error from {url}: {message}")]
    Deserialization {
        url: String,
        message: String,
        body: String,
    },
}
