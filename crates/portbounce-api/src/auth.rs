// Token authentication
//
// The controller issues a session token in exchange for HTTP basic auth.
// That token is then sent as `X-Auth-Token` on every intent API call.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::client::CatalystClient;
use crate::error::Error;
use crate::transport::TransportConfig;

const TOKEN_PATH: [&str; 6] = ["dna", "system", "api", "v1", "auth", "token"];

/// Credentials for authenticating with a Catalyst Center controller.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// A session token issued earlier (skips the token exchange).
    Token(SecretString),
    /// Username/password exchanged for a token via basic auth.
    Basic {
        username: String,
        password: SecretString,
    },
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(rename = "Token")]
    token: Option<String>,
}

impl CatalystClient {
    /// Exchange username/password for a session token.
    ///
    /// `POST /dna/system/api/v1/auth/token` with HTTP basic auth; the
    /// response carries the token as `{"Token": "..."}`.
    pub async fn request_token(
        base_url: &Url,
        username: &str,
        password: &SecretString,
        transport: &TransportConfig,
    ) -> Result<SecretString, Error> {
        let url = Self::url_from_segments(base_url, TOKEN_PATH)?;
        debug!("requesting token at {url}");

        let http = transport.build_client()?;
        let resp = http
            .post(url.clone())
            .basic_auth(username, Some(password.expose_secret()))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(Error::Authentication {
                message: format!("token request failed (HTTP {status}): {body}"),
            });
        }
        if body.trim().is_empty() {
            return Err(Error::EmptyResponse {
                url: url.to_string(),
            });
        }

        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                url: url.to_string(),
                message: e.to_string(),
                body: String::new(),
            })?;

        match parsed.token.filter(|t| !t.is_empty()) {
            Some(token) => {
                debug!("token issued");
                Ok(SecretString::from(token))
            }
            None => Err(Error::Authentication {
                message: "token response did not contain a Token field".into(),
            }),
        }
    }

    /// Build an authenticated client from any supported credential kind.
    pub async fn connect(
        base_url: &Url,
        credentials: &Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        match credentials {
            Credentials::Token(token) => Self::from_token(base_url.as_str(), token, transport),
            Credentials::Basic { username, password } => {
                let token = Self::request_token(base_url, username, password, transport).await?;
                Self::from_token(base_url.as_str(), &token, transport)
            }
        }
    }
}
