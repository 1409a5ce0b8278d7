// Intent API HTTP client
//
// Wraps `reqwest::Client` with Catalyst Center URL construction, token
// header injection, and response classification. Endpoint groups
// (clients, interfaces, tasks) are implemented as inherent methods in
// separate files to keep this module focused on transport mechanics.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Path prefix for every intent API endpoint.
const INTENT_PREFIX: [&str; 4] = ["dna", "intent", "api", "v1"];

/// Header carrying the session token on every authenticated request.
pub(crate) const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Async client for the Catalyst Center intent API.
///
/// Holds one `reqwest::Client` with the session token baked into its
/// default headers. Built once per process and shared by reference.
#[derive(Debug, Clone)]
pub struct CatalystClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalystClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an already-issued session token.
    ///
    /// Injects `X-Auth-Token` as a sensitive default header.
    pub fn from_token(
        base_url: &str,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut value =
            HeaderValue::from_str(token.expose_secret()).map_err(|e| Error::Authentication {
                message: format!("invalid token header value: {e}"),
            })?;
        value.set_sensitive(true);
        headers.insert(AUTH_TOKEN_HEADER, value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse the controller root and reject URLs that cannot carry a path.
    pub(crate) fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        Ok(url)
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Append path segments to the controller root.
    ///
    /// Segments are percent-encoded individually, so identifiers and
    /// interface names never leak `/` into the path.
    pub(crate) fn url_from_segments<'a>(
        base: &Url,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, Error> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build `{base}/dna/intent/api/v1/{segments...}`.
    pub(crate) fn intent_url(&self, segments: &[&str]) -> Result<Url, Error> {
        Self::url_from_segments(
            &self.base_url,
            INTENT_PREFIX.iter().copied().chain(segments.iter().copied()),
        )
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, &str)],
    ) -> Result<T, Error> {
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        params: &[(&str, &str)],
        body: &B,
    ) -> Result<T, Error> {
        debug!("PUT {url} params={params:?}");

        let resp = self.http.put(url).query(params).json(body).send().await?;
        handle_response(resp).await
    }

    /// PUT whose response body is not read beyond checking it is present.
    pub(crate) async fn put_acknowledged<B: Serialize + Sync>(
        &self,
        url: Url,
        params: &[(&str, &str)],
        body: &B,
    ) -> Result<(), Error> {
        debug!("PUT {url} params={params:?} (acknowledgement only)");

        let resp = self.http.put(url).query(params).json(body).send().await?;
        handle_acknowledgement(resp).await
    }
}

// ── Response handling ────────────────────────────────────────────────

/// Reject 401, non-2xx, and blank bodies; hand back the URL and raw body.
async fn accepted_body(resp: reqwest::Response) -> Result<(String, String), Error> {
    let status = resp.status();
    let url = resp.url().to_string();
    let body = resp.text().await?;
    trace!(%status, %url, len = body.len(), "response received");

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(Error::Authentication {
            message: "token expired or rejected (HTTP 401)".into(),
        });
    }

    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
            url,
            body,
        });
    }

    if body.trim().is_empty() {
        return Err(Error::EmptyResponse { url });
    }

    Ok((url, body))
}

/// Classify a response: non-2xx becomes `Http` (or `Authentication` for
/// 401), a blank body becomes `EmptyResponse`, anything else must parse.
pub(crate) async fn handle_response<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, Error> {
    let (url, body) = accepted_body(resp).await?;

    serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            url,
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}

/// Like [`handle_response`], but the body only has to be present.
pub(crate) async fn handle_acknowledgement(resp: reqwest::Response) -> Result<(), Error> {
    accepted_body(resp).await.map(|_| ())
}
