//! WordPress.com `/me` bootstrap client.
//!
//! Thin HTTP wrapper over the remote "current user" endpoint. Header
//! construction in `build_headers` and response mapping in `map_response`
//! are pure for testability; the network path is a single GET with no
//! internal retry and no internal timeout — callers wrap the future when
//! they need bounded latency.

use hmac::{Hmac, Mac};
use md5::Md5;

use crate::config::BootstrapConfig;
use crate::types::{AUTH_COOKIE_NAME, BootstrapCredentials, BootstrapError};
use crate::user::{FilteredUser, filter_user_object};

const API_PATH: &str = "/rest/v1/me";
const USER_AGENT: &str = "WordPress.com Calypso";

type HmacMd5 = Hmac<Md5>;

// =============================================================================
// CLIENT
// =============================================================================

pub struct BootstrapClient {
    http: reqwest::Client,
    api_key: String,
    url: String,
}

impl BootstrapClient {
    /// Build a client. The target URL is fixed here: the experiment CSV is
    /// rendered once, not per request.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::HttpClientBuild`] if the underlying HTTP
    /// client fails to construct.
    pub fn new(config: BootstrapConfig) -> Result<Self, BootstrapError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| BootstrapError::HttpClientBuild(e.to_string()))?;
        let url = format!(
            "{}{}?meta=flags&abtests={}",
            config.api_base,
            API_PATH,
            config.experiments.active_test_names(true)
        );
        Ok(Self { http, api_key: config.api_key, url })
    }

    /// The fixed endpoint URL this client targets.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request the current user for bootstrap.
    ///
    /// `auth_cookie` is the raw (still percent-encoded) login cookie value;
    /// `support_session` is an operator impersonation token. Exactly one of
    /// the two must be present. `geo_country` is forwarded as-is.
    ///
    /// # Errors
    ///
    /// Credential validation errors are returned before any network access
    /// occurs. See [`BootstrapError`] for the full taxonomy; nothing is
    /// retried internally.
    pub async fn authenticate(
        &self,
        auth_cookie: Option<&str>,
        geo_country: &str,
        support_session: Option<&str>,
    ) -> Result<FilteredUser, BootstrapError> {
        let credentials = BootstrapCredentials::from_parts(auth_cookie, support_session)?;
        let headers = build_headers(&credentials, geo_country, &self.api_key)?;

        if let BootstrapCredentials::SupportSession(session) = &credentials {
            tracing::info!(%session, "bootstrapping via support session");
        }

        let mut request = self.http.get(&self.url);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BootstrapError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        tracing::debug!(url = %self.url, status, "bootstrap response");

        let body = response
            .text()
            .await
            .map_err(|e| BootstrapError::Transport(e.to_string()))?;

        map_response(status, &body)
    }
}

// =============================================================================
// REQUEST CONSTRUCTION (pure)
// =============================================================================

/// Compute the outbound headers for the given credentials.
///
/// Cookie path: four headers including the HMAC-signed authorization.
/// Support-session path: the single passthrough header — no signature, so
/// the edge layer must have authorized the session already.
fn build_headers(
    credentials: &BootstrapCredentials,
    geo_country: &str,
    api_key: &str,
) -> Result<Vec<(&'static str, String)>, BootstrapError> {
    match credentials {
        BootstrapCredentials::Cookie(cookie) => {
            if api_key.is_empty() {
                return Err(BootstrapError::InvalidApiKey);
            }
            let signature = sign_cookie(api_key, cookie)?;
            Ok(vec![
                ("X-Forwarded-GeoIP-Country-Code", geo_country.to_owned()),
                ("Authorization", format!("X-WPCALYPSO {signature}")),
                ("Cookie", format!("{AUTH_COOKIE_NAME}={cookie}")),
                ("User-Agent", USER_AGENT.to_owned()),
            ])
        }
        BootstrapCredentials::SupportSession(session) => {
            Ok(vec![("x-support-session", session.clone())])
        }
    }
}

/// Hex-encoded HMAC-MD5 of the decoded cookie value, keyed by the API key.
fn sign_cookie(api_key: &str, decoded_cookie: &str) -> Result<String, BootstrapError> {
    let mut mac = HmacMd5::new_from_slice(api_key.as_bytes())
        .map_err(|_| BootstrapError::InvalidApiKey)?;
    mac.update(decoded_cookie.as_bytes());
    let digest = mac.finalize().into_bytes();
    Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
}

// =============================================================================
// RESPONSE MAPPING (pure)
// =============================================================================

/// Map a received status/body pair into the bootstrap result.
///
/// Non-success statuses carry every body field into the error so callers
/// can inspect API-provided metadata; an unparseable error body degrades
/// to an empty field map rather than masking the status.
fn map_response(status: u16, body: &str) -> Result<FilteredUser, BootstrapError> {
    if !(200..300).contains(&status) {
        let fields = serde_json::from_str(body).unwrap_or_default();
        return Err(BootstrapError::RemoteApi { status, fields });
    }

    let raw: serde_json::Value =
        serde_json::from_str(body).map_err(|e| BootstrapError::ResponseParse(e.to_string()))?;
    Ok(filter_user_object(&raw))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
