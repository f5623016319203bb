//! Bootstrap types — validated credentials and the error taxonomy.

use percent_encoding::percent_decode_str;

/// Name of the signed login cookie forwarded to the remote API.
pub const AUTH_COOKIE_NAME: &str = "wordpress_logged_in";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the bootstrap flow.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// Both an auth cookie and a support session were supplied.
    #[error("both an auth cookie and a support session were provided for bootstrap")]
    ConflictingCredentials,

    /// Neither an auth cookie nor a support session was supplied.
    #[error("cannot bootstrap without an auth cookie or a support session")]
    MissingCredentials,

    /// The configured REST API signing key is unusable.
    #[error("unable to bootstrap user because of an invalid REST API key")]
    InvalidApiKey,

    /// The auth cookie value did not percent-decode to valid UTF-8.
    #[error("auth cookie failed to decode: {0}")]
    CookieDecode(String),

    /// The outbound HTTP call failed with no response at all.
    #[error("bootstrap request failed: {0}")]
    Transport(String),

    /// The remote API answered with a non-success status. `fields` holds
    /// every member of the response body so callers can inspect
    /// API-provided error metadata.
    #[error("remote API error: status {status}: {}", remote_message(.fields))]
    RemoteApi {
        status: u16,
        fields: serde_json::Map<String, serde_json::Value>,
    },

    /// The remote API answered with a success status but an unparseable body.
    #[error("bootstrap response parse failed: {0}")]
    ResponseParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

fn remote_message(fields: &serde_json::Map<String, serde_json::Value>) -> &str {
    fields
        .get("message")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("unknown error")
}

// =============================================================================
// CREDENTIALS
// =============================================================================

/// Validated bootstrap credentials — exactly one of the two paths.
///
/// The cookie path is cryptographically signed (HMAC-MD5 over the decoded
/// value) before it reaches the remote API. The support-session path is an
/// unsigned passthrough header with no integrity check here; it relies on
/// the edge layer having authorized the session upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapCredentials {
    /// Percent-decoded value of the signed login cookie.
    Cookie(String),
    /// Raw operator support-session token.
    SupportSession(String),
}

impl BootstrapCredentials {
    /// Validate the raw inputs of a bootstrap request.
    ///
    /// Empty strings count as absent, matching the truthiness semantics of
    /// the upstream edge layer that extracts these values.
    ///
    /// # Errors
    ///
    /// - [`BootstrapError::ConflictingCredentials`] when both are present.
    /// - [`BootstrapError::MissingCredentials`] when neither is present.
    /// - [`BootstrapError::CookieDecode`] when the cookie value does not
    ///   percent-decode to valid UTF-8.
    pub fn from_parts(
        auth_cookie: Option<&str>,
        support_session: Option<&str>,
    ) -> Result<Self, BootstrapError> {
        let auth_cookie = auth_cookie.filter(|v| !v.is_empty());
        let support_session = support_session.filter(|v| !v.is_empty());

        match (auth_cookie, support_session) {
            (Some(_), Some(_)) => Err(BootstrapError::ConflictingCredentials),
            (None, None) => Err(BootstrapError::MissingCredentials),
            (Some(cookie), None) => {
                let decoded = percent_decode_str(cookie)
                    .decode_utf8()
                    .map_err(|e| BootstrapError::CookieDecode(e.to_string()))?;
                Ok(Self::Cookie(decoded.into_owned()))
            }
            (None, Some(session)) => Ok(Self::SupportSession(session.to_owned())),
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
