//! HTTP client for the two OTP backend endpoints.
//!
//! The backend is an opaque collaborator: request a code for an email,
//! then verify the code the user typed. Response bodies parse leniently
//! because the backend is free to answer with nothing at all; a missing
//! or malformed body is treated as the empty object, never an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PortalError, PortalResult};

/// Navigation target after a successful verify when the backend does
/// not name one.
pub const DEFAULT_REDIRECT: &str = "/connected";

#[derive(Serialize)]
struct OtpRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    email: &'a str,
    otp: &'a str,
}

/// Whatever the backend put in a response body. Every field is
/// optional; `{}` is a perfectly good answer.
#[derive(Debug, Default, Deserialize)]
struct ApiReply {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    redirect: Option<String>,
}

/// Client for the portal's OTP backend.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct PortalApi {
    client: reqwest::Client,
    base: String,
}

impl PortalApi {
    /// Client against `base`, e.g. `http://127.0.0.1:8787`.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Ask the backend to send a one-time code to `email`.
    ///
    /// Returns the backend's optional message on success.
    pub async fn request_otp(&self, email: &str) -> PortalResult<Option<String>> {
        let url = format!("{}/api/request-otp", self.base);
        debug!(%email, "requesting OTP");
        let response = self
            .client
            .post(&url)
            .json(&OtpRequest { email })
            .send()
            .await
            .inspect_err(|e| warn!("request-otp did not complete: {e}"))?;
        let reply = Self::read_reply(response).await?;
        Ok(reply.message)
    }

    /// Submit the code the user typed.
    ///
    /// Returns the navigation target: the backend's `redirect` if it
    /// named one, otherwise [`DEFAULT_REDIRECT`].
    pub async fn verify_otp(&self, email: &str, otp: &str) -> PortalResult<String> {
        let url = format!("{}/api/verify-otp", self.base);
        debug!(%email, "verifying OTP");
        let response = self
            .client
            .post(&url)
            .json(&VerifyRequest { email, otp })
            .send()
            .await
            .inspect_err(|e| warn!("verify-otp did not complete: {e}"))?;
        let reply = Self::read_reply(response).await?;
        Ok(reply
            .redirect
            .unwrap_or_else(|| DEFAULT_REDIRECT.to_string()))
    }

    /// Split a response into success reply vs rejection, parsing the
    /// body leniently either way.
    async fn read_reply(response: reqwest::Response) -> PortalResult<ApiReply> {
        let status = response.status();
        let body = response.bytes().await.unwrap_or_default();
        let reply: ApiReply = serde_json::from_slice(&body).unwrap_or_default();
        if status.is_success() {
            Ok(reply)
        } else {
            warn!(status = status.as_u16(), "backend rejected the request");
            Err(PortalError::Rejected {
                status: status.as_u16(),
                message: reply.message,
            })
        }
    }
}
