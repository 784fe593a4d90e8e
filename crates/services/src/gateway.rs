use std::env;

use async_trait::async_trait;
use passport_core::{
    LevelTag, PassSnapshot, StampedSet, Station, UnlockResult, User, null_as_default,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{GatewayError, LoadError};

/// The remote authority for passport state.
///
/// `fetch_initial` must be side-effect free on the server. `submit_unlock`
/// must answer a valid code for an already-unlocked station with a success
/// naming the same station.
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    async fn fetch_initial(&self, email: &str) -> Result<InitialResponse, GatewayError>;

    async fn submit_unlock(&self, email: &str, code: &str) -> Result<UnlockResult, GatewayError>;
}

//
// ─── WIRE TYPES ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: String,
}

/// Body of `GET ?action=initial`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stations: Vec<Station>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stamped: Vec<String>,
}

impl InitialResponse {
    /// Turns a response into a snapshot.
    ///
    /// A blank user email is filled with `requested_email`, since unlocks are
    /// submitted under the user's email.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::BackendRejected` for `success: false` and
    /// `LoadError::FetchFailed` if a successful response has no user.
    pub fn into_snapshot(self, requested_email: &str) -> Result<PassSnapshot, LoadError> {
        if !self.success {
            let reason = self
                .error
                .filter(|error| !error.trim().is_empty())
                .unwrap_or_else(|| "unknown backend error".to_string());
            return Err(LoadError::BackendRejected(reason));
        }

        let user = self.user.ok_or(GatewayError::MissingField("user"))?;
        let email = if user.email.trim().is_empty() {
            requested_email.to_string()
        } else {
            user.email
        };

        Ok(PassSnapshot {
            user: User::new(user.name, email, LevelTag::from_label(&user.level)),
            stations: self.stations,
            stamped: self.stamped.into_iter().collect::<StampedSet>(),
        })
    }
}

#[derive(Debug, Serialize)]
struct UnlockRequest<'a> {
    code: &'a str,
    email: &'a str,
}

//
// ─── HTTP GATEWAY ─────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub base_url: Url,
}

impl GatewayConfig {
    /// # Errors
    ///
    /// Returns `url::ParseError` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(base_url.trim())?,
        })
    }

    /// Reads `PASSPORT_API_BASE`. Missing, blank or unparsable values yield `None`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let raw = env::var("PASSPORT_API_BASE").ok()?;
        if raw.trim().is_empty() {
            return None;
        }
        Self::new(&raw).ok()
    }
}

/// `RemoteGateway` over the backend's JSON HTTP endpoint.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn fetch_initial(&self, email: &str) -> Result<InitialResponse, GatewayError> {
        debug!(base = %self.config.base_url, "fetching initial passport state");
        let response = self
            .client
            .get(self.config.base_url.clone())
            .query(&[("action", "initial"), ("email", email)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    async fn submit_unlock(&self, email: &str, code: &str) -> Result<UnlockResult, GatewayError> {
        debug!(base = %self.config.base_url, "submitting unlock code");
        let response = self
            .client
            .post(self.config.base_url.clone())
            .query(&[("action", "unlock")])
            .json(&UnlockRequest { code, email })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}
