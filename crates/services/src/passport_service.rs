use std::sync::Arc;

use passport_core::{PassState, UnlockResult};
use tracing::{info, warn};

use crate::error::{LoadError, UnlockError};
use crate::gateway::{GatewayConfig, HttpGateway, RemoteGateway};

/// App-facing entry point for loading a passport and submitting codes.
#[derive(Clone)]
pub struct PassportService {
    gateway: Arc<dyn RemoteGateway>,
}

impl PassportService {
    #[must_use]
    pub fn new(gateway: Arc<dyn RemoteGateway>) -> Self {
        Self { gateway }
    }

    /// Service backed by the HTTP gateway.
    #[must_use]
    pub fn http(config: GatewayConfig) -> Self {
        Self::new(Arc::new(HttpGateway::new(config)))
    }

    /// Fetch the snapshot for `email` and build the session state.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::IdentityMissing` for a blank email,
    /// `LoadError::FetchFailed` on transport failures and
    /// `LoadError::BackendRejected` when the backend answers `success: false`.
    pub async fn load(&self, email: &str) -> Result<PassState, LoadError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoadError::IdentityMissing);
        }

        let response = self.gateway.fetch_initial(email).await.map_err(|err| {
            warn!(error = %err, "initial fetch failed");
            LoadError::FetchFailed(err)
        })?;
        let snapshot = response.into_snapshot(email)?;
        let state = PassState::init(snapshot);
        info!(
            stations = state.total_stations(),
            stamped = state.stamped_count(),
            "passport loaded"
        );
        Ok(state)
    }

    /// Submit an unlock code.
    ///
    /// The returned result is always `success: true`; apply it with
    /// `PassState::apply_unlock`.
    ///
    /// # Errors
    ///
    /// Returns `UnlockError::EmptyCode` for blank codes,
    /// `UnlockError::Rejected` with the backend message for `success: false`,
    /// and `UnlockError::Failed` on transport failures.
    pub async fn submit_unlock(&self, email: &str, code: &str) -> Result<UnlockResult, UnlockError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(UnlockError::EmptyCode);
        }

        let result = self.gateway.submit_unlock(email, code).await.map_err(|err| {
            warn!(error = %err, "unlock request failed");
            UnlockError::Failed(err)
        })?;

        if !result.success {
            let message = if result.message.trim().is_empty() {
                "Code not accepted.".to_string()
            } else {
                result.message
            };
            return Err(UnlockError::Rejected(message));
        }

        Ok(result)
    }
}
