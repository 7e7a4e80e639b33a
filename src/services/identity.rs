//! Identity provider client for the login proxy

use serde_json::Value;

use crate::{
    config::Auth0Config,
    error::{AppError, AppResult},
};

/// Client for the external identity provider's token endpoint
#[derive(Clone)]
pub struct IdentityService {
    http: reqwest::Client,
    config: Auth0Config,
}

impl IdentityService {
    pub fn new(config: Auth0Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Exchange user credentials for a token via the password grant.
    ///
    /// The provider's JSON body is relayed verbatim, whether it reports
    /// success or an error; only an unreachable provider or a non-JSON
    /// body fails.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Value> {
        let params = [
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("audience", self.config.audience.as_str()),
        ];

        let response = self
            .http
            .post(self.config.token_url())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Identity provider unreachable: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::Upstream(format!("Identity provider response unreadable: {}", e))
        })?;

        tracing::debug!(%status, "identity provider token response");

        serde_json::from_str(&body).map_err(|_| {
            AppError::Upstream("Identity provider returned a non-JSON response".to_string())
        })
    }
}
