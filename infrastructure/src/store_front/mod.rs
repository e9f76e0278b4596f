mod app_details;

use crate::store_front::app_details::AppDetailsResponse;
use async_trait::async_trait;
use domain::ports::store_front::{StoreFrontError, StoreFrontPort};
use domain_shared::store_front::SteamAppId;
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::{instrument, warn};

/// Asks the Steam store's `appdetails` endpoint whether an app can be bought.
pub struct SteamStoreAdapter {
    http_client: HttpClient,
    base_url: String,
}

impl SteamStoreAdapter {
    #[instrument(level = "trace", skip(base_url))]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl StoreFrontPort for SteamStoreAdapter {
    #[instrument(level = "debug", err, skip(self))]
    async fn is_released(&self, app_id: SteamAppId) -> Result<bool, StoreFrontError> {
        let body = self
            .http_client
            .get(format!("{}/api/appdetails", self.base_url))
            .query(&[("appids", app_id.0)])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| {
                warn!(error = ?err, "Failed to query the Steam store");
                StoreFrontError::StoreFrontUnavailable
            })?
            .text()
            .await
            .map_err(|err| {
                warn!(error = ?err, "Failed to read the Steam store response");
                StoreFrontError::StoreFrontUnavailable
            })?;

        let response: AppDetailsResponse = serde_json::from_str(&body).map_err(|err| {
            warn!(error = ?err, "Failed to parse the Steam store response");
            StoreFrontError::UnexpectedResponse
        })?;

        response.is_released(app_id)
    }
}
