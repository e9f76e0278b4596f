use domain::ports::store_front::StoreFrontError;
use domain_shared::store_front::SteamAppId;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{instrument, warn};

/// Body of `GET /api/appdetails?appids={id}`, keyed by the app id as a string.
#[derive(Deserialize, Debug)]
#[serde(transparent)]
pub struct AppDetailsResponse {
    pub apps: HashMap<String, AppDetailsEntry>,
}

#[derive(Deserialize, Debug)]
pub struct AppDetailsEntry {
    pub success: bool,
    pub data: Option<AppDetailsData>,
}

#[derive(Deserialize, Debug)]
pub struct AppDetailsData {
    pub release_date: ReleaseDate,
}

#[derive(Deserialize, Debug)]
pub struct ReleaseDate {
    pub coming_soon: bool,
}

impl AppDetailsResponse {
    #[instrument(level = "trace", skip(self))]
    pub fn is_released(&self, app_id: SteamAppId) -> Result<bool, StoreFrontError> {
        let entry = self
            .apps
            .get(&app_id.0.to_string())
            .filter(|entry| entry.success)
            .ok_or_else(|| {
                warn!(app_id = app_id.0, "App is not listed on the Steam store");
                StoreFrontError::ProductNotListed
            })?;

        let release_date = &entry
            .data
            .as_ref()
            .ok_or_else(|| {
                warn!(app_id = app_id.0, "Steam store response has no app data");
                StoreFrontError::UnexpectedResponse
            })?
            .release_date;

        Ok(!release_date.coming_soon)
    }
}
