use domain_shared::store_front::SteamAppId;
use tracing::instrument;

pub const DEFAULT_STORE_BASE_URL: &str = "https://store.steampowered.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub app_id: SteamAppId,
    /// Same base the release checks query, so announcement links match it.
    pub store_base_url: String,
}

impl Product {
    #[instrument(level = "trace", skip(name))]
    pub fn new(name: impl Into<String>, app_id: SteamAppId) -> Self {
        Self {
            name: name.into(),
            app_id,
            store_base_url: DEFAULT_STORE_BASE_URL.to_string(),
        }
    }

    pub fn with_store_base_url(self, store_base_url: impl Into<String>) -> Self {
        Self {
            store_base_url: store_base_url.into(),
            ..self
        }
    }

    pub fn store_url(&self) -> String {
        format!(
            "{}/app/{}/",
            self.store_base_url.trim_end_matches('/'),
            self.app_id.0
        )
    }
}
