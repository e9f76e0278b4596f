use async_trait::async_trait;
use domain_shared::store_front::SteamAppId;
use thiserror::Error;

/// Answers whether a product can actually be bought yet. Treat it as an
/// unreliable sensor: any error means "not confirmed".
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait StoreFrontPort {
    async fn is_released(&self, app_id: SteamAppId) -> Result<bool, StoreFrontError>;
}

#[derive(Debug, Error)]
pub enum StoreFrontError {
    #[error("Store front is unavailable")]
    StoreFrontUnavailable,
    #[error("Store front returned an unexpected response")]
    UnexpectedResponse,
    #[error("Product is not listed on the store front")]
    ProductNotListed,
}
