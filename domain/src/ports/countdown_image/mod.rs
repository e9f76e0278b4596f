use crate::countdown::CountdownTarget;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownImage {
    pub content: Vec<u8>,
    pub filename: String,
}

impl CountdownImage {
    #[instrument(level = "trace", skip(content))]
    pub fn png(content: Vec<u8>) -> Self {
        Self {
            content,
            filename: "countdown.png".to_string(),
        }
    }
}

/// Draws the status card. The readout counts down from `now` unless
/// `released` is set.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait CountdownImagePort {
    async fn render(
        &self,
        released: bool,
        target: &CountdownTarget,
        now: DateTime<Utc>,
    ) -> Result<CountdownImage, CountdownImageError>;
}

#[derive(Debug, Error)]
pub enum CountdownImageError {
    #[error("Image asset not found at {0}")]
    AssetMissing(PathBuf),
    #[error("Image asset could not be decoded: {0}")]
    InvalidAsset(String),
    #[error("Image could not be rendered")]
    RenderingFailed,
}
