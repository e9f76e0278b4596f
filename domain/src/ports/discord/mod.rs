mod create_message;

pub use create_message::CreateMessage;
pub use domain_shared::discord::ChannelId;
use async_trait::async_trait;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait DiscordPort {
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<(), DiscordError>;

    async fn rename_channel(&self, channel_id: ChannelId, name: &str) -> Result<(), DiscordError>;
}

#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Missing permissions for the requested action")]
    PermissionDenied,
    #[error("Discord is unavailable")]
    DiscordUnavailable,
}
