mod channel_id;
mod create_message;

use crate::discord::channel_id::domain_to_serenity_channel_id;
use crate::discord::create_message::domain_to_serenity_create_message;
use async_trait::async_trait;
use domain::ports::discord::{ChannelId, CreateMessage, DiscordError, DiscordPort};
use serenity::all::{EditChannel, Http};
use serenity::http::StatusCode;
use std::sync::Arc;
use tracing::{error, instrument, warn};

pub struct DiscordAdapter {
    client: Arc<Http>,
}

impl DiscordAdapter {
    #[instrument(level = "trace", skip_all)]
    pub fn new(client: Arc<Http>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DiscordPort for DiscordAdapter {
    #[instrument(level = "debug", err, skip(self, message))]
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<(), DiscordError> {
        let message = domain_to_serenity_create_message(message);

        domain_to_serenity_channel_id(channel_id)
            .send_message(self.client.as_ref(), message)
            .await
            .map_err(map_serenity_err)?;

        Ok(())
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn rename_channel(&self, channel_id: ChannelId, name: &str) -> Result<(), DiscordError> {
        domain_to_serenity_channel_id(channel_id)
            .edit(self.client.as_ref(), EditChannel::new().name(name))
            .await
            .map_err(map_serenity_err)?;

        Ok(())
    }
}

#[instrument(level = "trace", skip_all)]
fn map_serenity_err(err: serenity::Error) -> DiscordError {
    let status = match &err {
        serenity::Error::Http(http_err) => http_err.status_code(),
        _ => None,
    };

    if is_permission_denied(status) {
        error!(error = ?err, "Discord refused the request, check the bot permissions");
        DiscordError::PermissionDenied
    } else {
        warn!(error = ?err, "Discord request failed");
        DiscordError::DiscordUnavailable
    }
}

fn is_permission_denied(status: Option<StatusCode>) -> bool {
    status == Some(StatusCode::FORBIDDEN)
}
