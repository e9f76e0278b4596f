use domain::countdown::CountdownChannel;
use domain::ports::discord::{CreateMessage, DiscordError, DiscordPort};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{info, instrument};

/// Everything the bot writes to the countdown channel goes through here.
///
/// Renames and announcements from both periodic handlers are serialized by
/// one lock, separate from the notification state, so a slow or rate limited
/// Discord call never holds up state reads.
pub struct SharedCountdownChannel {
    discord_port: Arc<dyn DiscordPort + Send + Sync>,
    channel: CountdownChannel,
    applied_name: Mutex<Option<String>>,
}

impl SharedCountdownChannel {
    #[instrument(level = "trace", skip_all)]
    pub fn new(discord_port: Arc<dyn DiscordPort + Send + Sync>, channel: CountdownChannel) -> Self {
        Self {
            discord_port,
            channel,
            applied_name: Mutex::new(None),
        }
    }

    pub async fn lock(&self) -> CountdownChannelGuard<'_> {
        CountdownChannelGuard {
            applied_name: self.applied_name.lock().await,
            discord_port: self.discord_port.as_ref(),
            channel: &self.channel,
        }
    }
}

pub struct CountdownChannelGuard<'a> {
    applied_name: MutexGuard<'a, Option<String>>,
    discord_port: &'a (dyn DiscordPort + Send + Sync),
    channel: &'a CountdownChannel,
}

impl CountdownChannelGuard<'_> {
    pub fn channel(&self) -> &CountdownChannel {
        self.channel
    }

    /// Renames the channel to the prefixed `label` unless that name is
    /// already applied. Only a successful rename is remembered.
    #[instrument(level = "debug", skip(self))]
    pub async fn rename(&mut self, label: &str) -> Result<(), DiscordError> {
        let name = self.channel.channel_name(label);
        if self.applied_name.as_deref() == Some(name.as_str()) {
            return Ok(());
        }

        self.discord_port
            .rename_channel(self.channel.channel_id, &name)
            .await?;

        info!(
            channel_id = self.channel.channel_id.0,
            name = %name,
            "Countdown channel renamed",
        );
        *self.applied_name = Some(name);

        Ok(())
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn send_message(&self, message: CreateMessage) -> Result<(), DiscordError> {
        self.discord_port
            .send_message(self.channel.channel_id, message)
            .await
    }
}
