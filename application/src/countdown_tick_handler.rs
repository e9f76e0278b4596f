use crate::countdown_channel::SharedCountdownChannel;
use crate::notification_state::SharedNotificationState;
use application_ports::countdown_tick_handler::{
    CountdownTickHandlerError, CountdownTickHandlerPort, CountdownTickOutcome,
};
use async_trait::async_trait;
use domain::announcements::tomorrow_announcement;
use domain::countdown::{CountdownBucket, CountdownTarget};
use domain::notification_state::NotificationState;
use domain::ports::clock::ClockPort;
use domain::ports::discord::DiscordError;
use domain::product::Product;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub struct CountdownTickHandler {
    countdown_channel: Arc<SharedCountdownChannel>,
    clock: Arc<dyn ClockPort + Send + Sync>,
    notification_state: Arc<SharedNotificationState>,
    product: Product,
    target: CountdownTarget,
    retired: bool,
}

impl CountdownTickHandler {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        countdown_channel: Arc<SharedCountdownChannel>,
        clock: Arc<dyn ClockPort + Send + Sync>,
        notification_state: Arc<SharedNotificationState>,
        product: Product,
        target: CountdownTarget,
    ) -> Self {
        Self {
            countdown_channel,
            clock,
            notification_state,
            product,
            target,
            retired: false,
        }
    }
}

#[async_trait]
impl CountdownTickHandlerPort for CountdownTickHandler {
    #[instrument(level = "debug", skip_all)]
    async fn tick(&mut self) -> Result<CountdownTickOutcome, CountdownTickHandlerError> {
        if self.retired {
            return Ok(CountdownTickOutcome::Retired);
        }

        // The release flag is read with the channel held, so a release rename
        // is never followed by a stale countdown label.
        let mut channel = self.countdown_channel.lock().await;
        let channel_id = channel.channel().channel_id;

        if self.notification_state.snapshot().await.game_released() {
            info!("Release is confirmed, retiring the countdown");
            self.retired = true;
            return Ok(CountdownTickOutcome::Retired);
        }

        let remaining = self.target.remaining(self.clock.now());
        let bucket = CountdownBucket::classify(remaining);
        let label = bucket.channel_label();

        match channel.rename(&label).await {
            Ok(()) => {}
            Err(DiscordError::PermissionDenied) => {
                error!(
                    channel_id = channel_id.0,
                    label = %label,
                    "Missing permission to rename the countdown channel",
                );
            }
            Err(DiscordError::DiscordUnavailable) => {
                warn!(
                    channel_id = channel_id.0,
                    label = %label,
                    "Failed to rename the countdown channel, retrying on the next tick",
                );
            }
        }

        if bucket != CountdownBucket::Tomorrow
            || self.notification_state.snapshot().await.tomorrow_message_sent()
        {
            return Ok(CountdownTickOutcome::Counting);
        }

        // A failed send leaves the flag unset and is retried on the next
        // regular tick, without slowing the countdown down.
        match channel
            .send_message(tomorrow_announcement(&self.product, &self.target))
            .await
        {
            Ok(()) => {
                self.notification_state
                    .lock()
                    .await
                    .apply(NotificationState::mark_tomorrow_message_sent)
                    .await;
                info!(channel_id = channel_id.0, "One day left announcement sent");
            }
            Err(DiscordError::PermissionDenied) => {
                error!(
                    channel_id = channel_id.0,
                    "Missing permission to send the one day left announcement",
                );
            }
            Err(DiscordError::DiscordUnavailable) => {
                warn!(
                    channel_id = channel_id.0,
                    "Failed to send the one day left announcement, retrying on the next tick",
                );
            }
        }

        Ok(CountdownTickOutcome::Counting)
    }
}
