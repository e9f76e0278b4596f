use crate::countdown_channel::SharedCountdownChannel;
use crate::notification_state::SharedNotificationState;
use application_ports::release_check_tick_handler::{
    ReleaseCheckOutcome, ReleaseCheckTickHandlerError, ReleaseCheckTickHandlerPort,
};
use async_trait::async_trait;
use chrono::TimeDelta;
use domain::announcements::release_announcement;
use domain::countdown::{CountdownTarget, RELEASED_CHANNEL_LABEL};
use domain::notification_state::NotificationState;
use domain::ports::clock::ClockPort;
use domain::ports::discord::DiscordError;
use domain::ports::store_front::StoreFrontPort;
use domain::product::Product;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// How long past the target the store front may stay unconfirmed before
/// checks are reported as overdue.
const OVERDUE_AFTER: TimeDelta = TimeDelta::days(1);

pub struct ReleaseCheckTickHandler {
    store_front_port: Arc<dyn StoreFrontPort + Send + Sync>,
    clock: Arc<dyn ClockPort + Send + Sync>,
    notification_state: Arc<SharedNotificationState>,
    countdown_channel: Arc<SharedCountdownChannel>,
    product: Product,
    target: CountdownTarget,
    retired: bool,
}

impl ReleaseCheckTickHandler {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        store_front_port: Arc<dyn StoreFrontPort + Send + Sync>,
        clock: Arc<dyn ClockPort + Send + Sync>,
        notification_state: Arc<SharedNotificationState>,
        countdown_channel: Arc<SharedCountdownChannel>,
        product: Product,
        target: CountdownTarget,
    ) -> Self {
        Self {
            store_front_port,
            clock,
            notification_state,
            countdown_channel,
            product,
            target,
            retired: false,
        }
    }

    fn not_released_outcome(&self) -> ReleaseCheckOutcome {
        if -self.target.remaining(self.clock.now()) > OVERDUE_AFTER {
            ReleaseCheckOutcome::Overdue
        } else {
            ReleaseCheckOutcome::Waiting
        }
    }

    /// Asks the store front once. Errors count as "not released".
    #[instrument(level = "debug", skip(self))]
    async fn store_front_confirms_release(&self) -> bool {
        match self.store_front_port.is_released(self.product.app_id).await {
            Ok(released) => {
                info!(app_id = self.product.app_id.0, released, "Store front checked");
                released
            }
            Err(err) => {
                warn!(
                    app_id = self.product.app_id.0,
                    error = %err,
                    "Store front check failed, treating the product as not released",
                );
                false
            }
        }
    }
}

#[async_trait]
impl ReleaseCheckTickHandlerPort for ReleaseCheckTickHandler {
    #[instrument(level = "debug", skip_all)]
    async fn tick(&mut self) -> Result<ReleaseCheckOutcome, ReleaseCheckTickHandlerError> {
        if self.retired {
            return Ok(ReleaseCheckOutcome::Retired);
        }

        let known = self.notification_state.snapshot().await;
        if known.is_release_announced() {
            info!("Release was already announced, stopping release checks");
            self.retired = true;
            return Ok(ReleaseCheckOutcome::Retired);
        }

        if !known.game_released() && !self.store_front_confirms_release().await {
            return Ok(self.not_released_outcome());
        }

        // Recorded before waiting for the channel, so a countdown tick queued
        // behind this one retires instead of renaming.
        let confirmed = {
            let mut state = self.notification_state.lock().await;
            if state.apply(NotificationState::confirm_release).await {
                info!(product = %self.product.name, "Release confirmed by the store front");
            }
            state.current()
        };

        if confirmed.release_message_sent() {
            self.retired = true;
            return Ok(ReleaseCheckOutcome::Retired);
        }

        let mut channel = self.countdown_channel.lock().await;
        let channel_id = channel.channel().channel_id;

        if let Err(err) = channel.rename(RELEASED_CHANNEL_LABEL).await {
            warn!(
                channel_id = channel_id.0,
                error = %err,
                "Failed to rename the countdown channel to the released name",
            );
        }

        channel
            .send_message(release_announcement(&self.product))
            .await
            .map_err(map_discord_err)?;

        self.notification_state
            .lock()
            .await
            .apply(NotificationState::mark_release_message_sent)
            .await;
        info!(channel_id = channel_id.0, "Release announcement sent");

        self.retired = true;
        Ok(ReleaseCheckOutcome::Announced)
    }
}

#[instrument(level = "debug", skip_all)]
fn map_discord_err(err: DiscordError) -> ReleaseCheckTickHandlerError {
    match err {
        DiscordError::PermissionDenied => {
            error!("Release announcement failed: missing permission to send messages");
            ReleaseCheckTickHandlerError::TemporarilyUnavailable
        }
        DiscordError::DiscordUnavailable => {
            error!("Release announcement failed: discord is unavailable");
            ReleaseCheckTickHandlerError::TemporarilyUnavailable
        }
    }
}
