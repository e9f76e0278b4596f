use crate::countdown_channel::SharedCountdownChannel;
use crate::notification_state::SharedNotificationState;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use domain::countdown::{CountdownChannel, CountdownTarget};
use domain::notification_state::{
    MockNotificationStateRepository, NotificationState, NotificationStateSnapshot,
};
use domain::ports::clock::MockClockPort;
use domain::ports::discord::{CreateMessage, DiscordError, DiscordPort};
use domain::product::Product;
use domain_shared::discord::ChannelId;
use domain_shared::store_front::SteamAppId;
use std::sync::{Arc, Mutex};
use tokio::sync::{Notify, Semaphore};

pub const CHANNEL_ID: ChannelId = ChannelId(42);

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

pub fn clock() -> Arc<MockClockPort> {
    let mut clock = MockClockPort::new();
    clock.expect_now().return_const(now());
    Arc::new(clock)
}

pub fn target_in(remaining: TimeDelta) -> CountdownTarget {
    CountdownTarget::new(now() + remaining, chrono_tz::Asia::Tokyo)
}

pub fn product() -> Product {
    Product::new("Deltarune", SteamAppId(1671210))
}

pub fn channel() -> CountdownChannel {
    CountdownChannel::new(CHANNEL_ID, "")
}

pub fn shared_channel(
    discord: Arc<dyn DiscordPort + Send + Sync>,
) -> Arc<SharedCountdownChannel> {
    Arc::new(SharedCountdownChannel::new(discord, channel()))
}

pub fn state(
    tomorrow_message_sent: bool,
    release_message_sent: bool,
    game_released: bool,
) -> NotificationState {
    NotificationState::from_snapshot(NotificationStateSnapshot {
        tomorrow_message_sent,
        release_message_sent,
        game_released,
    })
}

/// Loads `initial`; each test sets up its own save expectations.
pub fn repository(initial: NotificationState) -> MockNotificationStateRepository {
    let mut repository = MockNotificationStateRepository::new();
    repository.expect_load().times(1).return_const(initial);
    repository
}

pub async fn shared_state(
    repository: MockNotificationStateRepository,
) -> Arc<SharedNotificationState> {
    Arc::new(SharedNotificationState::load(Arc::new(repository)).await)
}

/// Discord whose renames hang until [`StalledDiscord::open`] is called.
/// Renames and message contents are recorded in completion order.
pub struct StalledDiscord {
    gate: Semaphore,
    rename_started: Notify,
    renames: Mutex<Vec<String>>,
    messages: Mutex<Vec<String>>,
}

impl StalledDiscord {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            gate: Semaphore::new(0),
            rename_started: Notify::new(),
            renames: Mutex::new(Vec::new()),
            messages: Mutex::new(Vec::new()),
        })
    }

    pub async fn rename_started(&self) {
        self.rename_started.notified().await;
    }

    pub fn open(&self) {
        self.gate.add_permits(Semaphore::MAX_PERMITS);
    }

    pub fn renames(&self) -> Vec<String> {
        self.renames.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiscordPort for StalledDiscord {
    async fn send_message(
        &self,
        _channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<(), DiscordError> {
        self.messages
            .lock()
            .unwrap()
            .push(message.content.unwrap_or_default());
        Ok(())
    }

    async fn rename_channel(&self, _channel_id: ChannelId, name: &str) -> Result<(), DiscordError> {
        self.rename_started.notify_one();
        let _permit = self.gate.acquire().await.unwrap();
        self.renames.lock().unwrap().push(name.to_string());
        Ok(())
    }
}
