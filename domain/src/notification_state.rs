use async_trait::async_trait;
use thiserror::Error;
use tracing::instrument;

/// Which one-time notifications have already gone out, and whether the store
/// front has confirmed the release.
///
/// Every flag only ever moves from `false` to `true`. The transition methods
/// return whether anything changed, so callers know when to persist.
/// `release_message_sent` can only be set once `game_released` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationState {
    tomorrow_message_sent: bool,
    release_message_sent: bool,
    game_released: bool,
}

impl NotificationState {
    #[instrument(level = "trace")]
    pub fn from_snapshot(snapshot: NotificationStateSnapshot) -> Self {
        Self {
            tomorrow_message_sent: snapshot.tomorrow_message_sent,
            release_message_sent: snapshot.release_message_sent,
            game_released: snapshot.game_released,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn to_snapshot(&self) -> NotificationStateSnapshot {
        NotificationStateSnapshot {
            tomorrow_message_sent: self.tomorrow_message_sent,
            release_message_sent: self.release_message_sent,
            game_released: self.game_released,
        }
    }

    pub fn tomorrow_message_sent(&self) -> bool {
        self.tomorrow_message_sent
    }

    pub fn release_message_sent(&self) -> bool {
        self.release_message_sent
    }

    pub fn game_released(&self) -> bool {
        self.game_released
    }

    pub fn is_release_announced(&self) -> bool {
        self.game_released && self.release_message_sent
    }

    pub fn mark_tomorrow_message_sent(&mut self) -> bool {
        let changed = !self.tomorrow_message_sent;
        self.tomorrow_message_sent = true;
        changed
    }

    pub fn confirm_release(&mut self) -> bool {
        let changed = !self.game_released;
        self.game_released = true;
        changed
    }

    pub fn mark_release_message_sent(&mut self) -> bool {
        if !self.game_released {
            return false;
        }
        let changed = !self.release_message_sent;
        self.release_message_sent = true;
        changed
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationStateSnapshot {
    pub tomorrow_message_sent: bool,
    pub release_message_sent: bool,
    pub game_released: bool,
}

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait NotificationStateRepository {
    /// Never fails: anything unreadable yields [`NotificationState::default`].
    async fn load(&self) -> NotificationState;
    async fn save(&self, state: &NotificationState)
        -> Result<(), NotificationStateRepositoryError>;
}

#[derive(Debug, Error)]
pub enum NotificationStateRepositoryError {
    #[error("Notification state storage is unavailable")]
    StorageUnavailable,
}
