use domain::notification_state::{NotificationState, NotificationStateRepository};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{info, instrument, warn};

/// The single owner of the bot's [`NotificationState`].
///
/// Both periodic handlers and the status service share one instance. Changes
/// only happen through [`NotificationStateGuard::apply`], which writes the new
/// state through to the repository before the lock is released.
pub struct SharedNotificationState {
    state: Mutex<NotificationState>,
    repository: Arc<dyn NotificationStateRepository + Send + Sync>,
}

impl SharedNotificationState {
    #[instrument(level = "debug", skip_all)]
    pub async fn load(repository: Arc<dyn NotificationStateRepository + Send + Sync>) -> Self {
        let state = repository.load().await;
        info!(
            tomorrow_message_sent = state.tomorrow_message_sent(),
            release_message_sent = state.release_message_sent(),
            game_released = state.game_released(),
            "Notification state loaded",
        );

        Self {
            state: Mutex::new(state),
            repository,
        }
    }

    /// May be stale by the time the caller acts on it.
    pub async fn snapshot(&self) -> NotificationState {
        *self.state.lock().await
    }

    /// Holds off every other reader and writer until the guard is dropped.
    pub async fn lock(&self) -> NotificationStateGuard<'_> {
        NotificationStateGuard {
            state: self.state.lock().await,
            repository: self.repository.as_ref(),
        }
    }
}

pub struct NotificationStateGuard<'a> {
    state: MutexGuard<'a, NotificationState>,
    repository: &'a (dyn NotificationStateRepository + Send + Sync),
}

impl NotificationStateGuard<'_> {
    pub fn current(&self) -> NotificationState {
        *self.state
    }

    /// Applies `transition` and persists the result if it changed anything.
    ///
    /// A failed save keeps the in-memory change and is only logged.
    #[instrument(level = "debug", skip_all)]
    pub async fn apply(&mut self, transition: impl FnOnce(&mut NotificationState) -> bool) -> bool {
        if !transition(&mut *self.state) {
            return false;
        }

        if let Err(err) = self.repository.save(&*self.state).await {
            warn!(
                error = %err,
                state = ?*self.state,
                "Failed to persist notification state, keeping it in memory only",
            );
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::notification_state::{
        MockNotificationStateRepository, NotificationStateRepositoryError,
        NotificationStateSnapshot,
    };

    #[tokio::test]
    async fn apply_persists_changes() {
        let mut repository = MockNotificationStateRepository::new();
        repository
            .expect_load()
            .times(1)
            .returning(NotificationState::default);
        repository
            .expect_save()
            .withf(|state| state.tomorrow_message_sent())
            .times(1)
            .returning(|_| Ok(()));
        let shared = SharedNotificationState::load(Arc::new(repository)).await;

        let changed = shared
            .lock()
            .await
            .apply(NotificationState::mark_tomorrow_message_sent)
            .await;

        assert!(changed);
        assert!(shared.snapshot().await.tomorrow_message_sent());
    }

    #[tokio::test]
    async fn apply_without_change_skips_persisting() {
        let mut repository = MockNotificationStateRepository::new();
        repository.expect_load().times(1).returning(|| {
            NotificationState::from_snapshot(NotificationStateSnapshot {
                tomorrow_message_sent: true,
                ..Default::default()
            })
        });
        repository.expect_save().never();
        let shared = SharedNotificationState::load(Arc::new(repository)).await;

        let changed = shared
            .lock()
            .await
            .apply(NotificationState::mark_tomorrow_message_sent)
            .await;

        assert!(!changed);
    }

    #[tokio::test]
    async fn failed_save_keeps_state_in_memory() {
        let mut repository = MockNotificationStateRepository::new();
        repository
            .expect_load()
            .times(1)
            .returning(NotificationState::default);
        repository
            .expect_save()
            .times(1)
            .returning(|_| Err(NotificationStateRepositoryError::StorageUnavailable));
        let shared = SharedNotificationState::load(Arc::new(repository)).await;

        let changed = shared
            .lock()
            .await
            .apply(NotificationState::confirm_release)
            .await;

        assert!(changed);
        assert!(shared.snapshot().await.game_released());
    }
}
