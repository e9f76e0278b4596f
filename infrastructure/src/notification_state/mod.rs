use async_trait::async_trait;
use domain::notification_state::{
    NotificationState, NotificationStateRepository, NotificationStateRepositoryError,
    NotificationStateSnapshot,
};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// On-disk layout of the state file. Missing keys read as `false`.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
struct NotificationStateFile {
    tomorrow_message_sent: bool,
    release_message_sent: bool,
    game_released: bool,
}

impl From<NotificationStateFile> for NotificationState {
    fn from(file: NotificationStateFile) -> Self {
        NotificationState::from_snapshot(NotificationStateSnapshot {
            tomorrow_message_sent: file.tomorrow_message_sent,
            release_message_sent: file.release_message_sent,
            game_released: file.game_released,
        })
    }
}

impl From<&NotificationState> for NotificationStateFile {
    fn from(state: &NotificationState) -> Self {
        let snapshot = state.to_snapshot();
        Self {
            tomorrow_message_sent: snapshot.tomorrow_message_sent,
            release_message_sent: snapshot.release_message_sent,
            game_released: snapshot.game_released,
        }
    }
}

pub struct JsonFileNotificationStateRepository {
    path: PathBuf,
}

impl JsonFileNotificationStateRepository {
    #[instrument(level = "trace", skip(path))]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temporary_path(&self) -> PathBuf {
        let mut file_name = self.path.file_name().unwrap_or_default().to_os_string();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

#[async_trait]
impl NotificationStateRepository for JsonFileNotificationStateRepository {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> NotificationState {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("No notification state file yet, starting fresh");
                return NotificationState::default();
            }
            Err(err) => {
                warn!(error = ?err, "Failed to read notification state file, starting fresh");
                return NotificationState::default();
            }
        };

        match serde_json::from_str::<NotificationStateFile>(&content) {
            Ok(file) => file.into(),
            Err(err) => {
                warn!(error = ?err, "Notification state file is corrupted, starting fresh");
                NotificationState::default()
            }
        }
    }

    #[instrument(level = "debug", err, skip(self), fields(path = %self.path.display()))]
    async fn save(&self, state: &NotificationState) -> Result<(), NotificationStateRepositoryError> {
        let content = serde_json::to_string_pretty(&NotificationStateFile::from(state))
            .map_err(|err| {
                warn!(error = ?err, "Failed to serialize notification state");
                NotificationStateRepositoryError::StorageUnavailable
            })?;

        // Written aside and renamed so a crash never leaves a half-written file.
        let temporary_path = self.temporary_path();
        tokio::fs::write(&temporary_path, content)
            .await
            .map_err(|err| {
                warn!(error = ?err, "Failed to write notification state file");
                NotificationStateRepositoryError::StorageUnavailable
            })?;
        tokio::fs::rename(&temporary_path, &self.path)
            .await
            .map_err(|err| {
                warn!(error = ?err, "Failed to replace notification state file");
                NotificationStateRepositoryError::StorageUnavailable
            })?;

        Ok(())
    }
}
