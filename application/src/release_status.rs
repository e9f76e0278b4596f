use crate::notification_state::SharedNotificationState;
use application_ports::release_status::{CountdownImageDto, ReleaseStatusDto, ReleaseStatusPort};
use async_trait::async_trait;
use domain::announcements::release_status_text;
use domain::countdown::{CountdownBucket, CountdownTarget};
use domain::notification_state::NotificationState;
use domain::ports::clock::ClockPort;
use domain::ports::countdown_image::{CountdownImage, CountdownImagePort};
use domain::ports::store_front::StoreFrontPort;
use domain::product::Product;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Answers the on-demand status command.
///
/// A release confirmed here is recorded in the shared state, but the
/// announcement itself is left to the periodic release check.
pub struct ReleaseStatusService {
    store_front_port: Arc<dyn StoreFrontPort + Send + Sync>,
    countdown_image_port: Arc<dyn CountdownImagePort + Send + Sync>,
    clock: Arc<dyn ClockPort + Send + Sync>,
    notification_state: Arc<SharedNotificationState>,
    product: Product,
    target: CountdownTarget,
}

impl ReleaseStatusService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        store_front_port: Arc<dyn StoreFrontPort + Send + Sync>,
        countdown_image_port: Arc<dyn CountdownImagePort + Send + Sync>,
        clock: Arc<dyn ClockPort + Send + Sync>,
        notification_state: Arc<SharedNotificationState>,
        product: Product,
        target: CountdownTarget,
    ) -> Self {
        Self {
            store_front_port,
            countdown_image_port,
            clock,
            notification_state,
            product,
            target,
        }
    }

    #[instrument(level = "debug", skip(self))]
    async fn resolve_released(&self) -> bool {
        if self.notification_state.snapshot().await.game_released() {
            return true;
        }

        match self.store_front_port.is_released(self.product.app_id).await {
            Ok(true) => {
                let changed = self
                    .notification_state
                    .lock()
                    .await
                    .apply(NotificationState::confirm_release)
                    .await;
                if changed {
                    info!(product = %self.product.name, "Release confirmed by a status request");
                }
                true
            }
            Ok(false) => false,
            Err(err) => {
                warn!(error = %err, "Store front check failed, reporting the product as not released");
                false
            }
        }
    }
}

#[async_trait]
impl ReleaseStatusPort for ReleaseStatusService {
    #[instrument(level = "info", skip(self))]
    async fn get_release_status(&self) -> ReleaseStatusDto {
        let released = self.resolve_released().await;
        let now = self.clock.now();
        let bucket = CountdownBucket::classify(self.target.remaining(now));
        let status_text = release_status_text(&self.product, &self.target, released, bucket);

        let image = match self
            .countdown_image_port
            .render(released, &self.target, now)
            .await
        {
            Ok(image) => Some(map_image(image)),
            Err(err) => {
                error!(error = %err, "Failed to render the countdown image");
                None
            }
        };

        ReleaseStatusDto {
            released,
            status_text,
            image,
        }
    }
}

fn map_image(image: CountdownImage) -> CountdownImageDto {
    CountdownImageDto {
        content: image.content,
        filename: image.filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{now as test_now, *};
    use chrono::TimeDelta;
    use domain::ports::countdown_image::{CountdownImageError, MockCountdownImagePort};
    use domain::ports::store_front::{MockStoreFrontPort, StoreFrontError};
    use std::path::PathBuf;

    fn service(
        store_front: MockStoreFrontPort,
        countdown_image: MockCountdownImagePort,
        notification_state: Arc<SharedNotificationState>,
        remaining: TimeDelta,
    ) -> ReleaseStatusService {
        ReleaseStatusService::new(
            Arc::new(store_front),
            Arc::new(countdown_image),
            clock(),
            notification_state,
            product(),
            target_in(remaining),
        )
    }

    fn rendering(expected_released: bool) -> MockCountdownImagePort {
        let mut countdown_image = MockCountdownImagePort::new();
        countdown_image
            .expect_render()
            .withf(move |released, _, now| *released == expected_released && *now == test_now())
            .times(1)
            .returning(|_, _, _| Ok(CountdownImage::png(vec![0x89, b'P', b'N', b'G'])));
        countdown_image
    }

    #[tokio::test]
    async fn counting_down_reports_days_with_image() {
        let mut store_front = MockStoreFrontPort::new();
        store_front
            .expect_is_released()
            .times(1)
            .returning(|_| Ok(false));
        let mut repository = repository(NotificationState::default());
        repository.expect_save().never();
        let notification_state = shared_state(repository).await;
        let service = service(store_front, rendering(false), notification_state, TimeDelta::hours(80));

        let status = service.get_release_status().await;

        assert!(!status.released);
        assert!(status.status_text.contains("releases in 3 days"));
        let image = status.image.unwrap();
        assert_eq!(image.filename, "countdown.png");
        assert_eq!(image.content, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn known_release_skips_the_store_front() {
        let mut store_front = MockStoreFrontPort::new();
        store_front.expect_is_released().never();
        let mut repository = repository(state(true, true, true));
        repository.expect_save().never();
        let notification_state = shared_state(repository).await;
        let service = service(store_front, rendering(true), notification_state, TimeDelta::hours(-5));

        let status = service.get_release_status().await;

        assert!(status.released);
        assert!(status.status_text.contains("is out now"));
    }

    #[tokio::test]
    async fn confirmed_release_is_recorded_without_announcing() {
        let mut store_front = MockStoreFrontPort::new();
        store_front
            .expect_is_released()
            .times(1)
            .returning(|_| Ok(true));
        let mut repository = repository(NotificationState::default());
        repository
            .expect_save()
            .withf(|state| state.game_released() && !state.release_message_sent())
            .times(1)
            .returning(|_| Ok(()));
        let notification_state = shared_state(repository).await;
        let service = service(
            store_front,
            rendering(true),
            notification_state.clone(),
            TimeDelta::minutes(-1),
        );

        let status = service.get_release_status().await;

        assert!(status.released);
        let state = notification_state.snapshot().await;
        assert!(state.game_released());
        assert!(!state.release_message_sent());
    }

    #[tokio::test]
    async fn store_front_error_reports_not_released() {
        let mut store_front = MockStoreFrontPort::new();
        store_front
            .expect_is_released()
            .times(1)
            .returning(|_| Err(StoreFrontError::UnexpectedResponse));
        let mut repository = repository(NotificationState::default());
        repository.expect_save().never();
        let notification_state = shared_state(repository).await;
        let service = service(store_front, rendering(false), notification_state, TimeDelta::hours(-2));

        let status = service.get_release_status().await;

        assert!(!status.released);
        assert!(status.status_text.contains("has passed"));
    }

    #[tokio::test]
    async fn render_failure_still_reports_text() {
        let mut store_front = MockStoreFrontPort::new();
        store_front
            .expect_is_released()
            .times(1)
            .returning(|_| Ok(false));
        let mut countdown_image = MockCountdownImagePort::new();
        countdown_image
            .expect_render()
            .times(1)
            .returning(|_, _, _| {
                Err(CountdownImageError::AssetMissing(PathBuf::from("assets/logo.png")))
            });
        let mut repository = repository(NotificationState::default());
        repository.expect_save().never();
        let notification_state = shared_state(repository).await;
        let service = service(store_front, countdown_image, notification_state, TimeDelta::hours(5));

        let status = service.get_release_status().await;

        assert!(status.image.is_none());
        assert_eq!(status.status_text, "**Deltarune** releases today, in 5 hours!");
    }
}
