use crate::application_ports::Locator;
use crate::worker::unavailable_sleep_duration;
use application_ports::release_check_tick_handler::{
    ReleaseCheckOutcome, ReleaseCheckTickHandlerError, ReleaseCheckTickHandlerPort,
};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};

/// Polls the store front until the release is announced, then stops the
/// countdown through `countdown_stop`.
#[instrument(level = "debug", skip(locator, countdown_stop))]
pub async fn run_release_check_worker<L: Locator + Send + Sync + 'static>(
    locator: L,
    interval: Duration,
    overdue_interval: Duration,
    countdown_stop: CancellationToken,
) {
    let mut handler = locator.create_release_check_tick_handler_port();
    let mut unavailable_sleep: Option<Duration> = None;
    let mut overdue_reported = false;

    loop {
        let sleep_duration = match handler.tick().await {
            Ok(ReleaseCheckOutcome::Waiting) => {
                unavailable_sleep = None;
                interval
            }
            Ok(ReleaseCheckOutcome::Overdue) => {
                unavailable_sleep = None;
                if !overdue_reported {
                    overdue_reported = true;
                    warn!(
                        "Release is more than a day overdue, checking every {} seconds",
                        overdue_interval.as_secs(),
                    );
                }
                overdue_interval
            }
            Ok(ReleaseCheckOutcome::Announced) | Ok(ReleaseCheckOutcome::Retired) => {
                countdown_stop.cancel();
                info!("Release check worker finished");
                return;
            }
            Err(ReleaseCheckTickHandlerError::TemporarilyUnavailable) => {
                let duration = unavailable_sleep_duration(unavailable_sleep, interval);
                unavailable_sleep = Some(duration);
                if duration >= Duration::from_secs(30 * 60) {
                    error!(
                        "Release announcement keeps failing. Sleeping for {} seconds",
                        duration.as_secs(),
                    );
                } else {
                    warn!(
                        "Release check worker is temporarily unavailable. Sleeping for {} seconds",
                        duration.as_secs(),
                    );
                }
                duration
            }
        };

        tokio::time::sleep(sleep_duration).await;
    }
}
