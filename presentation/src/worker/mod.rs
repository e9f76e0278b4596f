mod countdown_worker;
mod release_check_worker;

use crate::application_ports::Locator;
use crate::worker::countdown_worker::run_countdown_worker;
use crate::worker::release_check_worker::run_release_check_worker;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Longest pause between retries while a handler keeps failing.
const MAX_UNAVAILABLE_SLEEP: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Clone, Copy)]
pub struct WorkerIntervals {
    pub countdown: Duration,
    pub release_check: Duration,
    /// Used instead of `release_check` once the target is more than a day gone.
    pub release_check_overdue: Duration,
}

/// Runs both periodic jobs until the release has been announced.
#[instrument(level = "debug", skip(locator))]
pub async fn run_worker<L: Locator + Clone + Send + Sync + 'static>(
    locator: L,
    intervals: WorkerIntervals,
) -> Result<(), Error> {
    let countdown_stop = CancellationToken::new();

    let countdown_handle = tokio::spawn(run_countdown_worker(
        locator.clone(),
        intervals.countdown,
        countdown_stop.clone(),
    ));
    let release_check_handle = tokio::spawn(run_release_check_worker(
        locator.clone(),
        intervals.release_check,
        intervals.release_check_overdue,
        countdown_stop,
    ));

    countdown_handle.await?;
    release_check_handle.await?;

    Ok(())
}

fn unavailable_sleep_duration(previous: Option<Duration>, interval: Duration) -> Duration {
    previous
        .map(|duration| duration * 2)
        .unwrap_or(interval)
        .min(MAX_UNAVAILABLE_SLEEP)
}

#[cfg(test)]
mod test_support;
