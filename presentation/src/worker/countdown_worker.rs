use crate::application_ports::Locator;
use crate::worker::unavailable_sleep_duration;
use application_ports::countdown_tick_handler::{
    CountdownTickHandlerError, CountdownTickHandlerPort, CountdownTickOutcome,
};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

#[instrument(level = "debug", skip(locator, stop))]
pub async fn run_countdown_worker<L: Locator + Send + Sync + 'static>(
    locator: L,
    interval: Duration,
    stop: CancellationToken,
) {
    let mut handler = locator.create_countdown_tick_handler_port();
    let mut unavailable_sleep: Option<Duration> = None;

    while !stop.is_cancelled() {
        let sleep_duration = match handler.tick().await {
            Ok(CountdownTickOutcome::Counting) => {
                unavailable_sleep = None;
                interval
            }
            Ok(CountdownTickOutcome::Retired) => {
                info!("Countdown worker retired");
                return;
            }
            Err(CountdownTickHandlerError::TemporarilyUnavailable) => {
                let duration = unavailable_sleep_duration(unavailable_sleep, interval);
                unavailable_sleep = Some(duration);
                warn!(
                    "Countdown worker is temporarily unavailable. Sleeping for {} seconds",
                    duration.as_secs(),
                );
                duration
            }
        };

        tokio::select! {
            _ = stop.cancelled() => {}
            _ = tokio::time::sleep(sleep_duration) => {}
        }
    }

    info!("Countdown worker stopped after the release announcement");
}
