use crate::application_ports::Locator;
use application_ports::countdown_tick_handler::{
    CountdownTickHandlerError, CountdownTickHandlerPort, CountdownTickOutcome,
};
use application_ports::release_check_tick_handler::{
    ReleaseCheckOutcome, ReleaseCheckTickHandlerError, ReleaseCheckTickHandlerPort,
};
use application_ports::release_status::{ReleaseStatusDto, ReleaseStatusPort};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Script<T, E> = Arc<Mutex<VecDeque<Result<T, E>>>>;

/// Hands out handlers that replay scripted outcomes and count their ticks.
#[derive(Clone)]
pub struct FakeLocator {
    countdown: Script<CountdownTickOutcome, CountdownTickHandlerError>,
    countdown_ticks: Arc<Mutex<usize>>,
    release_check: Script<ReleaseCheckOutcome, ReleaseCheckTickHandlerError>,
    release_check_ticks: Arc<Mutex<usize>>,
}

impl FakeLocator {
    /// Exhausted scripts keep answering `Counting` and `Waiting`.
    pub fn new(
        countdown: Vec<Result<CountdownTickOutcome, CountdownTickHandlerError>>,
        release_check: Vec<Result<ReleaseCheckOutcome, ReleaseCheckTickHandlerError>>,
    ) -> Self {
        Self {
            countdown: Arc::new(Mutex::new(countdown.into())),
            countdown_ticks: Arc::new(Mutex::new(0)),
            release_check: Arc::new(Mutex::new(release_check.into())),
            release_check_ticks: Arc::new(Mutex::new(0)),
        }
    }

    pub fn countdown_ticks(&self) -> usize {
        *self.countdown_ticks.lock().unwrap()
    }

    pub fn release_check_ticks(&self) -> usize {
        *self.release_check_ticks.lock().unwrap()
    }
}

pub struct FakeCountdownHandler(FakeLocator);

#[async_trait]
impl CountdownTickHandlerPort for FakeCountdownHandler {
    async fn tick(&mut self) -> Result<CountdownTickOutcome, CountdownTickHandlerError> {
        *self.0.countdown_ticks.lock().unwrap() += 1;
        self.0
            .countdown
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(CountdownTickOutcome::Counting))
    }
}

pub struct FakeReleaseCheckHandler(FakeLocator);

#[async_trait]
impl ReleaseCheckTickHandlerPort for FakeReleaseCheckHandler {
    async fn tick(&mut self) -> Result<ReleaseCheckOutcome, ReleaseCheckTickHandlerError> {
        *self.0.release_check_ticks.lock().unwrap() += 1;
        self.0
            .release_check
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(ReleaseCheckOutcome::Waiting))
    }
}

pub struct UnusedReleaseStatus;

#[async_trait]
impl ReleaseStatusPort for UnusedReleaseStatus {
    async fn get_release_status(&self) -> ReleaseStatusDto {
        unreachable!("workers never ask for the release status")
    }
}

impl Locator for FakeLocator {
    fn create_countdown_tick_handler_port(&self) -> impl CountdownTickHandlerPort + Send {
        FakeCountdownHandler(self.clone())
    }

    fn create_release_check_tick_handler_port(&self) -> impl ReleaseCheckTickHandlerPort + Send {
        FakeReleaseCheckHandler(self.clone())
    }

    fn get_release_status_port(&self) -> &(dyn ReleaseStatusPort + Send + Sync) {
        &UnusedReleaseStatus
    }
}
