use async_trait::async_trait;
use thiserror::Error;

#[async_trait]
pub trait ReleaseCheckTickHandlerPort {
    async fn tick(&mut self) -> Result<ReleaseCheckOutcome, ReleaseCheckTickHandlerError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseCheckOutcome {
    /// Not released yet.
    Waiting,
    /// Not released yet, although the target is more than a day in the past.
    Overdue,
    /// The release announcement has just been sent.
    Announced,
    Retired,
}

#[derive(Debug, Error)]
pub enum ReleaseCheckTickHandlerError {
    #[error("Service temporarily unavailable")]
    TemporarilyUnavailable,
}
