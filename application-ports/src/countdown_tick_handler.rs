use async_trait::async_trait;
use thiserror::Error;

#[async_trait]
pub trait CountdownTickHandlerPort {
    async fn tick(&mut self) -> Result<CountdownTickOutcome, CountdownTickHandlerError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTickOutcome {
    Counting,
    /// The release is confirmed, the countdown will never run again.
    Retired,
}

#[derive(Debug, Error)]
pub enum CountdownTickHandlerError {
    #[error("Service temporarily unavailable")]
    TemporarilyUnavailable,
}
