use chrono::{DateTime, Utc};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ClockPort {
    fn now(&self) -> DateTime<Utc>;
}
