use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use tracing::instrument;

/// The instant the countdown runs towards, together with the timezone used when
/// showing it to people.
///
/// The display date may be overridden to differ from the calendar date of the
/// instant. Only [`CountdownTarget::remaining`] takes part in any duration math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTarget {
    instant: DateTime<Utc>,
    timezone: Tz,
    display_date: NaiveDate,
}

#[derive(Debug, Error)]
pub enum CountdownTargetError {
    #[error("Local time {0} does not exist or is ambiguous in timezone {1}")]
    InvalidLocalTime(NaiveDateTime, Tz),
}

impl CountdownTarget {
    #[instrument(level = "trace")]
    pub fn new(instant: DateTime<Utc>, timezone: Tz) -> Self {
        let display_date = instant.with_timezone(&timezone).date_naive();

        Self {
            instant,
            timezone,
            display_date,
        }
    }

    #[instrument(level = "trace")]
    pub fn from_local(local: NaiveDateTime, timezone: Tz) -> Result<Self, CountdownTargetError> {
        let instant = timezone
            .from_local_datetime(&local)
            .single()
            .ok_or(CountdownTargetError::InvalidLocalTime(local, timezone))?
            .with_timezone(&Utc);

        Ok(Self::new(instant, timezone))
    }

    pub fn with_display_date(mut self, display_date: NaiveDate) -> Self {
        self.display_date = display_date;
        self
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn display_date(&self) -> NaiveDate {
        self.display_date
    }

    /// e.g. `June 05, 2025`
    pub fn display_date_text(&self) -> String {
        self.display_date.format("%B %d, %Y").to_string()
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> TimeDelta {
        self.instant - now
    }
}
