use chrono::TimeDelta;
use tracing::instrument;

/// Channel label used once the release has been confirmed by the store front.
pub const RELEASED_CHANNEL_LABEL: &str = "is-out-now";

/// Range of remaining time that decides what the countdown shows.
///
/// Whole days are `floor(remaining / 1 day)`, so exactly 24 hours left is
/// [`CountdownBucket::Tomorrow`] and exactly 48 hours is `Days(2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownBucket {
    Days(i64),
    Tomorrow,
    Hours(i64),
    Passed,
}

impl CountdownBucket {
    #[instrument(level = "trace")]
    pub fn classify(remaining: TimeDelta) -> Self {
        if remaining <= TimeDelta::zero() {
            return CountdownBucket::Passed;
        }

        match remaining.num_days() {
            days if days > 1 => CountdownBucket::Days(days),
            1 => CountdownBucket::Tomorrow,
            _ => CountdownBucket::Hours(remaining.num_hours()),
        }
    }

    pub fn channel_label(&self) -> String {
        match self {
            CountdownBucket::Days(days) => format!("in-{days}-days"),
            CountdownBucket::Tomorrow => "tomorrow".to_string(),
            CountdownBucket::Hours(hours) => format!("in-{hours}-hours"),
            CountdownBucket::Passed => "check-status".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(remaining: TimeDelta) -> String {
        CountdownBucket::classify(remaining).channel_label()
    }

    #[test]
    fn more_than_a_day_counts_whole_days() {
        assert_eq!(label(TimeDelta::hours(50)), "in-2-days");
        assert_eq!(label(TimeDelta::days(10) + TimeDelta::minutes(3)), "in-10-days");
        assert_eq!(
            CountdownBucket::classify(TimeDelta::hours(71) + TimeDelta::minutes(59)),
            CountdownBucket::Days(2)
        );
    }

    #[test]
    fn exactly_two_days_is_still_days() {
        assert_eq!(CountdownBucket::classify(TimeDelta::days(2)), CountdownBucket::Days(2));
    }

    #[test]
    fn exactly_one_day_is_tomorrow() {
        assert_eq!(CountdownBucket::classify(TimeDelta::days(1)), CountdownBucket::Tomorrow);
        assert_eq!(
            CountdownBucket::classify(TimeDelta::days(2) - TimeDelta::seconds(1)),
            CountdownBucket::Tomorrow
        );
    }

    #[test]
    fn under_a_day_counts_whole_hours() {
        assert_eq!(label(TimeDelta::hours(20)), "in-20-hours");
        assert_eq!(
            CountdownBucket::classify(TimeDelta::days(1) - TimeDelta::seconds(1)),
            CountdownBucket::Hours(23)
        );
        assert_eq!(label(TimeDelta::minutes(59)), "in-0-hours");
    }

    #[test]
    fn zero_or_negative_is_passed() {
        assert_eq!(CountdownBucket::classify(TimeDelta::zero()), CountdownBucket::Passed);
        assert_eq!(label(TimeDelta::hours(-30)), "check-status");
    }

    #[test]
    fn one_second_left_is_still_hours() {
        assert_eq!(
            CountdownBucket::classify(TimeDelta::seconds(1)),
            CountdownBucket::Hours(0)
        );
    }
}
