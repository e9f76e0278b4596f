use chrono::TimeDelta;

/// Formats the remaining time as `DD : HH : MM : SS`, clamped to zeros once the
/// target has passed.
pub fn format_readout(remaining: TimeDelta) -> String {
    let total_seconds = remaining.num_seconds().max(0);
    let days = total_seconds / 86_400;
    let hours = total_seconds % 86_400 / 3_600;
    let minutes = total_seconds % 3_600 / 60;
    let seconds = total_seconds % 60;

    format!("{days:02} : {hours:02} : {minutes:02} : {seconds:02}")
}
