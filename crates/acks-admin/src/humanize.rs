//! Human-readable relative times ("3 hours ago")

use chrono::{DateTime, TimeDelta, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Describe the distance between `then` and `now`, e.g. `"2 days ago"`,
/// `"an hour from now"`, or `"now"` for the same second.
pub fn natural_time(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let delta = now - then;
    let future = delta < TimeDelta::zero();
    let text = natural_delta(delta.abs());
    if text == "a moment" {
        "now".to_string()
    } else if future {
        format!("{} from now", text)
    } else {
        format!("{} ago", text)
    }
}

/// Describe a non-negative duration without direction
pub fn natural_delta(delta: TimeDelta) -> String {
    let total = delta.num_seconds().abs();
    let seconds = total % SECONDS_PER_DAY;
    let mut days = total / SECONDS_PER_DAY;
    let years = days / 365;
    days %= 365;
    let months = (days as f64 / 30.5) as i64;

    if years == 0 && days < 1 {
        return match seconds {
            0 => "a moment".to_string(),
            1 => "a second".to_string(),
            2..=59 => format!("{} seconds", seconds),
            60..=119 => "a minute".to_string(),
            120..=3599 => format!("{} minutes", seconds / 60),
            3600..=7199 => "an hour".to_string(),
            _ => format!("{} hours", seconds / 3600),
        };
    }

    if years == 0 {
        return match (days, months) {
            (1, _) => "a day".to_string(),
            (_, 0) => format!("{} days", days),
            (_, 1) => "a month".to_string(),
            _ => format!("{} months", months),
        };
    }

    if years == 1 {
        return match (days, months) {
            (0, _) => "a year".to_string(),
            (1, _) => "1 year, 1 day".to_string(),
            (_, 0) => format!("1 year, {} days", days),
            (_, 1) => "1 year, 1 month".to_string(),
            _ => format!("1 year, {} months", months),
        };
    }

    format!("{} years", years)
}
