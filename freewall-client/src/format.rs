use chrono::Duration;

use crate::api::Time;

/// Distance between `t` and `now` in words, for instance "about 3 hours ago"
pub fn time_ago(t: Time, now: Time) -> String {
    let d = now - t;
    if d < Duration::zero() {
        return String::from("in the future");
    }
    let minutes = (d.num_seconds() as f64 / 60.0).round() as i64;
    let hours = (minutes as f64 / 60.0).round() as i64;
    let days = (minutes as f64 / 1440.0).round() as i64;
    let months = (days as f64 / 30.0).round() as i64;
    let years = days / 365;
    let phrase = match minutes {
        0 => String::from("less than a minute"),
        1 => String::from("1 minute"),
        2..=44 => format!("{minutes} minutes"),
        45..=89 => String::from("about 1 hour"),
        90..=1439 => format!("about {hours} hours"),
        1440..=2519 => String::from("1 day"),
        2520..=43199 => format!("{days} days"),
        43200..=86399 => String::from("about 1 month"),
        86400..=525599 => format!("{months} months"),
        _ => match years {
            0 | 1 => String::from("about 1 year"),
            y => format!("over {y} years"),
        },
    };
    format!("{phrase} ago")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ago(secs: i64) -> String {
        let now = chrono::Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        time_ago(now - Duration::seconds(secs), now)
    }

    #[test]
    fn buckets() {
        assert_eq!(ago(0), "less than a minute ago");
        assert_eq!(ago(29), "less than a minute ago");
        assert_eq!(ago(60), "1 minute ago");
        assert_eq!(ago(10 * 60), "10 minutes ago");
        assert_eq!(ago(50 * 60), "about 1 hour ago");
        assert_eq!(ago(5 * 3600), "about 5 hours ago");
        assert_eq!(ago(30 * 3600), "1 day ago");
        assert_eq!(ago(4 * 86400), "4 days ago");
        assert_eq!(ago(31 * 86400), "about 1 month ago");
        assert_eq!(ago(100 * 86400), "3 months ago");
        assert_eq!(ago(400 * 86400), "about 1 year ago");
        assert_eq!(ago(800 * 86400), "over 2 years ago");
    }

    #[test]
    fn clock_skew() {
        assert_eq!(ago(-120), "in the future");
    }
}
