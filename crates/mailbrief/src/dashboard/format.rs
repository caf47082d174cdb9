use chrono::{DateTime, Utc};

/// `"1 email"` / `"N emails"` when nothing is filtered out, otherwise
/// `"F of N emails"`.
pub fn count_label(filtered: usize, total: usize) -> String {
    if filtered == total {
        let noun = if total == 1 { "email" } else { "emails" };
        format!("{} {}", total, noun)
    } else {
        format!("{} of {} emails", filtered, total)
    }
}

/// `"Processed 5 minutes ago"`.
pub fn processed_label(processed_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!("Processed {} ago", distance_in_words(processed_at, now))
}

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1_440;
const MINUTES_PER_MONTH: i64 = 43_200;
const MINUTES_PER_YEAR: i64 = 525_600;

/// Approximate, human distance between two instants ("about 2 hours",
/// "3 days"). A `then` in the future reads as "less than a minute".
pub fn distance_in_words(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    let minutes = (seconds + 30) / 60;

    match minutes {
        0 => "less than a minute".to_string(),
        1 => "1 minute".to_string(),
        m if m < 45 => format!("{} minutes", m),
        m if m < 90 => "about 1 hour".to_string(),
        m if m < MINUTES_PER_DAY => format!("about {} hours", rounded(m, MINUTES_PER_HOUR)),
        m if m < 2_520 => "1 day".to_string(),
        m if m < MINUTES_PER_MONTH => format!("{} days", rounded(m, MINUTES_PER_DAY)),
        m if m < 2 * MINUTES_PER_MONTH => match rounded(m, MINUTES_PER_MONTH) {
            1 => "about 1 month".to_string(),
            n => format!("about {} months", n),
        },
        m if m < MINUTES_PER_YEAR => format!("{} months", rounded(m, MINUTES_PER_MONTH)),
        m => years_in_words(m),
    }
}

fn rounded(minutes: i64, unit: i64) -> i64 {
    (minutes + unit / 2) / unit
}

fn years_in_words(minutes: i64) -> String {
    let months = minutes / MINUTES_PER_MONTH;
    let years = months / 12;
    let remainder = months % 12;
    let plural = |n: i64| if n == 1 { "year" } else { "years" };

    if remainder < 3 {
        format!("about {} {}", years, plural(years))
    } else if remainder < 9 {
        format!("over {} {}", years, plural(years))
    } else {
        format!("almost {} years", years + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, 0), "0 emails");
        assert_eq!(count_label(1, 1), "1 email");
        assert_eq!(count_label(10, 10), "10 emails");
        assert_eq!(count_label(3, 10), "3 of 10 emails");
        assert_eq!(count_label(0, 1), "0 of 1 emails");
    }

    fn ago(d: Duration) -> String {
        let now = Utc::now();
        distance_in_words(now - d, now)
    }

    #[test]
    fn test_distance_in_words() {
        assert_eq!(ago(Duration::seconds(10)), "less than a minute");
        assert_eq!(ago(Duration::seconds(45)), "1 minute");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes");
        assert_eq!(ago(Duration::minutes(50)), "about 1 hour");
        assert_eq!(ago(Duration::hours(3)), "about 3 hours");
        assert_eq!(ago(Duration::hours(30)), "1 day");
        assert_eq!(ago(Duration::days(4)), "4 days");
        assert_eq!(ago(Duration::days(35)), "about 1 month");
        assert_eq!(ago(Duration::days(50)), "about 2 months");
        assert_eq!(ago(Duration::days(150)), "5 months");
        assert_eq!(ago(Duration::days(370)), "about 1 year");
        assert_eq!(ago(Duration::days(550)), "over 1 year");
        assert_eq!(ago(Duration::days(700)), "almost 2 years");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        let now = Utc::now();
        assert_eq!(
            distance_in_words(now + Duration::minutes(3), now),
            "less than a minute"
        );
    }

    #[test]
    fn test_processed_label() {
        let now = Utc::now();
        assert_eq!(
            processed_label(now - Duration::minutes(5), now),
            "Processed 5 minutes ago"
        );
    }
}
