//! Time-of-day values and the inclusive time window filter

use std::fmt;
use time::OffsetDateTime;

/// A time of day with minute resolution, written as zero-padded `HH:MM`
///
/// Ordering matches the lexicographic ordering of the `HH:MM` text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const START_OF_DAY: ClockTime = ClockTime { hour: 0, minute: 0 };
    pub const END_OF_DAY: ClockTime = ClockTime {
        hour: 23,
        minute: 59,
    };

    /// Create a clock time, `None` if out of range
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Parse `HH:MM` (two digits, colon, two digits). Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let bytes = text.trim().as_bytes();
        let [h1, h2, b':', m1, m2] = bytes else {
            return None;
        };
        let digit = |b: &u8| b.is_ascii_digit().then(|| b - b'0');
        let hour = digit(h1)? * 10 + digit(h2)?;
        let minute = digit(m1)? * 10 + digit(m2)?;
        Self::new(hour, minute)
    }

    /// Time of day of a timestamp, in the timestamp's own offset. Seconds are truncated.
    pub fn of(timestamp: &OffsetDateTime) -> Self {
        Self {
            hour: timestamp.hour(),
            minute: timestamp.minute(),
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Inclusive same-day range of clock times
///
/// A window whose start is after its end (e.g. `18:00..06:00`) does not wrap
/// around midnight; it contains nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeWindow {
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: ClockTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// Whether the timestamp's time of day lies inside the window
    pub fn contains_timestamp(&self, timestamp: &OffsetDateTime) -> bool {
        self.contains(ClockTime::of(timestamp))
    }

    /// True when no time of day can match
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::new(ClockTime::START_OF_DAY, ClockTime::END_OF_DAY)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_parse_valid() {
        assert_eq!(ClockTime::parse("00:00"), Some(ClockTime::START_OF_DAY));
        assert_eq!(ClockTime::parse("23:59"), Some(ClockTime::END_OF_DAY));
        assert_eq!(ClockTime::parse(" 08:30 "), ClockTime::new(8, 30));
    }

    #[test]
    fn test_parse_invalid() {
        for text in ["", "8:30", "08:3", "0830", "08-30", "24:00", "12:60", "ab:cd", "08:30:00"] {
            assert_eq!(ClockTime::parse(text), None, "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(ClockTime::new(7, 5).unwrap().to_string(), "07:05");
        assert_eq!(TimeWindow::default().to_string(), "00:00-23:59");
    }

    #[test]
    fn test_order_matches_text_order() {
        let times = ["00:00", "00:59", "01:00", "09:59", "10:00", "23:59"];
        for pair in times.windows(2) {
            let a = ClockTime::parse(pair[0]).unwrap();
            let b = ClockTime::parse(pair[1]).unwrap();
            assert_eq!(a < b, pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_of_truncates_seconds() {
        let time = ClockTime::of(&datetime!(2024-05-01 12:00:59 UTC));
        assert_eq!(time, ClockTime::new(12, 0).unwrap());
    }

    #[test]
    fn test_window_is_inclusive() {
        let window = TimeWindow::new(
            ClockTime::parse("08:00").unwrap(),
            ClockTime::parse("12:00").unwrap(),
        );
        assert!(window.contains_timestamp(&datetime!(2024-05-01 08:00 UTC)));
        assert!(window.contains_timestamp(&datetime!(2024-05-01 12:00:30 UTC)));
        assert!(!window.contains_timestamp(&datetime!(2024-05-01 12:01 UTC)));
        assert!(!window.contains_timestamp(&datetime!(2024-05-01 07:59 UTC)));
    }

    #[test]
    fn test_window_across_midnight_matches_nothing() {
        let window = TimeWindow::new(
            ClockTime::parse("18:00").unwrap(),
            ClockTime::parse("06:00").unwrap(),
        );
        assert!(window.is_inverted());
        assert!(!window.contains(ClockTime::parse("20:00").unwrap()));
        assert!(!window.contains(ClockTime::parse("03:00").unwrap()));
    }
}
