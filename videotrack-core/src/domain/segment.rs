use instant::Instant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp in milliseconds since a process-wide monotonic anchor
///
/// Serializable and comparable. Uses instant::Instant internally so the same
/// code path works natively and under WASM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Create a timestamp representing the current moment
    pub fn now() -> Self {
        // Use a static anchor point for all timestamps in the page view
        static ANCHOR: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();
        let anchor = ANCHOR.get_or_init(Instant::now);

        let elapsed = Instant::now().duration_since(*anchor);
        Timestamp(elapsed.as_millis() as u64)
    }

    /// Get the raw milliseconds value
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`; zero if `earlier` is not earlier
    pub fn millis_since(&self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Create a timestamp from a raw milliseconds value (for testing)
    #[cfg(test)]
    pub fn from_millis(millis: u64) -> Self {
        Timestamp(millis)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// A contiguous span of active viewing
///
/// Opens when playback starts, or when a report for the previous span
/// succeeds while playback continues. Stays open while a report for it is in
/// flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    started_at: Timestamp,
}

impl Segment {
    /// Open a segment at the given moment
    pub fn open(now: Timestamp) -> Self {
        Segment { started_at: now }
    }

    /// Open a segment starting now
    pub fn open_now() -> Self {
        Self::open(Timestamp::now())
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Whole seconds viewed in this segment, rounded to the nearest second
    pub fn seconds_viewed(&self, now: Timestamp) -> u32 {
        let millis = now.millis_since(self.started_at);
        ((millis + 500) / 1000) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use instant::Duration;

    #[test]
    fn test_timestamp_now_is_monotonic() {
        let t1 = Timestamp::now();
        std::thread::sleep(Duration::from_millis(5));
        let t2 = Timestamp::now();

        assert!(t2 > t1);
    }

    #[test]
    fn test_timestamp_ordering() {
        let t1 = Timestamp::from_millis(100);
        let t2 = Timestamp::from_millis(200);
        let t3 = Timestamp::from_millis(200);

        assert!(t1 < t2);
        assert!(t2 > t1);
        assert_eq!(t2, t3);
    }

    #[test]
    fn test_millis_since_saturates() {
        let earlier = Timestamp::from_millis(500);
        let later = Timestamp::from_millis(1500);

        assert_eq!(later.millis_since(earlier), 1000);
        assert_eq!(earlier.millis_since(later), 0);
    }

    #[test]
    fn test_timestamp_serialization() {
        let timestamp = Timestamp::from_millis(12345);
        let json = serde_json::to_string(&timestamp).unwrap();
        assert_eq!(json, "12345");

        let deserialized: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, timestamp);
    }

    #[test]
    fn test_timestamp_display() {
        let timestamp = Timestamp::from_millis(12345);
        assert_eq!(timestamp.to_string(), "12345ms");
    }

    #[test]
    fn test_seconds_viewed_rounds_down() {
        let segment = Segment::open(Timestamp::from_millis(0));

        assert_eq!(segment.seconds_viewed(Timestamp::from_millis(5400)), 5);
    }

    #[test]
    fn test_seconds_viewed_rounds_up() {
        let segment = Segment::open(Timestamp::from_millis(0));

        assert_eq!(segment.seconds_viewed(Timestamp::from_millis(5600)), 6);
    }

    #[test]
    fn test_seconds_viewed_at_five_point_two() {
        // 5.2s of viewing reports as 5 whole seconds
        let segment = Segment::open(Timestamp::from_millis(1000));

        assert_eq!(segment.seconds_viewed(Timestamp::from_millis(6200)), 5);
    }

    #[test]
    fn test_seconds_viewed_zero_elapsed() {
        let segment = Segment::open(Timestamp::from_millis(1000));

        assert_eq!(segment.seconds_viewed(Timestamp::from_millis(1000)), 0);
    }

    #[test]
    fn test_seconds_viewed_clock_went_backwards() {
        let segment = Segment::open(Timestamp::from_millis(2000));

        assert_eq!(segment.seconds_viewed(Timestamp::from_millis(1000)), 0);
    }
}
