use std::fmt;

use time::{Duration, OffsetDateTime};

/// Unix timestamp with millisecond precision.
///
/// All `_at` attributes throughout the workspace carry this type and are
/// persisted as plain integer milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampMs(i64);

impl TimestampMs {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl From<OffsetDateTime> for TimestampMs {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl From<TimestampMs> for OffsetDateTime {
    fn from(from: TimestampMs) -> Self {
        OffsetDateTime::UNIX_EPOCH + Duration::milliseconds(from.0)
    }
}

impl fmt::Display for TimestampMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", OffsetDateTime::from(*self))
    }
}
