// Version tokens used for optimistic concurrency control.
//
// Purpose
// - Give every stored record an opaque token that changes on each successful write.
//
// Responsibilities
// - Business logic only compares tokens for equality.
// - Store implementations create the first token and derive the next one on each conditional write.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub trait VersionToken:
    Clone + PartialEq + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Token assigned by a store when a record is created.
    fn initial() -> Self;

    /// Token a store assigns after a successful conditional write. Always differs from `self`.
    fn successor(&self) -> Self;
}

/// Monotonic counter, starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterVersion(pub u64);

impl VersionToken for CounterVersion {
    fn initial() -> Self {
        Self(0)
    }

    fn successor(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CounterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp of the last movement on the record.
///
/// Two writes within the same clock tick still get distinct tokens: the successor is never
/// earlier than one microsecond after the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimestampVersion(pub DateTime<Utc>);

impl VersionToken for TimestampVersion {
    fn initial() -> Self {
        Self(Utc::now())
    }

    fn successor(&self) -> Self {
        let floor = self.0 + TimeDelta::microseconds(1);
        Self(Utc::now().max(floor))
    }
}

impl fmt::Display for TimestampVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
