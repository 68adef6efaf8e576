//! Write-side mutation representation.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Cell timestamp in microseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    /// Convert a wall-clock time, truncated to millisecond granularity.
    ///
    /// Times before the epoch map to negative timestamps. Times outside the
    /// representable range saturate at `i64::MIN` / `i64::MAX`.
    pub fn from_system_time(time: SystemTime) -> Self {
        let micros = match time.duration_since(UNIX_EPOCH) {
            Ok(d) => i64::try_from(d.as_millis())
                .ok()
                .and_then(|millis| millis.checked_mul(1000))
                .unwrap_or(i64::MAX),
            Err(e) => i64::try_from(e.duration().as_millis())
                .ok()
                .and_then(|millis| millis.checked_mul(-1000))
                .unwrap_or(i64::MIN),
        };
        Self(micros)
    }

    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    pub fn as_micros(&self) -> i64 {
        self.0
    }
}

/// Accepts the `(family, column, timestamp, value)` entries of a mutation.
pub trait MutationSink {
    fn set(&mut self, family: &str, column: &str, timestamp: Timestamp, value: Vec<u8>);
}

/// One write entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCell {
    pub family: String,
    pub column: String,
    pub timestamp: Timestamp,
    pub value: Vec<u8>,
}

/// Ordered write entries for a single row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mutation {
    entries: Vec<SetCell>,
}

impl Mutation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SetCell] {
        &self.entries
    }

    /// Find the entry for `family:column`.
    pub fn get(&self, family: &str, column: &str) -> Option<&SetCell> {
        self.entries
            .iter()
            .find(|e| e.family == family && e.column == column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MutationSink for Mutation {
    fn set(&mut self, family: &str, column: &str, timestamp: Timestamp, value: Vec<u8>) {
        self.entries.push(SetCell {
            family: family.to_string(),
            column: column.to_string(),
            timestamp,
            value,
        });
    }
}

/// A mutation packaged with the row key extracted from the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMutation {
    /// Row key, empty when the record does not carry one.
    pub key: String,
    pub mutation: Mutation,
    /// Sum of the value lengths of all entries.
    pub size: usize,
}

impl RowMutation {
    /// Returns true if the record supplied a row key.
    pub fn has_key(&self) -> bool {
        !self.key.is_empty()
    }
}
