//! Bounded ring buffer of trace records.

use std::collections::VecDeque;

use crate::trace::record::{TraceEvent, TraceRecord};

/// Ring buffer that keeps the most recent trace records.
///
/// When full, pushing a new record drops the oldest one. Sequence ids
/// keep increasing across drops, so gaps reveal that records were lost.
#[derive(Debug)]
pub struct TraceBuffer {
    records: VecDeque<TraceRecord>,
    capacity: usize,
    next_id: u64,
    total_recorded: u64,
}

impl TraceBuffer {
    /// Creates a buffer holding at most `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            next_id: 0,
            total_recorded: 0,
        }
    }

    /// Records an event, returning its sequence id.
    pub fn push(&mut self, timestamp_ns: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.total_recorded += 1;

        if self.capacity > 0 {
            if self.records.len() == self.capacity {
                self.records.pop_front();
            }
            self.records.push_back(TraceRecord {
                id,
                timestamp_ns,
                event,
            });
        }
        id
    }

    /// Returns the number of buffered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the buffered records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Returns up to `n` of the most recent records, oldest first.
    #[must_use]
    pub fn last(&self, n: usize) -> Vec<&TraceRecord> {
        let skip = self.records.len().saturating_sub(n);
        self.records.iter().skip(skip).collect()
    }

    /// Drops all buffered records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        TraceBufferStats {
            record_count: self.records.len(),
            total_recorded: self.total_recorded,
            capacity: self.capacity,
        }
    }
}

/// Statistics about a [`TraceBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceBufferStats {
    /// Records currently buffered.
    pub record_count: usize,
    /// Records ever pushed, including dropped ones.
    pub total_recorded: u64,
    /// Maximum records kept.
    pub capacity: usize,
}
