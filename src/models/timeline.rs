//! Execution timeline model.
//!
//! Records every contiguous slice of wall-time a process occupied the
//! CPU. Slices are end-exclusive, non-overlapping, and strictly
//! increasing; their union length equals the process burst once the
//! process has finished.

use serde::{Deserialize, Serialize};

use crate::models::process::Tick;

/// A contiguous `[start, end)` interval of CPU occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// First tick of the interval (inclusive).
    pub start: Tick,
    /// End of the interval (exclusive).
    pub end: Tick,
}

impl Slice {
    /// Creates a slice covering `[start, end)`.
    pub fn new(start: Tick, end: Tick) -> Self {
        Self { start, end }
    }

    /// Number of ticks the slice covers.
    #[inline]
    pub fn len(&self) -> Tick {
        self.end - self.start
    }

    /// Whether the slice covers no ticks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Whether this slice shares any tick with `other`.
    pub fn overlaps(&self, other: &Slice) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Ordered slice sequence for one process.
///
/// Recording merges contiguous runs: a slice extends only when it ends
/// exactly at the tick being recorded. Under the one-process-per-tick
/// invariant this is equivalent to "the same process also ran the
/// previous tick", so a resumption after preemption or idle always
/// opens a fresh slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one tick of execution covering `[now, now + 1)`.
    pub fn record_unit(&mut self, now: Tick) {
        self.record_run(now, 1);
    }

    /// Records a dispatch of `len` ticks starting at `now`.
    ///
    /// Extends the last slice when contiguous, otherwise appends a new
    /// one. Zero-length runs are ignored.
    pub fn record_run(&mut self, now: Tick, len: Tick) {
        if len == 0 {
            return;
        }
        match self.slices.last_mut() {
            Some(last) if last.end == now => last.end = now + len,
            _ => self.slices.push(Slice::new(now, now + len)),
        }
    }

    /// The recorded slices, in chronological order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Total ticks executed (sum of slice lengths).
    pub fn total_run(&self) -> Tick {
        self.slices.iter().map(Slice::len).sum()
    }

    /// Tick of first dispatch, if the process ever ran.
    pub fn first_start(&self) -> Option<Tick> {
        self.slices.first().map(|s| s.start)
    }

    /// End of the last slice, if the process ever ran.
    pub fn last_end(&self) -> Option<Tick> {
        self.slices.last().map(|s| s.end)
    }

    /// Number of distinct slices (dispatches after merging).
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }
}
