//! Round-robin scheduling.
//!
//! Preemptive fixed time-slice rotation over a FIFO ready queue.
//! Dispatches are batch-run: the front process executes
//! `min(remaining, quantum)` ticks without interruption, and arrivals
//! during a slice are discovered only at the next scheduling point
//! (standard RR — no early preemption on arrival).
//!
//! # Admission
//! The `admitted` flag means "ever admitted past the arrival gate", not
//! current queue residency; it is set once and never cleared while the
//! process cycles through the queue. At a slice boundary, processes
//! that arrived during (or exactly at the end of) the slice enter the
//! queue before the preempted process re-enters, giving the textbook
//! rotation order.
//!
//! # Complexity
//! O(d · n) where d is the number of dispatches plus idle ticks.

use std::collections::VecDeque;
use std::num::NonZeroU64;

use log::debug;

use crate::models::{Policy, ProcessSpec, Schedule, Tick};
use crate::policy::{collect, work_items, WorkItem};

/// Runs round-robin over the workload with the given time slice.
pub fn run(specs: &[ProcessSpec], quantum: NonZeroU64) -> Schedule {
    let quantum = quantum.get();
    let mut items = work_items(specs);
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut admitted = vec![false; items.len()];
    let mut now: Tick = 0;
    let mut completed = 0;

    while completed < items.len() {
        admit(&items, &mut queue, &mut admitted, now);
        let Some(i) = queue.pop_front() else {
            // nothing arrived yet: idle one tick and retry
            now += 1;
            continue;
        };

        let slice = items[i].remaining.min(quantum);
        items[i].timeline.record_run(now, slice);
        items[i].remaining -= slice;
        now += slice;

        if items[i].remaining == 0 {
            items[i].finish = Some(now);
            completed += 1;
        } else {
            // slice-boundary arrivals queue ahead of the preempted process
            admit(&items, &mut queue, &mut admitted, now);
            queue.push_back(i);
        }
    }
    let schedule = collect(Policy::RoundRobin, items);
    debug!(
        "RR(q={quantum}): {} processes, makespan {}",
        schedule.process_count(),
        schedule.makespan()
    );
    schedule
}

/// Enqueues every arrived, unfinished, never-admitted process in
/// input-order scan and marks it admitted.
fn admit(items: &[WorkItem], queue: &mut VecDeque<usize>, admitted: &mut [bool], now: Tick) {
    for (i, item) in items.iter().enumerate() {
        if !admitted[i] && item.spec.arrival <= now && item.remaining > 0 {
            queue.push_back(i);
            admitted[i] = true;
        }
    }
}
