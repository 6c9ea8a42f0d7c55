//! First-come-first-served scheduling.
//!
//! Non-preemptive: processes run to completion in input order. The
//! input order is trusted as arrival order and never re-sorted; equal
//! arrivals keep their input positions. Callers that want a warning on
//! non-monotone arrivals can check [`is_arrival_sorted`] first.
//!
//! # Algorithm
//! Walk the workload in order. Each process starts at
//! `max(now, arrival)` (waiting out any idle gap), runs its full burst
//! in a single slice, and advances the clock to its finish.
//!
//! # Complexity
//! O(n) over n processes.

use log::debug;

use crate::models::{Policy, ProcessSpec, Schedule};
use crate::policy::{collect, work_items};

/// Runs FCFS over the workload.
pub fn run(specs: &[ProcessSpec]) -> Schedule {
    let mut items = work_items(specs);
    let mut now = 0;
    for item in &mut items {
        let start = now.max(item.spec.arrival);
        let finish = start + item.spec.burst;
        item.timeline.record_run(start, item.spec.burst);
        item.remaining = 0;
        item.finish = Some(finish);
        now = finish;
    }
    let schedule = collect(Policy::Fcfs, items);
    debug!(
        "FCFS: {} processes, makespan {}",
        schedule.process_count(),
        schedule.makespan()
    );
    schedule
}

/// Whether arrivals are non-decreasing in input order.
///
/// FCFS assumes they are; it still terminates otherwise, but a
/// late-listed early arrival waits behind everything before it.
pub fn is_arrival_sorted(specs: &[ProcessSpec]) -> bool {
    specs.windows(2).all(|w| w[0].arrival <= w[1].arrival)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slice;

    #[test]
    fn test_back_to_back_trace() {
        let specs = ProcessSpec::from_pairs(&[(0, 5), (1, 3), (2, 1)]);
        let s = run(&specs);
        let finishes: Vec<_> = s.processes.iter().map(|p| p.finish).collect();
        assert_eq!(finishes, vec![5, 8, 9]);
        let waits: Vec<_> = s.processes.iter().map(|p| p.waiting()).collect();
        assert_eq!(waits, vec![0, 4, 6]);
    }

    #[test]
    fn test_single_slice_per_process() {
        let specs = ProcessSpec::from_pairs(&[(0, 4), (2, 2)]);
        let s = run(&specs);
        assert_eq!(s.processes[0].timeline.slices(), &[Slice::new(0, 4)]);
        assert_eq!(s.processes[1].timeline.slices(), &[Slice::new(4, 6)]);
    }

    #[test]
    fn test_idle_gap_before_late_arrival() {
        let specs = ProcessSpec::from_pairs(&[(0, 2), (5, 3)]);
        let s = run(&specs);
        // CPU idles over [2,5)
        assert_eq!(s.processes[1].timeline.slices(), &[Slice::new(5, 8)]);
        assert_eq!(s.processes[1].waiting(), 0);
        assert_eq!(s.makespan(), 8);
        assert_eq!(s.busy_time(), 5);
    }

    #[test]
    fn test_equal_arrivals_keep_input_order() {
        let specs = ProcessSpec::from_pairs(&[(0, 3), (0, 1)]);
        let s = run(&specs);
        assert_eq!(s.processes[0].first_dispatch(), Some(0));
        assert_eq!(s.processes[1].first_dispatch(), Some(3));
    }

    #[test]
    fn test_empty_workload() {
        let s = run(&[]);
        assert!(s.is_empty());
        assert_eq!(s.makespan(), 0);
    }

    #[test]
    fn test_arrival_sorted_check() {
        assert!(is_arrival_sorted(&ProcessSpec::from_pairs(&[
            (0, 1),
            (0, 1),
            (3, 1)
        ])));
        assert!(!is_arrival_sorted(&ProcessSpec::from_pairs(&[
            (2, 1),
            (0, 1)
        ])));
        assert!(is_arrival_sorted(&[]));
    }
}
