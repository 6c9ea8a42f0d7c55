//! Shortest-remaining-time scheduling (preemptive SJF).
//!
//! Unit-stepped simulation: every tick the candidate set (arrived,
//! unfinished) is re-evaluated and the process with the smallest
//! remaining time runs for one tick.
//!
//! # Tie-breaking
//! The previous tick's runner is the incumbent and is displaced only by
//! a strictly smaller remaining time, so a tie never preempts the
//! running process. When the CPU was idle or the runner just finished,
//! the scan starts with no incumbent and the first process in input
//! order among the minima wins. Both rules are deliberate and tested.
//!
//! # Complexity
//! O(T · n) where T is the makespan in ticks and n the process count.

use log::debug;

use crate::models::{Policy, ProcessSpec, Schedule, Tick};
use crate::policy::{collect, work_items, WorkItem};

/// Runs preemptive shortest-remaining-time over the workload.
pub fn run(specs: &[ProcessSpec]) -> Schedule {
    let mut items = work_items(specs);
    let mut now: Tick = 0;
    let mut completed = 0;
    // Index of the process that ran the previous tick, if unfinished.
    let mut running: Option<usize> = None;

    while completed < items.len() {
        match select(&items, running, now) {
            Some(i) => {
                items[i].timeline.record_unit(now);
                items[i].remaining -= 1;
                if items[i].remaining == 0 {
                    items[i].finish = Some(now + 1);
                    completed += 1;
                    running = None;
                } else {
                    running = Some(i);
                }
            }
            None => {
                // idle tick: nothing has arrived yet
                running = None;
            }
        }
        now += 1;
    }
    let schedule = collect(Policy::Srt, items);
    debug!(
        "SRT: {} processes, makespan {} ticks simulated",
        schedule.process_count(),
        schedule.makespan()
    );
    schedule
}

/// Picks the process to run at `now`.
///
/// The incumbent (if any) seeds the scan; every arrived, unfinished
/// process is compared in input order and replaces the favourite only
/// with strictly smaller remaining time.
fn select(items: &[WorkItem], incumbent: Option<usize>, now: Tick) -> Option<usize> {
    let mut best = incumbent.filter(|&i| items[i].remaining > 0);
    for (i, item) in items.iter().enumerate() {
        if item.spec.arrival > now || item.remaining == 0 {
            continue;
        }
        let undercuts = match best {
            Some(b) => item.remaining < items[b].remaining,
            None => true,
        };
        if undercuts {
            best = Some(i);
        }
    }
    best
}
