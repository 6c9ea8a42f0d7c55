//! Scheduling policies.
//!
//! Each policy takes a borrowed workload (`&[ProcessSpec]`), builds its
//! own owned working state, and returns a [`Schedule`]. The input is
//! never mutated, so the same workload can be run through all three
//! policies and the results compared.
//!
//! # Policies
//!
//! | Policy | Preemption | Decision rule |
//! |--------|-----------|---------------|
//! | [`fcfs`] | None | Input order (arrival order by convention) |
//! | [`srt`] | Every tick | Smallest remaining time |
//! | [`rr`] | Quantum expiry | FIFO rotation |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

pub mod fcfs;
pub mod rr;
pub mod srt;

use crate::models::{Policy, ProcessResult, ProcessSpec, Schedule, Tick, Timeline};

/// Mutable per-process simulation state owned by one policy run.
#[derive(Debug, Clone)]
pub(crate) struct WorkItem {
    pub spec: ProcessSpec,
    /// Ticks of burst still to execute; counts down from `spec.burst`.
    pub remaining: Tick,
    pub timeline: Timeline,
    /// Set exactly once, when `remaining` reaches zero.
    pub finish: Option<Tick>,
}

impl WorkItem {
    fn new(spec: ProcessSpec) -> Self {
        Self {
            spec,
            remaining: spec.burst,
            timeline: Timeline::new(),
            finish: None,
        }
    }
}

/// Builds owned working state for a policy run.
pub(crate) fn work_items(specs: &[ProcessSpec]) -> Vec<WorkItem> {
    specs.iter().copied().map(WorkItem::new).collect()
}

/// Collects finished work items into a schedule, preserving input order.
///
/// Every policy drains its workload to completion before collecting, so
/// an unset finish cannot occur for well-formed input; it is mapped to
/// zero rather than panicking.
pub(crate) fn collect(policy: Policy, items: Vec<WorkItem>) -> Schedule {
    let processes = items
        .into_iter()
        .map(|item| ProcessResult {
            spec: item.spec,
            finish: item.finish.unwrap_or(0),
            timeline: item.timeline,
        })
        .collect();
    Schedule::new(policy, processes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_items_initial_state() {
        let specs = ProcessSpec::from_pairs(&[(0, 5), (3, 2)]);
        let items = work_items(&specs);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].remaining, 5);
        assert_eq!(items[1].remaining, 2);
        assert!(items[0].finish.is_none());
        assert!(items[0].timeline.slices().is_empty());
    }

    #[test]
    fn test_collect_preserves_input_order() {
        let specs = ProcessSpec::from_pairs(&[(0, 1), (0, 1), (0, 1)]);
        let mut items = work_items(&specs);
        // finish in reverse order
        for (i, item) in items.iter_mut().enumerate() {
            item.finish = Some(10 - i as Tick);
        }
        let schedule = collect(Policy::Fcfs, items);
        let ids: Vec<u32> = schedule.processes.iter().map(|p| p.spec.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
