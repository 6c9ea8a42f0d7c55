//! Schedule (policy run outcome) model.
//!
//! A schedule is the complete result of running one scheduling policy
//! over a workload: per-process finish times and execution timelines,
//! in input order.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::process::{ProcessSpec, Tick};
use crate::models::timeline::{Slice, Timeline};

/// Scheduling policy identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// First-come-first-served (non-preemptive, input order).
    Fcfs,
    /// Shortest-remaining-time (preemptive, unit-stepped).
    Srt,
    /// Round-robin (preemptive, fixed time slice).
    RoundRobin,
}

impl Policy {
    /// Human-readable policy name, as used in report headings.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Srt => "SRT (Preemptive SJF)",
            Policy::RoundRobin => "Round Robin",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One process after a policy run: its description plus the finish
/// time and execution timeline the policy produced.
///
/// Turnaround and waiting are derived from `finish` on access, so they
/// cannot disagree with their definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// The immutable input description.
    pub spec: ProcessSpec,
    /// Tick at which the remaining burst reached zero.
    pub finish: Tick,
    /// CPU slices the process occupied, in chronological order.
    pub timeline: Timeline,
}

impl ProcessResult {
    /// Turnaround time: finish − arrival (total time in system).
    #[inline]
    pub fn turnaround(&self) -> Tick {
        self.finish - self.spec.arrival
    }

    /// Waiting time: turnaround − burst (time ready but not running).
    #[inline]
    pub fn waiting(&self) -> Tick {
        self.turnaround() - self.spec.burst
    }

    /// Tick of first dispatch.
    pub fn first_dispatch(&self) -> Option<Tick> {
        self.timeline.first_start()
    }
}

/// Complete outcome of one policy run, processes in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Policy that produced this schedule.
    pub policy: Policy,
    /// Completed processes, same order as the input workload.
    pub processes: Vec<ProcessResult>,
}

impl Schedule {
    /// Creates a schedule from completed processes.
    pub fn new(policy: Policy, processes: Vec<ProcessResult>) -> Self {
        Self { policy, processes }
    }

    /// Whether the workload was empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Number of processes in the run.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Makespan: latest finish time across all processes.
    pub fn makespan(&self) -> Tick {
        self.processes.iter().map(|p| p.finish).max().unwrap_or(0)
    }

    /// Total ticks the CPU was busy (sum of all slice lengths).
    pub fn busy_time(&self) -> Tick {
        self.processes.iter().map(|p| p.timeline.total_run()).sum()
    }

    /// CPU utilization: busy time ÷ makespan.
    ///
    /// Returns zero for an empty schedule (zero makespan).
    pub fn utilization(&self) -> f64 {
        let makespan = self.makespan();
        if makespan == 0 {
            return 0.0;
        }
        self.busy_time() as f64 / makespan as f64
    }

    /// All slices of the run in chronological order, labelled with the
    /// owning process id.
    pub fn chronological_slices(&self) -> Vec<(Slice, u32)> {
        let mut runs: Vec<(Slice, u32)> = self
            .processes
            .iter()
            .flat_map(|p| p.timeline.slices().iter().map(move |&s| (s, p.spec.id)))
            .collect();
        runs.sort_by_key(|(s, _)| s.start);
        runs
    }

    /// Finds the result for a given process id.
    pub fn result_for(&self, id: u32) -> Option<&ProcessResult> {
        self.processes.iter().find(|p| p.spec.id == id)
    }
}
