//! Schedule quality metrics (KPIs).
//!
//! Computes aggregate performance indicators from one policy's
//! completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest finish time |
//! | Avg Waiting | Mean(turnaround − burst) |
//! | Avg Turnaround | Mean(finish − arrival) |
//! | CPU Utilization | Busy time ÷ makespan |
//!
//! Utilization is the standard busy/makespan ratio; note the makespan
//! is the maximum finish across all processes, which under preemptive
//! policies need not belong to the last-listed process.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{Schedule, Tick};

/// Aggregate performance indicators for one policy run.
///
/// All averages are over the full process set; an empty schedule
/// reports zeros rather than dividing by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Latest finish time (ticks).
    pub makespan: Tick,
    /// Total ticks the CPU was busy.
    pub busy_time: Tick,
    /// Mean waiting time (ticks).
    pub avg_waiting: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround: f64,
    /// Fraction of the makespan the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let n = schedule.process_count();
        let (avg_waiting, avg_turnaround) = if n == 0 {
            (0.0, 0.0)
        } else {
            let total_waiting: Tick = schedule.processes.iter().map(|p| p.waiting()).sum();
            let total_turnaround: Tick = schedule.processes.iter().map(|p| p.turnaround()).sum();
            (
                total_waiting as f64 / n as f64,
                total_turnaround as f64 / n as f64,
            )
        };

        Self {
            makespan: schedule.makespan(),
            busy_time: schedule.busy_time(),
            avg_waiting,
            avg_turnaround,
            cpu_utilization: schedule.utilization(),
        }
    }
}
