//! Process model.
//!
//! A process is described by its arrival time and CPU burst; everything
//! else (finish time, waiting, turnaround, execution slices) is produced
//! by a scheduling policy run.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//! The simulation is discrete and offline: the full process set is known
//! before any policy runs.

use serde::{Deserialize, Serialize};

/// Discrete simulation time unit.
pub type Tick = u64;

/// Static description of a process submitted to the simulator.
///
/// IDs are positive and assigned 1-based in input order; that order is
/// also the scan order policies use when breaking ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Stable identity, 1-based, in input order.
    pub id: u32,
    /// Tick at which the process becomes eligible to run.
    pub arrival: Tick,
    /// Total CPU time required.
    pub burst: Tick,
}

impl ProcessSpec {
    /// Creates a process description.
    pub fn new(id: u32, arrival: Tick, burst: Tick) -> Self {
        Self { id, arrival, burst }
    }

    /// Builds a workload from `(arrival, burst)` pairs, assigning IDs
    /// 1-based in pair order.
    pub fn from_pairs(pairs: &[(Tick, Tick)]) -> Vec<Self> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(arrival, burst))| Self::new(i as u32 + 1, arrival, burst))
            .collect()
    }
}
