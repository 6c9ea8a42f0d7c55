//! Deterministic CPU scheduling simulator.
//!
//! Simulates three classic uniprocessor scheduling policies — FCFS,
//! preemptive shortest-remaining-time, and round-robin — over a fixed
//! workload of processes described by arrival and burst time. Each
//! policy produces per-process finish/waiting/turnaround times and an
//! execution timeline suitable for Gantt rendering.
//!
//! The simulation is discrete, offline, and single-threaded: integer
//! ticks, the whole process set known up front, and every policy run
//! independent of the others (each builds its own owned state from the
//! borrowed workload).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `Timeline`, `Slice`,
//!   `ProcessResult`, `Schedule`, `Policy`
//! - **`policy`**: The three schedulers (`fcfs`, `srt`, `rr`)
//! - **`metrics`**: Aggregate KPIs (averages, utilization)
//! - **`report`**: Results tables and Gantt charts
//! - **`input`**: Workload file/text parsing
//! - **`validation`**: Structural workload checks
//! - **`gen`**: Seeded random workload generation
//!
//! # Example
//!
//! ```
//! use schedsim::models::ProcessSpec;
//! use schedsim::policy;
//!
//! let workload = ProcessSpec::from_pairs(&[(0, 5), (1, 3), (2, 1)]);
//! let schedule = policy::fcfs::run(&workload);
//! assert_eq!(schedule.makespan(), 9);
//! assert_eq!(schedule.processes[1].waiting(), 4);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod gen;
pub mod input;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod report;
pub mod validation;
