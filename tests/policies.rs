//! End-to-end policy behavior over shared workloads.
//!
//! Exercises the three schedulers against the same inputs and checks
//! the cross-policy guarantees: conservation of burst time, exclusive
//! CPU occupancy, arrival respected, and input-list isolation.

use std::num::NonZeroU64;

use schedsim::metrics::ScheduleKpi;
use schedsim::models::{ProcessSpec, Schedule};
use schedsim::policy;

fn quantum(n: u64) -> NonZeroU64 {
    NonZeroU64::new(n).unwrap()
}

fn all_policies(specs: &[ProcessSpec], q: NonZeroU64) -> Vec<Schedule> {
    vec![
        policy::fcfs::run(specs),
        policy::srt::run(specs),
        policy::rr::run(specs, q),
    ]
}

/// Asserts the invariants every policy must uphold on every workload.
fn assert_invariants(schedule: &Schedule, specs: &[ProcessSpec]) {
    let label = schedule.policy.name();

    for (p, spec) in schedule.processes.iter().zip(specs) {
        assert_eq!(p.spec, *spec, "{label}: spec altered or reordered");
        // conservation: executed ticks equal the burst
        assert_eq!(
            p.timeline.total_run(),
            spec.burst,
            "{label}: P{} ran a different total than its burst",
            spec.id
        );
        // arrival respected, finish consistent with the timeline
        assert!(p.first_dispatch().is_some(), "{label}: P{} never ran", spec.id);
        assert!(
            p.first_dispatch().unwrap_or(0) >= spec.arrival,
            "{label}: P{} dispatched before arrival",
            spec.id
        );
        assert_eq!(p.timeline.last_end(), Some(p.finish), "{label}: P{}", spec.id);
        assert!(
            p.finish >= spec.arrival + spec.burst,
            "{label}: P{} finished impossibly early",
            spec.id
        );
        // slices strictly increasing with gaps between them
        for w in p.timeline.slices().windows(2) {
            assert!(w[0].end < w[1].start, "{label}: P{} slices not separated", spec.id);
        }
    }

    // exclusive occupancy: chronological slices never overlap
    let runs = schedule.chronological_slices();
    for w in runs.windows(2) {
        assert!(
            w[0].0.end <= w[1].0.start,
            "{label}: slices {:?} and {:?} overlap",
            w[0],
            w[1]
        );
    }
}

#[test]
fn fcfs_finish_and_waiting_times() {
    let specs = ProcessSpec::from_pairs(&[(0, 5), (1, 3), (2, 1)]);
    let s = policy::fcfs::run(&specs);
    let finishes: Vec<_> = s.processes.iter().map(|p| p.finish).collect();
    assert_eq!(finishes, vec![5, 8, 9]);
    let waits: Vec<_> = s.processes.iter().map(|p| p.waiting()).collect();
    assert_eq!(waits, vec![0, 4, 6]);
    assert_invariants(&s, &specs);
}

#[test]
fn srt_preemption_workload() {
    let specs = ProcessSpec::from_pairs(&[(0, 8), (1, 4), (2, 2)]);
    let s = policy::srt::run(&specs);
    let finishes: Vec<_> = s.processes.iter().map(|p| p.finish).collect();
    assert_eq!(finishes, vec![14, 7, 4]);
    assert_invariants(&s, &specs);
}

#[test]
fn rr_rotation_workload() {
    let specs = ProcessSpec::from_pairs(&[(0, 5), (1, 3)]);
    let s = policy::rr::run(&specs, quantum(2));
    let finishes: Vec<_> = s.processes.iter().map(|p| p.finish).collect();
    assert_eq!(finishes, vec![8, 7]);
    assert_invariants(&s, &specs);
}

#[test]
fn invariants_hold_across_policies_on_gappy_workload() {
    // late arrivals, idle gaps, and ties all at once
    let specs = ProcessSpec::from_pairs(&[(0, 3), (0, 3), (7, 2), (7, 5), (20, 1)]);
    for s in all_policies(&specs, quantum(2)) {
        assert_invariants(&s, &specs);
        assert!(s.makespan() >= 21);
        assert_eq!(s.busy_time(), 14);
    }
}

#[test]
fn input_list_is_never_mutated() {
    let specs = ProcessSpec::from_pairs(&[(0, 4), (2, 6), (3, 1)]);
    let original = specs.clone();
    let _ = all_policies(&specs, quantum(3));
    assert_eq!(specs, original);
}

#[test]
fn same_workload_same_schedule() {
    let specs = ProcessSpec::from_pairs(&[(0, 4), (1, 2), (1, 2), (6, 3)]);
    let first = all_policies(&specs, quantum(2));
    let second = all_policies(&specs, quantum(2));
    assert_eq!(first, second);
}

#[test]
fn zero_process_workload_yields_empty_results() {
    for s in all_policies(&[], quantum(2)) {
        assert!(s.is_empty());
        assert_eq!(s.makespan(), 0);
        let kpi = ScheduleKpi::calculate(&s);
        assert!((kpi.avg_waiting - 0.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround - 0.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
    }
}

#[test]
fn single_process_is_identical_under_every_policy() {
    let specs = ProcessSpec::from_pairs(&[(3, 7)]);
    for s in all_policies(&specs, quantum(2)) {
        assert_eq!(s.processes[0].finish, 10);
        assert_eq!(s.processes[0].waiting(), 0);
        assert_eq!(s.processes[0].turnaround(), 7);
        assert_invariants(&s, &specs);
    }
}

#[test]
fn preemptive_policies_beat_or_match_fcfs_on_avg_waiting_here() {
    // short jobs stuck behind a long one: SRT must not be worse
    let specs = ProcessSpec::from_pairs(&[(0, 10), (1, 1), (2, 1)]);
    let fcfs = ScheduleKpi::calculate(&policy::fcfs::run(&specs));
    let srt = ScheduleKpi::calculate(&policy::srt::run(&specs));
    assert!(srt.avg_waiting <= fcfs.avg_waiting);
}
