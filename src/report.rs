//! Textual reporting: results tables and Gantt charts.
//!
//! Renderers return `String` so they can be unit-tested and routed by
//! the caller; the CLI driver prints them to stdout.
//!
//! The Gantt chart is chronological across the whole run: slices from
//! all processes are interleaved in wall-time order, idle gaps are
//! rendered explicitly, and the closing boundary label is the makespan.

use crate::metrics::ScheduleKpi;
use crate::models::{Schedule, Tick};

const RULE: &str = "------------------------------------------------------\n";

/// Width of one Gantt cell, label row and boundary row alike.
const CELL: usize = 8;

/// Renders the per-process results table with aggregate footer.
pub fn results_table(schedule: &Schedule) -> String {
    let kpi = ScheduleKpi::calculate(schedule);
    let mut out = String::new();
    out.push_str(&format!("\n{} Scheduling Results\n", schedule.policy));
    out.push_str(RULE);
    out.push_str(&format!(
        "{:<9}{:<9}{:<7}{:<8}{:<9}{}\n",
        "Process", "Arrival", "Burst", "Finish", "Waiting", "Turnaround"
    ));
    for p in &schedule.processes {
        out.push_str(&format!(
            "P{:<8}{:<9}{:<7}{:<8}{:<9}{}\n",
            p.spec.id,
            p.spec.arrival,
            p.spec.burst,
            p.finish,
            p.waiting(),
            p.turnaround()
        ));
    }
    out.push_str(&format!("\nAverage Waiting Time: {:.2}\n", kpi.avg_waiting));
    out.push_str(&format!(
        "Average Turnaround Time: {:.2}\n",
        kpi.avg_turnaround
    ));
    out.push_str(&format!(
        "CPU Utilization: {:.2}%\n",
        kpi.cpu_utilization * 100.0
    ));
    out
}

/// Renders the Gantt chart: a labelled bar row over a boundary row.
pub fn gantt_chart(schedule: &Schedule) -> String {
    let mut out = String::new();
    out.push_str("\nGantt Chart:\n");
    out.push_str(RULE);
    if schedule.is_empty() {
        out.push_str("(empty workload)\n");
        out.push_str(RULE);
        return out;
    }

    let mut bar = String::new();
    let mut boundaries = String::new();
    let mut cursor: Tick = 0;
    for (slice, id) in schedule.chronological_slices() {
        if slice.start > cursor {
            push_cell(&mut bar, &mut boundaries, "idle", cursor);
        }
        push_cell(&mut bar, &mut boundaries, &format!("P{id}"), slice.start);
        cursor = slice.end;
    }
    bar.push('|');
    boundaries.push_str(&schedule.makespan().to_string());

    out.push_str(&bar);
    out.push('\n');
    out.push_str(&boundaries);
    out.push('\n');
    out.push_str(RULE);
    out
}

fn push_cell(bar: &mut String, boundaries: &mut String, label: &str, start: Tick) {
    bar.push_str(&format!("| {:<w$}", label, w = CELL - 2));
    boundaries.push_str(&format!("{:<w$}", start, w = CELL));
}
