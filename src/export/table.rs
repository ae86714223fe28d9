/*!
 * Plain-Text Rendering
 * Result tables, Gantt line and metrics for terminal output
 */

use super::report::SimulationReport;
use super::types::TimelineBlock;
use std::fmt;

const HEADER: [&str; 8] = [
    "Process",
    "Arrival",
    "Burst",
    "Priority",
    "Completion",
    "Turnaround",
    "Waiting",
    "Response",
];

impl fmt::Display for SimulationReport {
    /// Result table, Gantt line and metrics block
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantum {
            Some(q) => writeln!(f, "Policy: {} (quantum {})", self.policy, q)?,
            None => writeln!(f, "Policy: {}", self.policy)?,
        }
        writeln!(f)?;

        write_row(f, &HEADER.map(String::from))?;
        for r in &self.results {
            let cells = [
                format!("P{}", r.pid()),
                r.process.arrival_time.to_string(),
                r.process.burst_time.to_string(),
                r.process.priority.to_string(),
                r.completion_time.to_string(),
                r.turnaround_time.to_string(),
                r.waiting_time.to_string(),
                r.response_time.to_string(),
            ];
            write_row(f, &cells)?;
        }

        writeln!(f)?;
        writeln!(f, "Gantt: {}", Gantt(&self.gantt))?;
        writeln!(f)?;
        writeln!(f, "{}", self.metrics)
    }
}

/// Gantt line, `| P1 0-2 | P2 2-4 |`
#[derive(Debug, Clone, Copy)]
pub struct Gantt<'a>(pub &'a [TimelineBlock]);

impl fmt::Display for Gantt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("|")?;
        for block in self.0 {
            write!(f, " P{} {}-{} |", block.pid, block.start_time, block.end_time)?;
        }
        Ok(())
    }
}

/// Metrics of several reports side by side
#[derive(Debug, Clone, Copy)]
pub struct Comparison<'a>(pub &'a [SimulationReport]);

impl fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {:>10} {:>12} {:>10} {:>8} {:>11}",
            "Policy", "Avg wait", "Avg turnar.", "Avg resp.", "CPU %", "Throughput"
        )?;
        for report in self.0 {
            let m = &report.metrics;
            writeln!(
                f,
                "{:<12} {:>10.2} {:>12.2} {:>10.2} {:>8.2} {:>11.2}",
                report.policy.as_str(),
                m.avg_waiting,
                m.avg_turnaround,
                m.avg_response,
                m.cpu_utilization,
                m.throughput
            )?;
        }
        Ok(())
    }
}

/// Fixed-width cells; the last one is left unpadded
fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String; 8]) -> fmt::Result {
    let (last, rest) = cells.split_last().ok_or(fmt::Error)?;
    for cell in rest {
        write!(f, "{:<11}", cell)?;
    }
    writeln!(f, "{}", last)
}
