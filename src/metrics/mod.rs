/*!
 * Metrics Aggregator
 * Summary statistics over a completed result set
 */

use crate::core::errors::{SimResult, SimulationError};
use crate::core::limits::METRIC_PRECISION;
use crate::export::SimulationResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate performance of one simulation run
///
/// Values are kept unrounded; use [`Metrics::rounded`] or `Display` for
/// presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Metrics {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
    /// Percentage of the makespan during which some process ran
    pub cpu_utilization: f64,
    /// Completed processes per tick
    pub throughput: f64,
}

impl Metrics {
    /// Aggregate a non-empty result set
    pub fn from_results(results: &[SimulationResult]) -> SimResult<Self> {
        if results.is_empty() {
            return Err(SimulationError::EmptyInput);
        }

        let count = results.len() as f64;
        // Per-result times are summed as f64 so large sets cannot overflow
        let total = |f: fn(&SimulationResult) -> u64| {
            results.iter().map(|r| f(r) as f64).sum::<f64>()
        };
        let mean = |f: fn(&SimulationResult) -> u64| total(f) / count;

        let total_burst = total(|r| r.process.burst_time);
        let makespan = results
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0) as f64;

        Ok(Self {
            avg_waiting: mean(|r| r.waiting_time),
            avg_turnaround: mean(|r| r.turnaround_time),
            avg_response: mean(|r| r.response_time),
            cpu_utilization: 100.0 * total_burst / makespan,
            throughput: count / makespan,
        })
    }

    /// Copy with every value rounded for display
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            avg_waiting: round_to(self.avg_waiting, METRIC_PRECISION),
            avg_turnaround: round_to(self.avg_turnaround, METRIC_PRECISION),
            avg_response: round_to(self.avg_response, METRIC_PRECISION),
            cpu_utilization: round_to(self.cpu_utilization, METRIC_PRECISION),
            throughput: round_to(self.throughput, METRIC_PRECISION),
        }
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average waiting time:    {:.2}", self.avg_waiting)?;
        writeln!(f, "Average turnaround time: {:.2}", self.avg_turnaround)?;
        writeln!(f, "Average response time:   {:.2}", self.avg_response)?;
        writeln!(f, "CPU utilization:         {:.2}%", self.cpu_utilization)?;
        write!(f, "Throughput:              {:.2} processes/unit", self.throughput)
    }
}

/// Round half away from zero to `digits` decimals
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}
