/*!
 * Simulation Report
 * Serializable bundle of a schedule and its metrics
 */

use super::schedule::Schedule;
use super::types::{SimulationResult, TimelineBlock};
use crate::core::errors::{SimResult, SimulationError};
use crate::core::types::Ticks;
use crate::metrics::Metrics;
use crate::scheduler::SchedulingPolicy;
use serde::{Deserialize, Serialize};

/// Everything a rendering consumer needs for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    pub policy: SchedulingPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Ticks>,
    pub results: Vec<SimulationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineBlock>>,
    pub gantt: Vec<TimelineBlock>,
    pub metrics: Metrics,
}

impl SimulationReport {
    pub fn from_schedule(schedule: Schedule) -> SimResult<Self> {
        let metrics = Metrics::from_results(&schedule.results)?;
        let gantt = schedule.gantt();
        Ok(Self {
            policy: schedule.policy,
            quantum: schedule.quantum,
            results: schedule.results,
            timeline: schedule.timeline,
            gantt,
            metrics,
        })
    }

    pub fn to_json(&self) -> SimResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SimulationError::Workload(format!("failed to encode report: {}", e)))
    }
}

/// Encode several reports as one JSON array
pub fn reports_to_json(reports: &[SimulationReport]) -> SimResult<String> {
    serde_json::to_string_pretty(reports)
        .map_err(|e| SimulationError::Workload(format!("failed to encode reports: {}", e)))
}
