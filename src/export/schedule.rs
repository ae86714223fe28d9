/*!
 * Schedule
 * Complete output of one simulation run
 */

use super::types::{SimulationResult, TimelineBlock};
use crate::core::types::{Pid, Ticks};
use crate::scheduler::SchedulingPolicy;
use serde::{Deserialize, Serialize};

/// Results of one run, plus the slice timeline for preemptive policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Schedule {
    pub policy: SchedulingPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Ticks>,
    /// One entry per process, in dispatch (or completion) order
    pub results: Vec<SimulationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<TimelineBlock>>,
}

impl Schedule {
    pub fn new(
        policy: SchedulingPolicy,
        quantum: Option<Ticks>,
        results: Vec<SimulationResult>,
        timeline: Option<Vec<TimelineBlock>>,
    ) -> Self {
        Self {
            policy,
            quantum,
            results,
            timeline,
        }
    }

    /// Blocks for a Gantt chart
    ///
    /// Round-robin uses its slice timeline; the non-preemptive policies get
    /// one block per process spanning start to completion.
    pub fn gantt(&self) -> Vec<TimelineBlock> {
        match &self.timeline {
            Some(timeline) => timeline.clone(),
            None => self
                .results
                .iter()
                .map(|r| TimelineBlock::new(r.pid(), r.start_time, r.completion_time))
                .collect(),
        }
    }

    /// Latest completion time, zero for an empty schedule
    pub fn makespan(&self) -> Ticks {
        self.results
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0)
    }

    pub fn result(&self, pid: Pid) -> Option<&SimulationResult> {
        self.results.iter().find(|r| r.pid() == pid)
    }
}
