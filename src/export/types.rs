/*!
 * Result Types
 * Per-process outcomes and timeline slices emitted by the simulators
 */

use crate::core::types::{Pid, Ticks};
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// Outcome of one process in one simulation run
///
/// Carries a snapshot of the process fields, never a reference to the
/// caller's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationResult {
    #[serde(flatten)]
    pub process: Process,
    pub start_time: Ticks,
    pub completion_time: Ticks,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
    pub response_time: Ticks,
}

impl SimulationResult {
    /// Derive the timing fields from the first dispatch and completion times
    pub fn new(process: Process, start_time: Ticks, completion_time: Ticks) -> Self {
        debug_assert!(start_time >= process.arrival_time);
        debug_assert!(completion_time > start_time);

        let turnaround_time = completion_time - process.arrival_time;
        debug_assert!(turnaround_time >= process.burst_time);
        let waiting_time = turnaround_time - process.burst_time;
        let response_time = start_time - process.arrival_time;

        Self {
            process,
            start_time,
            completion_time,
            turnaround_time,
            waiting_time,
            response_time,
        }
    }

    #[inline(always)]
    pub const fn pid(&self) -> Pid {
        self.process.pid
    }
}

/// One contiguous slice of CPU time given to a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimelineBlock {
    pub pid: Pid,
    pub start_time: Ticks,
    pub end_time: Ticks,
}

impl TimelineBlock {
    pub fn new(pid: Pid, start_time: Ticks, end_time: Ticks) -> Self {
        debug_assert!(end_time > start_time, "empty timeline block for {}", pid);
        Self {
            pid,
            start_time,
            end_time,
        }
    }

    #[inline(always)]
    pub const fn duration(&self) -> Ticks {
        self.end_time - self.start_time
    }
}
