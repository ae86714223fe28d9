/*!
 * Process Types
 * The simulated process record
 */

use super::validation::{normalize_priority, validate_times};
use crate::core::errors::SimResult;
use crate::core::types::{Pid, Priority, Ticks};
use serde::{Deserialize, Serialize};

/// A process submitted to the simulator
///
/// Everything except `remaining_time` is fixed once a simulation starts.
/// Simulators always work on their own copies, so the caller's set can be
/// re-run under another policy without contamination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: Priority,
    /// Execution still owed; only round-robin decrements it
    pub remaining_time: Ticks,
}

impl Process {
    /// Create a validated process
    ///
    /// Fails when `burst_time <= 0` or `arrival_time < 0`. A missing or
    /// sub-minimum priority is normalized to the default instead of failing.
    pub fn new(
        pid: Pid,
        arrival_time: i64,
        burst_time: i64,
        priority: Option<i64>,
    ) -> SimResult<Self> {
        let (arrival_time, burst_time) = validate_times(arrival_time, burst_time)?;
        Ok(Self {
            pid,
            arrival_time,
            burst_time,
            priority: normalize_priority(priority),
            remaining_time: burst_time,
        })
    }

    /// Whether the process is eligible to run at `clock`
    #[inline(always)]
    #[must_use]
    pub const fn has_arrived(&self, clock: Ticks) -> bool {
        self.arrival_time <= clock
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Fresh working copy with the remaining-time counter rewound
    #[must_use]
    pub(crate) fn fresh_copy(&self) -> Self {
        Self {
            remaining_time: self.burst_time,
            ..self.clone()
        }
    }
}
