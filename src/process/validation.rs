/*!
 * Process Input Validation
 * Parsing and range checks for raw process fields
 */

use crate::core::errors::{SimResult, SimulationError};
use crate::core::limits::{DEFAULT_PRIORITY, FIRST_PID, MIN_PRIORITY};
use crate::core::types::{Priority, Ticks};
use std::collections::HashSet;

use super::types::Process;

/// Parse a raw integer field (arrival or burst time)
pub fn parse_time_field(field: &str, raw: &str) -> SimResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        SimulationError::validation(format!("{} '{}' is not a valid integer", field, raw))
    })
}

/// Parse a raw priority; anything non-numeric falls back to the default
pub fn parse_priority(raw: Option<&str>) -> Priority {
    normalize_priority(raw.and_then(|s| s.trim().parse::<i64>().ok()))
}

/// Clamp a priority into range; values below the minimum become the default
#[inline]
pub fn normalize_priority(priority: Option<i64>) -> Priority {
    match priority {
        Some(p) if p >= i64::from(MIN_PRIORITY) => {
            Priority::try_from(p).unwrap_or(Priority::MAX)
        }
        _ => DEFAULT_PRIORITY,
    }
}

/// Check arrival >= 0 and burst > 0
pub fn validate_times(arrival_time: i64, burst_time: i64) -> SimResult<(Ticks, Ticks)> {
    if burst_time <= 0 {
        return Err(SimulationError::validation(format!(
            "burst time must be positive, got {}",
            burst_time
        )));
    }
    if arrival_time < 0 {
        return Err(SimulationError::validation(format!(
            "arrival time must not be negative, got {}",
            arrival_time
        )));
    }
    Ok((arrival_time as Ticks, burst_time as Ticks))
}

/// Validate a whole process set at simulation entry
///
/// Every clock value a policy can reach is bounded by the latest arrival
/// plus the total burst, so that bound must fit in `Ticks`.
pub fn validate_process_set(processes: &[Process]) -> SimResult<()> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyInput);
    }

    let mut seen = HashSet::with_capacity(processes.len());
    let mut latest_arrival: Ticks = 0;
    let mut total_burst: Ticks = 0;
    for process in processes {
        if process.pid < FIRST_PID {
            return Err(SimulationError::validation(format!(
                "process id must be at least {}, got {}",
                FIRST_PID, process.pid
            )));
        }
        if process.burst_time == 0 {
            return Err(SimulationError::validation(format!(
                "process {} has a zero burst time",
                process.pid
            )));
        }
        if !seen.insert(process.pid) {
            return Err(SimulationError::validation(format!(
                "duplicate process id {}",
                process.pid
            )));
        }
        latest_arrival = latest_arrival.max(process.arrival_time);
        total_burst = total_burst
            .checked_add(process.burst_time)
            .ok_or_else(horizon_overflow)?;
    }

    latest_arrival
        .checked_add(total_burst)
        .map(|_| ())
        .ok_or_else(horizon_overflow)
}

fn horizon_overflow() -> SimulationError {
    SimulationError::validation("latest arrival plus total burst time exceeds the clock range")
}
