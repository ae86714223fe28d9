/*!
 * Scheduler Types
 * Policy selector, time quantum and the resolved algorithm
 */

use crate::core::errors::{SimResult, SimulationError};
use crate::core::types::Ticks;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// First-come first-served, non-preemptive
    Fcfs,
    /// Shortest job first, non-preemptive
    Sjf,
    /// Lowest priority value first, non-preemptive
    Priority,
    /// Round-robin with a fixed time quantum
    RoundRobin,
}

impl SchedulingPolicy {
    /// Every policy, in the order reports list them
    pub const ALL: [SchedulingPolicy; 4] = [
        SchedulingPolicy::Fcfs,
        SchedulingPolicy::Sjf,
        SchedulingPolicy::Priority,
        SchedulingPolicy::RoundRobin,
    ];

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
            Self::RoundRobin => "round_robin",
        }
    }

    #[inline(always)]
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for SchedulingPolicy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" | "shortest" => Ok(Self::Sjf),
            "priority" | "prio" => Ok(Self::Priority),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(SimulationError::configuration(format!(
                "invalid policy '{}'. Valid: fcfs, sjf, priority, round_robin",
                s
            ))),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round-robin time slice, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    pub fn new(ticks: Ticks) -> SimResult<Self> {
        if ticks == 0 {
            return Err(SimulationError::configuration(
                "time quantum must be a positive integer",
            ));
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = Ticks::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// A policy together with everything it needs to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin(TimeQuantum),
}

impl Algorithm {
    /// Resolve a policy selector and an optional quantum
    ///
    /// The quantum is only consulted for round-robin, where it is required.
    pub fn new(policy: SchedulingPolicy, quantum: Option<Ticks>) -> SimResult<Self> {
        match policy {
            SchedulingPolicy::Fcfs => Ok(Self::Fcfs),
            SchedulingPolicy::Sjf => Ok(Self::Sjf),
            SchedulingPolicy::Priority => Ok(Self::Priority),
            SchedulingPolicy::RoundRobin => {
                let ticks = quantum.ok_or_else(|| {
                    SimulationError::configuration("round-robin requires a time quantum")
                })?;
                Ok(Self::RoundRobin(TimeQuantum::new(ticks)?))
            }
        }
    }

    pub const fn policy(&self) -> SchedulingPolicy {
        match self {
            Self::Fcfs => SchedulingPolicy::Fcfs,
            Self::Sjf => SchedulingPolicy::Sjf,
            Self::Priority => SchedulingPolicy::Priority,
            Self::RoundRobin(_) => SchedulingPolicy::RoundRobin,
        }
    }

    pub const fn quantum(&self) -> Option<TimeQuantum> {
        match self {
            Self::RoundRobin(q) => Some(*q),
            _ => None,
        }
    }
}
