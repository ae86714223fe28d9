/*!
 * Run Settings
 * Environment configuration and resolution of the effective run plan
 */

use crate::core::errors::{SimResult, SimulationError};
use crate::core::types::Ticks;
use crate::scheduler::{Algorithm, SchedulingPolicy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const ENV_POLICY: &str = "SCHED_POLICY";
pub const ENV_QUANTUM: &str = "SCHED_QUANTUM";
pub const ENV_OUTPUT: &str = "SCHED_OUTPUT";
pub const ENV_TRACE_JSON: &str = "SCHED_TRACE_JSON";

/// Which policies to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyChoice {
    Single(SchedulingPolicy),
    /// Every policy, for side-by-side comparison
    All,
}

impl FromStr for PolicyChoice {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "compare" => Ok(Self::All),
            other => other.parse().map(Self::Single),
        }
    }
}

impl fmt::Display for PolicyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(policy) => fmt::Display::fmt(policy, f),
            Self::All => f.write_str("all"),
        }
    }
}

impl Serialize for PolicyChoice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PolicyChoice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(SimulationError::configuration(format!(
                "invalid output format '{}'. Valid: table, json",
                s
            ))),
        }
    }
}

/// Parse a time quantum from text; it must be a positive integer
pub fn parse_quantum(raw: &str) -> SimResult<Ticks> {
    match raw.trim().parse::<i64>() {
        Ok(q) if q > 0 => Ok(q as Ticks),
        Ok(q) => Err(SimulationError::configuration(format!(
            "time quantum must be positive, got {}",
            q
        ))),
        Err(_) => Err(SimulationError::configuration(format!(
            "time quantum '{}' is not a valid integer",
            raw
        ))),
    }
}

/// Settings read from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSettings {
    pub policy: Option<PolicyChoice>,
    pub quantum: Option<Ticks>,
    pub output: Option<OutputFormat>,
    pub trace_json: bool,
}

impl EnvSettings {
    /// Read `SCHED_POLICY`, `SCHED_QUANTUM`, `SCHED_OUTPUT` and `SCHED_TRACE_JSON`
    pub fn from_env() -> SimResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SimResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            policy: get(ENV_POLICY).map(|v| v.parse::<PolicyChoice>()).transpose()?,
            quantum: get(ENV_QUANTUM).map(|v| parse_quantum(&v)).transpose()?,
            output: get(ENV_OUTPUT).map(|v| v.parse::<OutputFormat>()).transpose()?,
            trace_json: get(ENV_TRACE_JSON)
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

/// Effective configuration for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    pub choice: PolicyChoice,
    pub quantum: Option<Ticks>,
    pub output: OutputFormat,
}

impl RunPlan {
    /// Merge sources; earlier arguments win over later ones
    pub fn resolve(
        policy: [Option<PolicyChoice>; 3],
        quantum: [Option<Ticks>; 3],
        output: [Option<OutputFormat>; 2],
    ) -> Self {
        Self {
            choice: first(policy).unwrap_or(PolicyChoice::Single(SchedulingPolicy::Fcfs)),
            quantum: first(quantum),
            output: first(output).unwrap_or_default(),
        }
    }

    /// Algorithms to run, in report order
    pub fn algorithms(&self) -> SimResult<Vec<Algorithm>> {
        match self.choice {
            PolicyChoice::Single(policy) => Ok(vec![Algorithm::new(policy, self.quantum)?]),
            PolicyChoice::All => SchedulingPolicy::ALL
                .iter()
                .map(|&policy| Algorithm::new(policy, self.quantum))
                .collect(),
        }
    }
}

fn first<T, const N: usize>(candidates: [Option<T>; N]) -> Option<T> {
    candidates.into_iter().flatten().next()
}
