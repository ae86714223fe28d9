/*!
 * Workload Files
 * JSON process lists with optional policy and quantum
 */

use super::settings::PolicyChoice;
use crate::core::errors::{SimResult, SimulationError};
use crate::core::types::{Pid, Ticks};
use crate::process::{parse_priority, parse_time_field, Process, ProcessTable};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A numeric field given either as a JSON integer or as raw text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Text(String),
}

impl RawValue {
    fn as_time(&self, field: &str) -> SimResult<i64> {
        match self {
            Self::Int(v) => Ok(*v),
            Self::Text(s) => parse_time_field(field, s),
        }
    }

    fn as_priority(&self) -> i64 {
        match self {
            Self::Int(v) => *v,
            Self::Text(s) => i64::from(parse_priority(Some(s))),
        }
    }
}

/// One process entry in a workload file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Pid>,
    pub arrival_time: RawValue,
    pub burst_time: RawValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<RawValue>,
}

/// Contents of a workload file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Workload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicyChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Ticks>,
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    pub fn from_json(json: &str) -> SimResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SimulationError::Workload(format!("invalid workload JSON: {}", e)))
    }

    pub fn load(path: &Path) -> SimResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            SimulationError::Workload(format!("cannot read {}: {}", path.display(), e))
        })?;
        let workload = Self::from_json(&json)?;
        debug!(path = %path.display(), processes = workload.processes.len(), "workload loaded");
        Ok(workload)
    }

    /// Validate every entry and build the process table, in file order
    ///
    /// Entries without an id get one from the table's sequence.
    pub fn to_table(&self) -> SimResult<ProcessTable> {
        let mut table = ProcessTable::new();
        for spec in &self.processes {
            let arrival = spec.arrival_time.as_time("arrival time")?;
            let burst = spec.burst_time.as_time("burst time")?;
            let priority = spec.priority.as_ref().map(RawValue::as_priority);

            match spec.id {
                Some(pid) => {
                    table.insert(Process::new(pid, arrival, burst, priority)?)?;
                }
                None => {
                    table.add(arrival, burst, priority)?;
                }
            }
        }
        Ok(table)
    }
}
