/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation result type
pub type SimResult<T> = Result<T, SimulationError>;

/// Errors raised before (or at) simulation entry
///
/// A simulator that has been handed a validated process set and a valid
/// policy never fails; every variant here is detected up front.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Invalid process: {0}")]
    #[diagnostic(
        code(process::validation),
        help("Arrival time must be an integer >= 0 and burst time an integer > 0.")
    )]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(scheduler::configuration),
        help("Round-robin needs a positive time quantum. Valid policies: fcfs, sjf, priority, round_robin.")
    )]
    Configuration(String),

    #[error("No processes to simulate")]
    #[diagnostic(
        code(scheduler::empty_input),
        help("Add at least one process before running a simulation.")
    )]
    EmptyInput,

    #[error("Workload error: {0}")]
    #[diagnostic(
        code(config::workload),
        help("Workload files are JSON objects with a `processes` array.")
    )]
    Workload(String),
}

impl SimulationError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
