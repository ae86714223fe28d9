/*!
 * CPU Scheduling Simulator
 * Discrete-event simulation of FCFS, SJF, priority and round-robin scheduling
 */

pub mod cli;
pub mod config;
pub mod core;
pub mod export;
pub mod metrics;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{SimResult, SimulationError};
pub use crate::core::types::{Pid, Priority, Ticks};
pub use export::{Schedule, SimulationReport, SimulationResult, TimelineBlock};
pub use metrics::Metrics;
pub use monitoring::init_tracing;
pub use process::{PidSequence, Process, ProcessTable};
pub use scheduler::{compare, simulate, Algorithm, SchedulingPolicy, Simulator, TimeQuantum};
