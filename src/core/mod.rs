/*!
 * Core Module
 * Shared types, limits and errors
 */

pub mod errors;
pub mod limits;
pub mod types;

pub use errors::{SimResult, SimulationError};
pub use limits::*;
pub use types::{Pid, Priority, Ticks};
