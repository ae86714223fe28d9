/*!
 * Export Module
 * Output shapes handed to rendering consumers
 */

pub mod report;
pub mod schedule;
pub mod table;
pub mod types;

pub use report::{reports_to_json, SimulationReport};
pub use schedule::Schedule;
pub use table::{Comparison, Gantt};
pub use types::{SimulationResult, TimelineBlock};
