/*!
 * Simulator Traits
 * Interface shared by every policy simulator
 */

use super::types::SchedulingPolicy;
use crate::export::Schedule;
use crate::process::Process;

/// A scheduling policy that can be run to completion
///
/// Implementations receive working copies they own outright and must not
/// fail: every input check happens before `run` is called.
pub trait Simulator {
    /// Policy this simulator implements
    fn policy(&self) -> SchedulingPolicy;

    /// Simulate the given (non-empty, validated) process set
    fn run(&self, processes: Vec<Process>) -> Schedule;
}
