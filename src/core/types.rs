/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulated time, in integer ticks
pub type Ticks = u64;

/// Priority level (1 is the most urgent, larger values are less urgent)
pub type Priority = u32;
