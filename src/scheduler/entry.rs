/*!
 * Ready Queue Entries
 * Ordering of available processes for the non-preemptive policies
 */

use crate::core::types::{Pid, Ticks};
use crate::process::Process;
use std::cmp::Ordering;

use super::types::SchedulingPolicy;

/// Selection rule for the shared non-preemptive loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Smallest burst time first (SJF)
    ShortestBurst,
    /// Smallest priority value first
    LowestPriorityValue,
}

impl Selection {
    /// Primary ordering key for a process
    #[inline(always)]
    pub fn key(&self, process: &Process) -> u64 {
        match self {
            Self::ShortestBurst => process.burst_time,
            Self::LowestPriorityValue => u64::from(process.priority),
        }
    }

    pub const fn policy(&self) -> SchedulingPolicy {
        match self {
            Self::ShortestBurst => SchedulingPolicy::Sjf,
            Self::LowestPriorityValue => SchedulingPolicy::Priority,
        }
    }
}

/// Available process keyed by (selection key, arrival, pid)
#[derive(Debug, Clone)]
pub(super) struct ReadyEntry {
    key: u64,
    pub process: Process,
}

impl ReadyEntry {
    pub fn new(selection: Selection, process: Process) -> Self {
        Self {
            key: selection.key(&process),
            process,
        }
    }

    fn rank(&self) -> (u64, Ticks, Pid) {
        (self.key, self.process.arrival_time, self.process.pid)
    }
}

impl PartialEq for ReadyEntry {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for ReadyEntry {}

impl Ord for ReadyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the smallest rank must compare greatest
        other.rank().cmp(&self.rank())
    }
}

impl PartialOrd for ReadyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
