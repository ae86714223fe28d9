/*!
 * Arrival Tracking
 * Not-yet-arrived processes and idle-time advancement
 */

use crate::core::types::{Pid, Ticks};
use crate::process::Process;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Pending process ordered by earliest arrival, then lowest id
#[derive(Debug)]
struct Pending(Process);

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

impl Pending {
    fn key(&self) -> (Ticks, Pid) {
        (self.0.arrival_time, self.0.pid)
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; flip so the earliest arrival pops first
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of processes that have not been released to a ready queue yet
#[derive(Debug, Default)]
pub(super) struct ArrivalQueue {
    pending: BinaryHeap<Pending>,
}

impl ArrivalQueue {
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            pending: processes.into_iter().map(Pending).collect(),
        }
    }

    /// Earliest arrival still pending
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.pending.peek().map(|p| p.0.arrival_time)
    }

    /// Pop every process with `arrival_time <= clock`, earliest first
    pub fn release(&mut self, clock: Ticks) -> Vec<Process> {
        let mut released = Vec::new();
        while self
            .pending
            .peek()
            .is_some_and(|p| p.0.has_arrived(clock))
        {
            if let Some(Pending(process)) = self.pending.pop() {
                released.push(process);
            }
        }
        released
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Earliest arrival among a set of processes
pub(super) fn earliest_arrival<'a>(processes: impl IntoIterator<Item = &'a Process>) -> Option<Ticks> {
    processes.into_iter().map(|p| p.arrival_time).min()
}

/// Idle-time advancement: move the clock forward to the next arrival
///
/// The clock never moves backwards; when nothing else is pending it stays put.
#[inline]
pub(super) fn advance_idle(clock: Ticks, next_arrival: Option<Ticks>) -> Ticks {
    next_arrival.map_or(clock, |next| clock.max(next))
}
