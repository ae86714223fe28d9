/*!
 * Non-Preemptive Dispatch
 * Shared loop behind shortest-job-first and priority scheduling
 */

use super::arrivals::{advance_idle, ArrivalQueue};
use super::entry::{ReadyEntry, Selection};
use super::traits::Simulator;
use super::types::SchedulingPolicy;
use crate::export::{Schedule, SimulationResult};
use crate::process::Process;
use std::collections::BinaryHeap;
use tracing::debug;

/// Non-preemptive simulator parameterized by its selection rule
///
/// At every decision point the available process with the smallest
/// (key, arrival time, id) is dispatched and runs to completion.
#[derive(Debug, Clone, Copy)]
pub struct NonPreemptiveSimulator {
    selection: Selection,
}

impl NonPreemptiveSimulator {
    pub const fn new(selection: Selection) -> Self {
        Self { selection }
    }

    pub const fn shortest_job_first() -> Self {
        Self::new(Selection::ShortestBurst)
    }

    pub const fn priority() -> Self {
        Self::new(Selection::LowestPriorityValue)
    }

    pub const fn selection(&self) -> Selection {
        self.selection
    }
}

impl Simulator for NonPreemptiveSimulator {
    fn policy(&self) -> SchedulingPolicy {
        self.selection.policy()
    }

    fn run(&self, processes: Vec<Process>) -> Schedule {
        let mut results = Vec::with_capacity(processes.len());
        let mut pending = ArrivalQueue::new(processes);
        let mut ready: BinaryHeap<ReadyEntry> = BinaryHeap::new();
        let mut clock = pending.next_arrival().unwrap_or(0);

        loop {
            for process in pending.release(clock) {
                ready.push(ReadyEntry::new(self.selection, process));
            }

            // Idle jump and selection are separate iterations so that every
            // process arriving at the new clock is considered together.
            let Some(entry) = ready.pop() else {
                if pending.is_empty() {
                    break;
                }
                let next = advance_idle(clock, pending.next_arrival());
                debug!(from = clock, to = next, "cpu idle");
                clock = next;
                continue;
            };

            let process = entry.process;
            let start_time = clock;
            let completion_time = start_time + process.burst_time;
            debug!(
                policy = %self.policy(),
                pid = process.pid,
                start_time,
                completion_time,
                "dispatch"
            );

            clock = completion_time;
            results.push(SimulationResult::new(process, start_time, completion_time));
        }

        Schedule::new(self.policy(), None, results, None)
    }
}
