/*!
 * Round-Robin
 * Preemptive dispatch with a fixed time quantum
 */

use super::arrivals::{advance_idle, earliest_arrival};
use super::traits::Simulator;
use super::types::{SchedulingPolicy, TimeQuantum};
use crate::core::types::{Pid, Ticks};
use crate::export::{Schedule, SimulationResult, TimelineBlock};
use crate::process::Process;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Round-robin simulator
///
/// The queue holds every process from the start, in submission order. A
/// process that has not arrived yet is skipped, never moved. The process that
/// actually ran is the one sent to the back of the queue when preempted.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinSimulator {
    quantum: TimeQuantum,
}

impl RoundRobinSimulator {
    pub const fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }

    pub const fn quantum(&self) -> TimeQuantum {
        self.quantum
    }
}

impl Simulator for RoundRobinSimulator {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::RoundRobin
    }

    fn run(&self, processes: Vec<Process>) -> Schedule {
        let mut results = Vec::with_capacity(processes.len());
        let mut timeline = Vec::new();
        let mut first_dispatch: HashMap<Pid, Ticks> = HashMap::with_capacity(processes.len());
        let mut queue: VecDeque<Process> = processes.into();
        let mut clock = earliest_arrival(&queue).unwrap_or(0);

        while !queue.is_empty() {
            let Some(mut process) = queue
                .iter()
                .position(|p| p.has_arrived(clock))
                .and_then(|pos| queue.remove(pos))
            else {
                let next = advance_idle(clock, earliest_arrival(&queue));
                debug!(from = clock, to = next, "cpu idle");
                clock = next;
                continue;
            };

            let slice = self.quantum.ticks().min(process.remaining_time);
            let block = TimelineBlock::new(process.pid, clock, clock + slice);
            debug!(pid = process.pid, start = block.start_time, end = block.end_time, "slice");
            first_dispatch.entry(process.pid).or_insert(block.start_time);
            timeline.push(block);

            process.remaining_time -= slice;
            clock += slice;

            if process.is_finished() {
                let start_time = first_dispatch.get(&process.pid).copied().unwrap_or(clock);
                debug!(pid = process.pid, completion_time = clock, "completed");
                results.push(SimulationResult::new(process, start_time, clock));
            } else {
                queue.push_back(process);
            }
        }

        Schedule::new(
            self.policy(),
            Some(self.quantum.ticks()),
            results,
            Some(timeline),
        )
    }
}
