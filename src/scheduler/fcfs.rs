/*!
 * First-Come First-Served
 * Non-preemptive dispatch in arrival order
 */

use super::arrivals::advance_idle;
use super::traits::Simulator;
use super::types::SchedulingPolicy;
use crate::export::{Schedule, SimulationResult};
use crate::process::Process;
use tracing::debug;

/// FCFS simulator
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsSimulator;

impl Simulator for FcfsSimulator {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Fcfs
    }

    fn run(&self, mut processes: Vec<Process>) -> Schedule {
        // Stable: equal arrivals keep their submission order
        processes.sort_by_key(|p| p.arrival_time);

        let mut clock = processes.first().map_or(0, |p| p.arrival_time);
        let mut results = Vec::with_capacity(processes.len());

        for process in processes {
            let start_time = advance_idle(clock, Some(process.arrival_time));
            let completion_time = start_time + process.burst_time;
            debug!(pid = process.pid, start_time, completion_time, "fcfs dispatch");

            clock = completion_time;
            results.push(SimulationResult::new(process, start_time, completion_time));
        }

        Schedule::new(self.policy(), None, results, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_textbook_case() {
        let processes = vec![
            Process::new(1, 0, 5, None).unwrap(),
            Process::new(2, 1, 3, None).unwrap(),
            Process::new(3, 2, 8, None).unwrap(),
        ];
        let schedule = FcfsSimulator.run(processes);

        let order: Vec<_> = schedule.results.iter().map(|r| r.process.pid).collect();
        let completions: Vec<_> = schedule.results.iter().map(|r| r.completion_time).collect();
        let waits: Vec<_> = schedule.results.iter().map(|r| r.waiting_time).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(completions, vec![5, 8, 16]);
        assert_eq!(waits, vec![0, 4, 6]);
    }

    #[test]
    fn test_fcfs_idle_gap_and_stable_ties() {
        let processes = vec![
            Process::new(1, 10, 2, None).unwrap(),
            Process::new(2, 3, 1, None).unwrap(),
            Process::new(3, 3, 4, None).unwrap(),
        ];
        let schedule = FcfsSimulator.run(processes);

        let order: Vec<_> = schedule.results.iter().map(|r| r.process.pid).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(schedule.results[0].start_time, 3);
        assert_eq!(schedule.results[1].completion_time, 8);
        // CPU idles from 8 to 10
        assert_eq!(schedule.results[2].start_time, 10);
        assert_eq!(schedule.results[2].response_time, 0);
    }
}
