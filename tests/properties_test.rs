/*!
 * Scheduling Property Tests
 * Invariants that must hold for every policy on arbitrary workloads
 */

use cpu_sched_sim::{simulate, Algorithm, Metrics, Process, Schedule, SchedulingPolicy, Ticks};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn workload() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0i64..30, 1i64..12, 1i64..6), 1..15).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                Process::new(i as u32 + 1, arrival, burst, Some(priority)).unwrap()
            })
            .collect()
    })
}

fn all_algorithms(quantum: Ticks) -> Vec<Algorithm> {
    SchedulingPolicy::ALL
        .iter()
        .map(|&p| Algorithm::new(p, Some(quantum)).unwrap())
        .collect()
}

fn assert_no_overlap(schedule: &Schedule) {
    let blocks = schedule.gantt();
    for pair in blocks.windows(2) {
        assert!(pair[0].end_time <= pair[1].start_time, "{:?} overlaps", pair);
    }
}

proptest! {
    #[test]
    fn timing_identities_hold(processes in workload(), quantum in 1u64..6) {
        for algorithm in all_algorithms(quantum) {
            let schedule = simulate(&processes, &algorithm).unwrap();
            prop_assert_eq!(schedule.results.len(), processes.len());

            let pids: HashSet<_> = schedule.results.iter().map(|r| r.process.pid).collect();
            prop_assert_eq!(pids.len(), processes.len());

            for r in &schedule.results {
                prop_assert_eq!(r.turnaround_time, r.completion_time - r.process.arrival_time);
                prop_assert_eq!(r.waiting_time, r.turnaround_time - r.process.burst_time);
                prop_assert_eq!(r.response_time, r.start_time - r.process.arrival_time);
                prop_assert!(r.start_time >= r.process.arrival_time);
                prop_assert!(r.turnaround_time >= r.process.burst_time);
            }
            assert_no_overlap(&schedule);
        }
    }

    #[test]
    fn fcfs_is_idempotent(processes in workload()) {
        let first = simulate(&processes, &Algorithm::Fcfs).unwrap();
        let second = simulate(&processes, &Algorithm::Fcfs).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn round_robin_conserves_burst(processes in workload(), quantum in 1u64..6) {
        let rr = Algorithm::new(SchedulingPolicy::RoundRobin, Some(quantum)).unwrap();
        let schedule = simulate(&processes, &rr).unwrap();
        let timeline = schedule.timeline.clone().unwrap();

        let mut executed: HashMap<u32, Ticks> = HashMap::new();
        let mut last_end: HashMap<u32, Ticks> = HashMap::new();
        for block in &timeline {
            prop_assert!(block.end_time > block.start_time);
            prop_assert!(block.duration() <= quantum);
            if let Some(&end) = last_end.get(&block.pid) {
                prop_assert!(block.start_time >= end);
            }
            last_end.insert(block.pid, block.end_time);
            *executed.entry(block.pid).or_default() += block.duration();
        }

        for p in &processes {
            prop_assert_eq!(executed.get(&p.pid).copied(), Some(p.burst_time));
            let first = timeline.iter().find(|b| b.pid == p.pid).unwrap();
            prop_assert_eq!(schedule.result(p.pid).unwrap().start_time, first.start_time);
        }
    }

    #[test]
    fn sjf_dispatches_minimum_available(processes in workload()) {
        let schedule = simulate(&processes, &Algorithm::Sjf).unwrap();
        let rank = |p: &Process| (p.burst_time, p.arrival_time, p.pid);

        for (i, chosen) in schedule.results.iter().enumerate() {
            for later in &schedule.results[i + 1..] {
                if later.process.arrival_time <= chosen.start_time {
                    prop_assert!(rank(&chosen.process) < rank(&later.process));
                }
            }
        }
    }

    #[test]
    fn priority_dispatches_most_urgent_available(processes in workload()) {
        let schedule = simulate(&processes, &Algorithm::Priority).unwrap();
        let rank = |p: &Process| (p.priority, p.arrival_time, p.pid);

        for (i, chosen) in schedule.results.iter().enumerate() {
            for later in &schedule.results[i + 1..] {
                if later.process.arrival_time <= chosen.start_time {
                    prop_assert!(rank(&chosen.process) < rank(&later.process));
                }
            }
        }
    }

    #[test]
    fn metrics_are_bounded(processes in workload(), quantum in 1u64..6) {
        for algorithm in all_algorithms(quantum) {
            let schedule = simulate(&processes, &algorithm).unwrap();
            let metrics = Metrics::from_results(&schedule.results).unwrap();

            prop_assert!(metrics.cpu_utilization > 0.0);
            prop_assert!(metrics.cpu_utilization <= 100.0 + 1e-9);
            let expected = processes.len() as f64 / schedule.makespan() as f64;
            prop_assert!((metrics.throughput - expected).abs() < 1e-12);
        }
    }
}
