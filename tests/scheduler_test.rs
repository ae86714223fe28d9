/*!
 * Scheduler Tests
 * Worked scenarios for every policy through the public entry points
 */

use cpu_sched_sim::{
    compare, simulate, Algorithm, Metrics, Pid, Process, Schedule, SchedulingPolicy,
    SimulationError, SimulationResult, Ticks,
};
use pretty_assertions::assert_eq;

fn process(pid: Pid, arrival: i64, burst: i64, priority: Option<i64>) -> Process {
    Process::new(pid, arrival, burst, priority).unwrap()
}

fn textbook() -> Vec<Process> {
    vec![
        process(1, 0, 5, None),
        process(2, 1, 3, None),
        process(3, 2, 8, None),
    ]
}

fn column(schedule: &Schedule, f: impl Fn(&SimulationResult) -> Ticks) -> Vec<Ticks> {
    schedule.results.iter().map(f).collect()
}

fn order(schedule: &Schedule) -> Vec<Pid> {
    schedule.results.iter().map(|r| r.process.pid).collect()
}

#[test]
fn test_fcfs_scenario() {
    let schedule = simulate(&textbook(), &Algorithm::Fcfs).unwrap();

    assert_eq!(order(&schedule), vec![1, 2, 3]);
    assert_eq!(column(&schedule, |r| r.completion_time), vec![5, 8, 16]);
    assert_eq!(column(&schedule, |r| r.waiting_time), vec![0, 4, 6]);
    assert_eq!(column(&schedule, |r| r.response_time), vec![0, 4, 6]);
    assert!(schedule.timeline.is_none());
}

#[test]
fn test_fcfs_is_repeatable_on_unsorted_input() {
    let processes = vec![
        process(1, 7, 2, None),
        process(2, 0, 4, None),
        process(3, 3, 1, None),
    ];
    let first = simulate(&processes, &Algorithm::Fcfs).unwrap();
    let second = simulate(&processes, &Algorithm::Fcfs).unwrap();
    assert_eq!(first, second);
    assert_eq!(order(&first), vec![2, 3, 1]);
}

#[test]
fn test_sjf_matches_fcfs_when_only_one_is_ever_available() {
    let schedule = simulate(&textbook(), &Algorithm::Sjf).unwrap();
    assert_eq!(order(&schedule), vec![1, 2, 3]);
    assert_eq!(column(&schedule, |r| r.waiting_time), vec![0, 4, 6]);
}

#[test]
fn test_sjf_simultaneous_arrivals() {
    let processes = vec![
        process(1, 0, 5, None),
        process(2, 0, 3, None),
        process(3, 0, 8, None),
    ];
    let schedule = simulate(&processes, &Algorithm::Sjf).unwrap();

    assert_eq!(order(&schedule), vec![2, 1, 3]);
    assert_eq!(column(&schedule, |r| r.completion_time), vec![3, 8, 16]);
    assert_eq!(column(&schedule, |r| r.waiting_time), vec![0, 3, 8]);
}

#[test]
fn test_sjf_tie_breaks_on_arrival_then_id() {
    // At t=4 pids 2, 3 and 4 are available with equal bursts
    let processes = vec![
        process(1, 0, 4, None),
        process(4, 1, 2, None),
        process(3, 2, 2, None),
        process(2, 2, 2, None),
    ];
    let schedule = simulate(&processes, &Algorithm::Sjf).unwrap();
    assert_eq!(order(&schedule), vec![1, 4, 2, 3]);
}

#[test]
fn test_priority_order_wins_over_burst_order() {
    let processes = vec![
        process(1, 0, 1, Some(5)),
        process(2, 0, 10, Some(1)),
        process(3, 0, 4, Some(3)),
    ];

    let by_priority = simulate(&processes, &Algorithm::Priority).unwrap();
    let by_burst = simulate(&processes, &Algorithm::Sjf).unwrap();

    assert_eq!(order(&by_priority), vec![2, 3, 1]);
    assert_eq!(order(&by_burst), vec![1, 3, 2]);
}

#[test]
fn test_priority_ties_resolve_like_sjf() {
    let processes = vec![
        process(3, 0, 2, Some(1)),
        process(1, 0, 2, Some(1)),
        process(2, 0, 2, Some(1)),
    ];
    let by_priority = simulate(&processes, &Algorithm::Priority).unwrap();
    let by_burst = simulate(&processes, &Algorithm::Sjf).unwrap();

    assert_eq!(order(&by_priority), vec![1, 2, 3]);
    assert_eq!(order(&by_priority), order(&by_burst));
}

#[test]
fn test_round_robin_scenario() {
    let processes = vec![process(1, 0, 5, None), process(2, 1, 3, None)];
    let rr = Algorithm::new(SchedulingPolicy::RoundRobin, Some(2)).unwrap();
    let schedule = simulate(&processes, &rr).unwrap();

    let slices: Vec<(Pid, Ticks, Ticks)> = schedule
        .timeline
        .as_ref()
        .unwrap()
        .iter()
        .map(|b| (b.pid, b.start_time, b.end_time))
        .collect();
    assert_eq!(
        slices,
        vec![(1, 0, 2), (2, 2, 4), (1, 4, 6), (2, 6, 7), (1, 7, 8)]
    );

    let p1 = schedule.result(1).unwrap();
    let p2 = schedule.result(2).unwrap();
    assert_eq!((p1.completion_time, p1.waiting_time), (8, 3));
    assert_eq!((p2.completion_time, p2.waiting_time), (7, 3));
    assert_eq!(p2.start_time, 2);
    assert_eq!(p2.response_time, 1);
}

#[test]
fn test_round_robin_idle_jump_with_simultaneous_arrivals() {
    let processes = vec![
        process(1, 0, 1, None),
        process(2, 6, 3, None),
        process(3, 6, 2, None),
    ];
    let rr = Algorithm::new(SchedulingPolicy::RoundRobin, Some(2)).unwrap();
    let schedule = simulate(&processes, &rr).unwrap();

    let gantt: Vec<_> = schedule.gantt().iter().map(|b| (b.pid, b.start_time)).collect();
    assert_eq!(gantt, vec![(1, 0), (2, 6), (3, 8), (2, 10)]);
    assert_eq!(schedule.makespan(), 11);
}

#[test]
fn test_metrics_scenario() {
    let schedule = simulate(&textbook(), &Algorithm::Fcfs).unwrap();
    let metrics = Metrics::from_results(&schedule.results).unwrap().rounded();

    assert_eq!(metrics.cpu_utilization, 100.0);
    assert_eq!(metrics.throughput, 0.19);
    assert_eq!(metrics.avg_waiting, 3.33);
    assert_eq!(metrics.avg_response, 3.33);
}

#[test]
fn test_entry_errors() {
    assert_eq!(
        simulate(&[], &Algorithm::Sjf).unwrap_err(),
        SimulationError::EmptyInput
    );

    let mut broken = process(1, 0, 1, None);
    broken.burst_time = 0;
    assert!(matches!(
        simulate(&[broken], &Algorithm::Fcfs),
        Err(SimulationError::Validation(_))
    ));

    assert!(matches!(
        Algorithm::new(SchedulingPolicy::RoundRobin, None),
        Err(SimulationError::Configuration(_))
    ));
}

#[test]
fn test_clock_overflow_rejected_before_any_policy_runs() {
    let huge = vec![
        process(1, 0, i64::MAX, None),
        process(2, 0, i64::MAX, None),
        process(3, 0, i64::MAX, None),
    ];
    for schedule in [
        simulate(&huge, &Algorithm::Fcfs),
        simulate(&huge, &Algorithm::Sjf),
        simulate(&huge, &Algorithm::Priority),
        simulate(&huge, &Algorithm::new(SchedulingPolicy::RoundRobin, Some(1)).unwrap()),
    ] {
        assert!(matches!(schedule, Err(SimulationError::Validation(_))));
    }
}

#[test]
fn test_policies_do_not_contaminate_each_other() {
    let processes = textbook();
    let schedules = compare(&processes, Some(3)).unwrap();

    let fcfs_again = simulate(&processes, &Algorithm::Fcfs).unwrap();
    assert_eq!(schedules[0], fcfs_again);
    assert!(processes.iter().all(|p| p.remaining_time == p.burst_time));
}
