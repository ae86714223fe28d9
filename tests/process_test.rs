/*!
 * Process Tests
 * Process creation and the caller-owned process table
 */

use cpu_sched_sim::process::{parse_priority, validate_process_set};
use cpu_sched_sim::{simulate, Algorithm, Process, ProcessTable, SimulationError};
use pretty_assertions::assert_eq;

#[test]
fn test_table_feeds_simulation() {
    let mut table = ProcessTable::new();
    table.add(0, 5, None).unwrap();
    table.add_raw("1", "3", Some("2")).unwrap();
    table.add_raw("2", "8", None).unwrap();

    let schedule = simulate(table.as_slice(), &Algorithm::Fcfs).unwrap();
    let pids: Vec<_> = schedule.results.iter().map(|r| r.process.pid).collect();
    assert_eq!(pids, vec![1, 2, 3]);
    assert_eq!(table.get(2).map(|p| p.priority), Some(2));
}

#[test]
fn test_removed_process_is_not_simulated() {
    let mut table = ProcessTable::new();
    let a = table.add(0, 2, None).unwrap();
    let b = table.add(0, 2, None).unwrap();
    assert!(table.remove(a));

    let schedule = simulate(table.as_slice(), &Algorithm::Sjf).unwrap();
    assert_eq!(schedule.results.len(), 1);
    assert_eq!(schedule.results[0].process.pid, b);
}

#[test]
fn test_raw_input_validation() {
    let mut table = ProcessTable::new();
    assert!(matches!(
        table.add_raw("abc", "3", None),
        Err(SimulationError::Validation(_))
    ));
    assert!(matches!(
        table.add_raw("0", "0", None),
        Err(SimulationError::Validation(_))
    ));
    assert!(matches!(
        table.add_raw("-2", "4", None),
        Err(SimulationError::Validation(_))
    ));
    assert!(table.is_empty());
}

#[test]
fn test_priority_normalization() {
    assert_eq!(parse_priority(Some("")), 1);
    assert_eq!(parse_priority(Some("7")), 7);
    assert_eq!(Process::new(1, 0, 1, Some(0)).unwrap().priority, 1);
}

#[test]
fn test_set_validation() {
    let a = Process::new(1, 0, 1, None).unwrap();
    let b = Process::new(1, 2, 1, None).unwrap();
    assert!(validate_process_set(&[a.clone()]).is_ok());
    assert!(validate_process_set(&[a, b]).is_err());
}
