/*!
 * Process Table
 * Caller-owned working set of processes and the id sequence feeding it
 */

use super::types::Process;
use super::validation::{parse_priority, parse_time_field};
use crate::core::errors::{SimResult, SimulationError};
use crate::core::limits::FIRST_PID;
use crate::core::types::Pid;
use tracing::debug;

/// Monotonic id generator owned by whoever builds the process set
#[derive(Debug, Clone)]
pub struct PidSequence {
    next: Pid,
}

impl PidSequence {
    pub const fn new() -> Self {
        Self { next: FIRST_PID }
    }

    /// Hand out the next id
    pub fn next_pid(&mut self) -> SimResult<Pid> {
        let pid = self.next;
        self.next = successor(pid)?;
        Ok(pid)
    }

    /// Make sure an externally chosen id is never handed out later
    pub fn reserve(&mut self, pid: Pid) -> SimResult<()> {
        if pid >= self.next {
            self.next = successor(pid)?;
        }
        Ok(())
    }

    pub const fn peek(&self) -> Pid {
        self.next
    }
}

fn successor(pid: Pid) -> SimResult<Pid> {
    pid.checked_add(1).ok_or_else(|| {
        SimulationError::validation(format!("process id {} exhausts the id sequence", pid))
    })
}

impl Default for PidSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered working set of processes awaiting simulation
///
/// Ids come from the table's own sequence and are never reused, even after
/// a process is removed or the table is cleared.
#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    processes: Vec<Process>,
    pids: PidSequence,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and append a process from integer fields
    pub fn add(&mut self, arrival_time: i64, burst_time: i64, priority: Option<i64>) -> SimResult<Pid> {
        // Validate before consuming an id
        let mut process = Process::new(self.pids.peek(), arrival_time, burst_time, priority)?;
        process.pid = self.pids.next_pid()?;
        let pid = process.pid;
        debug!(pid, arrival_time, burst_time, "process added");
        self.processes.push(process);
        Ok(pid)
    }

    /// Create and append a process from raw text fields
    pub fn add_raw(&mut self, arrival_time: &str, burst_time: &str, priority: Option<&str>) -> SimResult<Pid> {
        let arrival = parse_time_field("arrival time", arrival_time)?;
        let burst = parse_time_field("burst time", burst_time)?;
        let priority = parse_priority(priority);
        self.add(arrival, burst, Some(i64::from(priority)))
    }

    /// Append a process that already carries its own id
    pub fn insert(&mut self, process: Process) -> SimResult<Pid> {
        if process.pid < FIRST_PID {
            return Err(SimulationError::validation(format!(
                "process id must be at least {}, got {}",
                FIRST_PID, process.pid
            )));
        }
        if self.get(process.pid).is_some() {
            return Err(SimulationError::validation(format!(
                "duplicate process id {}",
                process.pid
            )));
        }
        let pid = process.pid;
        self.pids.reserve(pid)?;
        self.processes.push(process);
        Ok(pid)
    }

    /// Remove a process by id
    pub fn remove(&mut self, pid: Pid) -> bool {
        match self.processes.iter().position(|p| p.pid == pid) {
            Some(pos) => {
                self.processes.remove(pos);
                debug!(pid, "process removed");
                true
            }
            None => false,
        }
    }

    pub fn get(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    pub fn clear(&mut self) {
        self.processes.clear();
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    pub fn as_slice(&self) -> &[Process] {
        &self.processes
    }
}
