/*!
 * Scheduler Module
 * Policy simulators and the simulation entry points
 */

mod arrivals;
pub mod entry;
pub mod fcfs;
pub mod nonpreemptive;
pub mod round_robin;
pub mod traits;
pub mod types;

pub use entry::Selection;
pub use fcfs::FcfsSimulator;
pub use nonpreemptive::NonPreemptiveSimulator;
pub use round_robin::RoundRobinSimulator;
pub use traits::Simulator;
pub use types::{Algorithm, SchedulingPolicy, TimeQuantum};

use crate::core::errors::SimResult;
use crate::core::types::Ticks;
use crate::export::Schedule;
use crate::process::{validate_process_set, Process};
use tracing::{info, instrument};

impl Simulator for Algorithm {
    fn policy(&self) -> SchedulingPolicy {
        Algorithm::policy(self)
    }

    fn run(&self, processes: Vec<Process>) -> Schedule {
        match *self {
            Algorithm::Fcfs => FcfsSimulator.run(processes),
            Algorithm::Sjf => NonPreemptiveSimulator::shortest_job_first().run(processes),
            Algorithm::Priority => NonPreemptiveSimulator::priority().run(processes),
            Algorithm::RoundRobin(quantum) => RoundRobinSimulator::new(quantum).run(processes),
        }
    }
}

/// Validate the process set and run one policy to completion
///
/// The caller's processes are never touched; the simulator gets fresh
/// copies with their remaining-time counters rewound.
#[instrument(skip(processes), fields(policy = %algorithm.policy(), processes = processes.len()))]
pub fn simulate(processes: &[Process], algorithm: &Algorithm) -> SimResult<Schedule> {
    validate_process_set(processes)?;

    let working = processes.iter().map(Process::fresh_copy).collect();
    let schedule = algorithm.run(working);

    info!(
        completed = schedule.results.len(),
        makespan = schedule.makespan(),
        "simulation finished"
    );
    Ok(schedule)
}

/// Run every policy over independent copies of the same process set
///
/// A quantum is required because round-robin is part of the comparison.
pub fn compare(processes: &[Process], quantum: Option<Ticks>) -> SimResult<Vec<Schedule>> {
    let algorithms = SchedulingPolicy::ALL
        .iter()
        .map(|&policy| Algorithm::new(policy, quantum))
        .collect::<SimResult<Vec<_>>>()?;

    algorithms
        .iter()
        .map(|algorithm| simulate(processes, algorithm))
        .collect()
}
