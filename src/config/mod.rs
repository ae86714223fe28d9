/*!
 * Configuration
 * Workload files, environment settings and run-plan resolution
 */

pub mod settings;
pub mod workload;

pub use settings::{
    parse_quantum, EnvSettings, OutputFormat, PolicyChoice, RunPlan, ENV_OUTPUT, ENV_POLICY,
    ENV_QUANTUM, ENV_TRACE_JSON,
};
pub use workload::{ProcessSpec, RawValue, Workload};
