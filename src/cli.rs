/*!
 * Command-Line Driver
 * Argument definitions and the load / simulate / render pipeline
 */

use crate::config::{parse_quantum, EnvSettings, OutputFormat, PolicyChoice, RunPlan, Workload};
use crate::core::errors::SimResult;
use crate::core::types::Ticks;
use crate::export::{reports_to_json, Comparison, SimulationReport};
use crate::process::Process;
use crate::scheduler::simulate;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

const ENVIRONMENT_HELP: &str = "\
Environment:
  SCHED_POLICY, SCHED_QUANTUM, SCHED_OUTPUT, SCHED_TRACE_JSON, RUST_LOG";

/// Simulate CPU scheduling policies over a JSON workload
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "sched-sim", version, after_help = ENVIRONMENT_HELP)]
#[command(group(ArgGroup::new("format").args(["json", "table"])))]
pub struct CliArgs {
    /// Workload file (JSON)
    pub workload: PathBuf,

    /// fcfs | sjf | priority | round_robin | all
    #[arg(short, long, value_parser = PolicyChoice::from_str)]
    pub policy: Option<PolicyChoice>,

    /// Time quantum for round_robin
    #[arg(short, long, value_parser = parse_quantum)]
    pub quantum: Option<Ticks>,

    /// Print a JSON report
    #[arg(long)]
    pub json: bool,

    /// Print a plain-text report (default)
    #[arg(long)]
    pub table: bool,
}

impl CliArgs {
    /// Output format picked on the command line, if any
    pub fn output(&self) -> Option<OutputFormat> {
        if self.json {
            Some(OutputFormat::Json)
        } else if self.table {
            Some(OutputFormat::Table)
        } else {
            None
        }
    }
}

/// Load the workload, run the selected policies and render the output
pub fn execute(args: &CliArgs, env: &EnvSettings) -> SimResult<String> {
    let workload = Workload::load(&args.workload)?;
    let table = workload.to_table()?;

    let plan = RunPlan::resolve(
        [args.policy, workload.policy, env.policy],
        [args.quantum, workload.quantum, env.quantum],
        [args.output(), env.output],
    );
    info!(policy = %plan.choice, quantum = ?plan.quantum, processes = table.len(), "running workload");

    render(table.as_slice(), &plan)
}

/// Simulate every algorithm in the plan and format the reports
pub fn render(processes: &[Process], plan: &RunPlan) -> SimResult<String> {
    let reports = plan
        .algorithms()?
        .iter()
        .map(|algorithm| simulate(processes, algorithm).and_then(SimulationReport::from_schedule))
        .collect::<SimResult<Vec<_>>>()?;

    match (plan.output, reports.as_slice()) {
        (OutputFormat::Json, [single]) => single.to_json(),
        (OutputFormat::Json, many) => reports_to_json(many),
        (OutputFormat::Table, [single]) => Ok(single.to_string()),
        (OutputFormat::Table, many) => {
            let mut out = many.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n");
            out.push('\n');
            out.push_str(&Comparison(many).to_string());
            Ok(out)
        }
    }
}
