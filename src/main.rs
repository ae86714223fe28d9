/*!
 * CPU Scheduling Simulator - Command-Line Entry Point
 */

use clap::Parser;
use cpu_sched_sim::cli::{execute, CliArgs};
use cpu_sched_sim::config::EnvSettings;
use cpu_sched_sim::init_tracing;
use tracing::debug;

fn main() -> miette::Result<()> {
    let env = EnvSettings::from_env()?;
    init_tracing(env.trace_json);

    let args = CliArgs::parse();
    debug!(?args, "arguments parsed");

    let output = execute(&args, &env)?;
    println!("{}", output);
    Ok(())
}
