use clap::{Parser, Subcommand};

use self::{describe::DescribeArg, explain::ExplainArg};

mod describe;
mod explain;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to do (defaults to describing the reference samples)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compute descriptive statistics of a sample set
    Describe(#[clap(flatten)] DescribeArg),
    /// Explain every reported statistic
    Explain(#[clap(flatten)] ExplainArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Describe(DescribeArg::default())) {
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Explain(arg) => explain::run(&arg)?,
    }
    Ok(())
}
