use std::path::PathBuf;

use clap::Args;

use crate::{render, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct ExplainArg {
    /// Output file path (defaults to stdout)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ExplainArg) -> anyhow::Result<()> {
    let mut output = Output::from_output_path(arg.output.clone())?;
    output.write_text(&render::render_explanations()?)
}
