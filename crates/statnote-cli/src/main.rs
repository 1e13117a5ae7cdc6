use tracing_subscriber::{EnvFilter, fmt};

mod command;
mod render;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    // stdout carries the report, so diagnostics go to stderr
    fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    command::run()
}
