mod commands;

use std::io;

use anyhow::Result;
use clap::Parser;
use rand::rngs::OsRng;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "generate-host", version)]
#[command(about = "Print a random splash host name", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let _cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = commands::generate::run(&mut OsRng, &mut out) {
        error!(?err, "host name generation failed");
        return Err(err);
    }

    Ok(())
}
