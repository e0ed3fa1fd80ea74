// src/main.rs
//
// opkb binary: logging, runtime, then the cli module

use clap::Parser;
use std::process::ExitCode;

use opkb_browser::cli::{self, Cli};

fn main() -> anyhow::Result<ExitCode> {
    // RUST_LOG controls verbosity; log records from the library go through tracing-log
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(cli::run(args))
}
