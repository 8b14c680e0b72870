//! Requirements table export
//!
//! Reads the requirements table from a markdown document and writes it to CSV.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli.init_tracing();
    cli.run()
}
