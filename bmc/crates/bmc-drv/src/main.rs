use std::process::ExitCode;

use anyhow::Context;
use bmc_drv::{init_logging, run, Cli, Status};
use clap::Parser;

/// Exit code for runs that could not scan their input.
const EXIT_FAILURE: u8 = 2;

fn try_main(cli: Cli) -> anyhow::Result<Status> {
    init_logging(cli.verbose, cli.no_color)?;
    run(&cli).with_context(|| format!("cannot scan {}", cli.input.display()))
}

fn main() -> ExitCode {
    match try_main(Cli::parse()) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        },
    }
}
