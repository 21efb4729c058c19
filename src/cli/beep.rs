use super::args::Args;
use super::{helpers, listing, logging};
use crate::beep::{Executor, Halt};
use anyhow::Result;
use clap::Parser;
use log::info;
use std::io::Write;

/// Main entrypoint for beep
pub fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = logging::setup_logger(args.log_level, &args.file)? {
        info!("Log written to {}", path.display());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run(&args, &mut out)
}

/// Loads, lists and executes the program named in `args`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let program = helpers::read_program(&args.file)?;
    let executor = Executor::new(program, args.config());

    if !args.quiet {
        listing::write_source(out, &args.file, executor.program())?;
    }

    listing::write_diagnostics(out, executor.diagnostics())?;

    if !args.quiet {
        listing::write_variables(out, executor.variables())?;
        listing::write_labels(out, executor.labels())?;
    }

    let outcome = executor.run(out)?;

    match &outcome.halt {
        Halt::Completed => info!("{} ran to completion", args.file.display()),
        Halt::LoopLimit => info!("{} hit the statement limit", args.file.display()),
        Halt::Failed(error) => info!("{} failed: {error}", args.file.display()),
    }

    Ok(())
}
