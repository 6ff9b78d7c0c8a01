use anyhow::Context;
use clap::Parser;
use img_batch::logger::{set_verbosity, Verbosity};
use img_batch::{run, Args, Prompter};
use std::io;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    run(&args, &mut prompter).context("image batch aborted")?;
    Ok(())
}
