//! `downhill`: minimize the Rosenbrock function from a seed given on the
//! command line, or refine a stored point against sample data.

mod cli;
mod commands;
mod objectives;
mod points;
mod settings;

use std::io;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::Level;

use crate::{
    cli::{Cli, Command},
    settings::Settings,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Settings::resolve(&cli.solver)?.to_config()?;
    let deadline = commands::deadline(cli.solver.deadline)?;
    let mut out = io::stdout().lock();

    match &cli.cmd {
        Some(Command::Refine(args)) => {
            if !cli.seed.is_empty() {
                bail!("seed coordinates cannot be combined with `refine`");
            }
            commands::refine(args, &config, deadline, &mut out)?;
        }
        None => {
            commands::rosenbrock(&cli.seed(), &config, deadline, &mut out)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
