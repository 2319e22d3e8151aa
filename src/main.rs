use anyhow::{Context, Result};
use clap::Parser;
use std::io;

mod catalog;
mod cli;
mod defaults;
mod error;
mod geometry;
mod keymap;
mod launcher;
mod resurrect;
mod selection;
mod spawn;
mod terminal;

use crate::cli::Cli;
use crate::launcher::InTerminal;
use crate::resurrect::Resurrect;
use crate::spawn::I3;
use crate::terminal::Console;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .init();

    if !cli.in_term {
        return launcher::launch(&cli, &I3::default()).context("opening menu window");
    }

    let mut console = Console;
    let mut stdout = io::stdout();
    let tool = Resurrect::default();
    InTerminal { term: &mut console, out: &mut stdout, tool: &tool }
        .run(cli.action, &cli.profiles_dir())
}
