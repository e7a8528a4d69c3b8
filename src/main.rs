use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use hiit::cli::args::{Cli, Commands};
use hiit::cli::commands;
use hiit::config::Settings;
use hiit::error::HiitError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), HiitError> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { ref shell }) = cli.command {
        let script = commands::completions(shell)?;
        println!("{script}");
        return Ok(());
    }

    let settings = Settings::load()?;
    commands::workout(&cli, &settings)
}
