mod cli;
mod commands;

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use gitconf::config::{GitConfig, RunState};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    setup_logging(&cli)?;

    let run_state = match &cli.branch_conf {
        Some(path) => RunState::from_path(path)?,
        None => RunState::default(),
    };
    let mut config: GitConfig = GitConfig::new(&cli.repo, run_state);

    match cli.command {
        Commands::Show { json } => commands::show::handle_show(&mut config, json),
        Commands::Commit => commands::fields::handle_commit(&mut config),
        Commands::Branch => commands::fields::handle_branch(&mut config),
        Commands::Published => commands::fields::handle_published(&mut config),
    }
}

fn setup_logging(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .context(format!("Failed to create log file '{}'", path.display()))?;
        WriteLogger::init(LevelFilter::Trace, Config::default(), file)?;
        return Ok(());
    }

    TermLogger::init(
        level_for(cli.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    Ok(())
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
