use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gitconf")]
#[command(about = "Show the git configuration a docs build would see")]
pub struct Cli {
    /// Repository to inspect (any path inside the working copy)
    #[arg(short = 'C', long = "repo", default_value = ".", env = "GITCONF_REPO")]
    pub repo: PathBuf,

    /// Run-state file with `git.branches` / `git.remote` overrides (YAML or JSON)
    #[arg(short = 'b', long, value_name = "FILE")]
    pub branch_conf: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write a trace log to this file instead of logging to stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every resolved field
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the HEAD commit sha
    Commit,
    /// Print the current branch
    Branch,
    /// Print the published branches, one per line
    Published,
}
