//! Main entry point for the `fsp` CLI.
//!
//! `fsp` exposes the fspath library on the command line:
//! - `ls`, `walk`: list and traverse directories
//! - `stat`, `cat`: inspect paths
//! - `mkdir`, `rm`, `cp`, `ln`, `unlink`, `touch`, `chmod`, `mv`: mutate
//! - `completions`: shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route the library's debug records through the stderr logger
    if fspath::init_logger(cli.verbose, cli.quiet).install().is_err() {
        eprintln!("WARN: logger already installed");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Ls(cmd) => cmd.execute(&global),
        cli::Command::Walk(cmd) => cmd.execute(&global),
        cli::Command::Stat(cmd) => cmd.execute(&global),
        cli::Command::Cat(cmd) => cmd.execute(&global),
        cli::Command::Mkdir(cmd) => cmd.execute(&global),
        cli::Command::Rm(cmd) => cmd.execute(&global),
        cli::Command::Cp(cmd) => cmd.execute(&global),
        cli::Command::Ln(cmd) => cmd.execute(&global),
        cli::Command::Unlink(cmd) => cmd.execute(&global),
        cli::Command::Touch(cmd) => cmd.execute(&global),
        cli::Command::Chmod(cmd) => cmd.execute(&global),
        cli::Command::Mv(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
