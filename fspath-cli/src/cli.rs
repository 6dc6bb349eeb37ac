//! CLI structure and command definitions.

use crate::commands::{
    CatCommand, ChmodCommand, CompletionsCommand, CpCommand, LnCommand, LsCommand, MkdirCommand,
    MvCommand, RmCommand, StatCommand, TouchCommand, UnlinkCommand, WalkCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and change files through string-like paths.
#[derive(Parser)]
#[command(name = "fsp")]
#[command(version, about = "Inspect and change files through string-like paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read settings from this file instead of ~/.fspath/config.yaml
    #[arg(long, value_name = "FILE", global = true, env = "FSPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the children of a directory
    Ls(LsCommand),

    /// Walk a directory tree
    Walk(WalkCommand),

    /// Show metadata for paths
    Stat(StatCommand),

    /// Print file contents
    Cat(CatCommand),

    /// Create directories
    Mkdir(MkdirCommand),

    /// Remove files and directories
    Rm(RmCommand),

    /// Copy a file or directory tree
    Cp(CpCommand),

    /// Create a symbolic or hard link
    Ln(LnCommand),

    /// Remove a file or link
    Unlink(UnlinkCommand),

    /// Create files or keep existing ones as they are
    Touch(TouchCommand),

    /// Change permission bits
    Chmod(ChmodCommand),

    /// Rename or move a path
    Mv(MvCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
