//! Build script for fspath-cli.
//!
//! Renders the `fsp.1` man page into OUT_DIR with clap_mangen. The command
//! tree is rebuilt here by hand because a build script cannot depend on the
//! crate it builds; keep it in step with src/cli.rs.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn listing_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("pattern").long("pattern").short('p').value_name("GLOB"))
        .arg(
            Arg::new("sort")
                .long("sort")
                .value_parser(["dirs-first", "lexical"]),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["plain", "json", "csv"]),
        )
}

fn build_cli() -> Command {
    Command::new("fsp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and change files through string-like paths")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read settings from this file instead of ~/.fspath/config.yaml")
                .value_name("FILE")
                .global(true)
                .env("FSPATH_CONFIG"),
        )
        .subcommands(vec![
            listing_args(
                Command::new("ls")
                    .about("List the children of a directory")
                    .arg(Arg::new("files").long("files").action(ArgAction::SetTrue))
                    .arg(Arg::new("dirs").long("dirs").action(ArgAction::SetTrue)),
            ),
            listing_args(
                Command::new("walk").about("Walk a directory tree").arg(
                    Arg::new("recursive")
                        .long("recursive")
                        .short('r')
                        .action(ArgAction::SetTrue),
                ),
            ),
            Command::new("stat").about("Show metadata for paths"),
            Command::new("cat").about("Print file contents"),
            Command::new("mkdir").about("Create directories"),
            Command::new("rm").about("Remove files and directories"),
            Command::new("cp").about("Copy a file or directory tree"),
            Command::new("ln").about("Create a symbolic or hard link"),
            Command::new("unlink").about("Remove a file or link"),
            Command::new("touch").about("Create files or keep existing ones as they are"),
            Command::new("chmod").about("Change permission bits"),
            Command::new("mv").about("Rename or move a path"),
            Command::new("completions").about("Generate shell completion scripts"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("fsp.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
