//! Helpers shared across CLI commands: global options, configuration
//! loading and output.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use fspath::config::SortKey;
use fspath::{Config, ConfigBuilder, Logger, OutputFormat};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    /// A stderr logger at the level these options select.
    pub fn logger(&self) -> Logger {
        fspath::init_logger(self.verbose, self.quiet)
    }
}

/// Entry ordering accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SortArg {
    /// Directories first, then by name
    DirsFirst,
    /// By name only
    Lexical,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::DirsFirst => SortKey::DirsFirst,
            SortArg::Lexical => SortKey::Lexical,
        }
    }
}

/// Output format accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// One entry per line
    Plain,
    /// JSON array
    Json,
    /// CSV with a header row
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

/// Options shared by `ls` and `walk`.
#[derive(Args, Debug, Clone)]
pub struct ListingArgs {
    /// Only show entries whose name matches this glob
    #[arg(long, short = 'p', value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Entry ordering
    #[arg(long, value_enum, ignore_case = true)]
    pub sort: Option<SortArg>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl ListingArgs {
    /// The settings given on the command line, as the top config layer.
    pub fn overrides(&self) -> Config {
        Config {
            pattern: self.pattern.clone(),
            sort: self.sort.map(SortKey::from),
            format: self.format.map(OutputFormat::from),
            recursive: None,
        }
    }
}

/// Load layered configuration with `overrides` on top.
///
/// Precedence, highest first: command-line flags, `FSPATH_*` environment
/// variables, the config file, built-in defaults.
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(overrides);
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }
    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Write rendered output to stdout, followed by a newline unless empty.
pub fn print_output(text: &str) -> Result<(), CliError> {
    if text.is_empty() {
        return Ok(());
    }
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{text}")?;
    Ok(())
}
