//! Stat command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, print_output, FormatArg, GlobalOptions};
use clap::Args;
use fspath::{Config, OutputFormat, Path, PathInfo};

/// Show metadata for paths.
#[derive(Args)]
pub struct StatCommand {
    /// Paths to inspect
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl StatCommand {
    /// Execute the stat command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(
            global,
            Config {
                format: self.format.map(OutputFormat::from),
                ..Default::default()
            },
        )?;

        let records = self
            .paths
            .into_iter()
            .map(|p| PathInfo::collect(&Path::new(p)))
            .collect::<fspath::Result<Vec<_>>>()?;

        let text = config.format().create_formatter().format_records(&records)?;
        print_output(&text)
    }
}
