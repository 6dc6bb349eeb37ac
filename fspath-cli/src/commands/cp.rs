//! Cp command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::Path;

/// Copy a file or directory tree.
///
/// A file copied onto an existing directory lands inside it.
#[derive(Args)]
pub struct CpCommand {
    /// Source file or directory
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Destination
    #[arg(value_name = "TARGET")]
    pub target: String,
}

impl CpCommand {
    /// Execute the cp command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let target = Path::new(self.source).cp(self.target)?;
        global.logger().info(&format!("copied to {target}"));
        Ok(())
    }
}
