//! Mv command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::Path;

/// Rename or move a path.
#[derive(Args)]
pub struct MvCommand {
    /// Path to move
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// New location
    #[arg(value_name = "TARGET")]
    pub target: String,
}

impl MvCommand {
    /// Execute the mv command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let target = Path::new(self.source).rename(self.target)?;
        global.logger().info(&format!("moved to {target}"));
        Ok(())
    }
}
