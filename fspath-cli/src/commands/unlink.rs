//! Unlink command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::Path;

/// Remove files or links. Directories are refused.
#[derive(Args)]
pub struct UnlinkCommand {
    /// Paths to unlink
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl UnlinkCommand {
    /// Execute the unlink command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();
        for path in self.paths {
            let path = Path::new(path).unlink()?;
            logger.info(&format!("unlinked {path}"));
        }
        Ok(())
    }
}
