//! Rm command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::Path;

/// Remove files and directories.
///
/// Directories must be empty unless `--recursive` is given.
#[derive(Args)]
pub struct RmCommand {
    /// Paths to remove
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Remove directories and their contents
    #[arg(long, short = 'r')]
    pub recursive: bool,
}

impl RmCommand {
    /// Execute the rm command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();
        for path in self.paths {
            let path = Path::new(path);
            if self.recursive {
                path.rm_recursive()?;
            } else {
                path.rm()?;
            }
            logger.info(&format!("removed {path}"));
        }
        Ok(())
    }
}
