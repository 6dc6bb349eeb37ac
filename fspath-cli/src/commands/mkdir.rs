//! Mkdir command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::Path;

/// Create directories.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directories to create
    #[arg(value_name = "DIR", required = true)]
    pub dirs: Vec<String>,

    /// Create missing parent directories as well
    #[arg(long, short = 'p')]
    pub parents: bool,
}

impl MkdirCommand {
    /// Execute the mkdir command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();
        for dir in self.dirs {
            let dir = Path::new(dir);
            if self.parents {
                dir.mkdir_all()?;
            } else {
                dir.mkdir()?;
            }
            logger.info(&format!("created {dir}"));
        }
        Ok(())
    }
}
