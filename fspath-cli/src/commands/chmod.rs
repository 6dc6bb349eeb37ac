//! Chmod command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::{Mode, Path};

/// Change permission bits.
#[derive(Args)]
pub struct ChmodCommand {
    /// Octal mode, e.g. 0755 or 644
    #[arg(value_name = "MODE")]
    pub mode: String,

    /// Paths to change
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl ChmodCommand {
    /// Execute the chmod command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();
        // Reject a bad mode before touching any path
        let bits = Mode::from(self.mode.as_str()).bits()?;
        for path in self.paths {
            let path = Path::new(path).chmod(bits)?;
            logger.info(&format!("mode of {path} set to {}", self.mode));
        }
        Ok(())
    }
}
