//! Touch command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::Path;

/// Create empty files; existing files keep their content.
#[derive(Args)]
pub struct TouchCommand {
    /// Files to touch
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,
}

impl TouchCommand {
    /// Execute the touch command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        for file in self.files {
            Path::new(file).touch()?;
        }
        Ok(())
    }
}
