//! Cat command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::Path;
use std::io::Write;

/// Print file contents.
#[derive(Args)]
pub struct CatCommand {
    /// Files to print, in order
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,
}

impl CatCommand {
    /// Execute the cat command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for file in self.files {
            let content = Path::new(file).content()?;
            handle.write_all(content.as_bytes())?;
        }
        Ok(())
    }
}
