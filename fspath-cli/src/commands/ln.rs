//! Ln command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fspath::Path;

/// Create a link to an existing path.
///
/// Symbolic links point at the fully resolved source.
#[derive(Args)]
pub struct LnCommand {
    /// Existing path to link to
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Where to create the link
    #[arg(value_name = "LINK")]
    pub link: String,

    /// Create a hard link instead of a symbolic one
    #[arg(long)]
    pub hard: bool,
}

impl LnCommand {
    /// Execute the ln command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let source = Path::new(self.source);
        let link = if self.hard {
            source.ln_hard(self.link)?
        } else {
            source.ln(self.link)?
        };
        global.logger().info(&format!("linked {link} -> {source}"));
        Ok(())
    }
}
