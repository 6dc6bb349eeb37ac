//! List command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, print_output, GlobalOptions, ListingArgs};
use clap::Args;
use fspath::Path;

/// List the children of a directory.
#[derive(Args)]
pub struct LsCommand {
    /// Directory to list
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: String,

    /// Only list regular files
    #[arg(long, conflicts_with = "dirs")]
    pub files: bool,

    /// Only list directories
    #[arg(long)]
    pub dirs: bool,

    #[command(flatten)]
    pub listing: ListingArgs,
}

impl LsCommand {
    /// Execute the ls command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, self.listing.overrides())?;
        let options = config.list_options();
        let dir = Path::new(self.dir);

        let entries = if self.files {
            dir.ls_files_with(&options)?
        } else if self.dirs {
            dir.ls_dirs_with(&options)?
        } else {
            dir.ls_with(&options)?
        };

        let text = config.format().create_formatter().format_paths(&entries)?;
        print_output(&text)
    }
}
