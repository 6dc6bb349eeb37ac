//! Walk command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, print_output, GlobalOptions, ListingArgs};
use clap::Args;
use fspath::Path;

/// Walk a directory tree, directories before files.
///
/// Unreadable directories are reported and skipped; the command then exits
/// with the first such error after printing what it could read.
#[derive(Args)]
pub struct WalkCommand {
    /// Directory to walk
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: String,

    /// Descend into subdirectories
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// Also descend into symlinked directories
    #[arg(long, short = 'L')]
    pub follow_links: bool,

    #[command(flatten)]
    pub listing: ListingArgs,
}

impl WalkCommand {
    /// Execute the walk command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();
        let mut overrides = self.listing.overrides();
        if self.recursive {
            overrides.recursive = Some(true);
        }
        let config = load_configuration(global, overrides)?;

        let mut entries = Vec::new();
        let mut first_error = None;
        let options = config.walk_options().follow_links(self.follow_links);
        for entry in Path::new(self.dir).walk_with(options) {
            match entry {
                Ok(path) => entries.push(path),
                Err(e) => {
                    logger.warn(&e.to_string());
                    first_error.get_or_insert(e);
                }
            }
        }

        let text = config.format().create_formatter().format_paths(&entries)?;
        print_output(&text)?;

        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}
