//! CLI command implementations.
//!
//! - `ls`, `walk`: list and traverse directories
//! - `stat`, `cat`: inspect paths
//! - `mkdir`, `rm`, `cp`, `ln`, `unlink`, `touch`, `chmod`, `mv`: mutate
//! - `completions`: shell completion scripts

pub mod cat;
pub mod chmod;
pub mod completions;
pub mod cp;
pub mod ln;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod rm;
pub mod stat;
pub mod touch;
pub mod unlink;
pub mod walk;

pub use cat::CatCommand;
pub use chmod::ChmodCommand;
pub use completions::CompletionsCommand;
pub use cp::CpCommand;
pub use ln::LnCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use mv::MvCommand;
pub use rm::RmCommand;
pub use stat::StatCommand;
pub use touch::TouchCommand;
pub use unlink::UnlinkCommand;
pub use walk::WalkCommand;
