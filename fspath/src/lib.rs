#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fspath
//!
//! String-like filesystem paths that can query and change what they name.
//!
//! A [`Path`] is plain text: it compares, hashes and prints like the string
//! it wraps and composes with the `/` operator. Methods on it read metadata,
//! create and remove entries, list directories and walk trees. Nothing is
//! cached; every query goes to the filesystem.
//!
//! ## Core Types
//!
//! - [`Path`]: the path value and its composition rules
//! - [`Mode`]: permission modes for [`Path::chmod`]
//! - [`ListOptions`], [`SortOrder`], [`WalkOptions`] and [`Walk`]: listing
//!   and traversal
//! - [`Error`] and [`Result`]: error handling types
//! - [`Config`] and [`ConfigBuilder`]: layered settings for the `fsp` tool
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use fspath::Path;
//!
//! let scratch = tempfile::tempdir().unwrap();
//! let root = Path::from(scratch.path());
//!
//! let notes = &root / "docs" / "notes.txt";
//! notes.dir().mkdir_all().unwrap();
//! notes.touch().unwrap();
//!
//! assert!(notes.is_file());
//! assert_eq!(notes.size().unwrap(), 0);
//! assert_eq!(root.ls().unwrap(), [&root / "docs"]);
//!
//! (&root / "docs").rm_recursive().unwrap();
//! assert!(!notes.exists());
//! ```

pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod metadata;
pub mod mode;
pub mod ops;
pub mod output;
#[cfg(unix)]
mod owner;
pub mod path;
pub mod walk;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use listing::{ListOptions, SortOrder};
pub use logging::{init_logger, LogLevel, Logger};
pub use mode::Mode;
pub use output::{OutputFormat, OutputFormatter, PathInfo};
pub use path::Path;
pub use walk::{Walk, WalkOptions};
