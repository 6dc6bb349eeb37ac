//! Configuration for listing and walking.
//!
//! Settings are merged from several sources, highest precedence first:
//!
//! 1. Programmatic overrides (via [`ConfigBuilder::with_config`])
//! 2. Environment variables (`FSPATH_PATTERN`, `FSPATH_SORT`,
//!    `FSPATH_FORMAT`, `FSPATH_RECURSIVE`)
//! 3. A config file: `~/.fspath/config.yaml`, or an explicit path
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use fspath::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config { recursive: Some(true), ..Default::default() })
//!     .build()
//!     .unwrap();
//!
//! assert!(config.walk_options().is_recursive());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use merger::ConfigMerger;
pub use schema::{Config, SortKey};
pub use validator::ConfigValidator;
