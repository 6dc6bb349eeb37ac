//! The path value and its composition rules.
//!
//! [`Path`] is a text value that knows it names a filesystem location. It
//! joins with other fragments through [`Path::compose`] or the `/` operator,
//! splits into components, and offers a fixed set of `str` operations that
//! return `Path` instead of `String`.
//!
//! # Composition
//!
//! ```
//! use fspath::Path;
//!
//! let base = Path::new("project");
//! let file = &base / "src" / "main.rs";
//! assert_eq!(file, Path::join_all(["project", "src", "main.rs"]));
//! assert_eq!(file.basename(), "main.rs");
//! ```
//!
//! # Lexical forms
//!
//! [`Path::absolute`], [`Path::relative_to`], [`Path::basename`] and
//! [`Path::dir`] work on the text alone. [`Path::real_path`] is the only
//! form that consults the filesystem, to resolve symlinks.

pub mod canonicalize;
pub mod normalize;
mod text;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use types::Path;
