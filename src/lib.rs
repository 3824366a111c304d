//! Mozilla toolkit version comparison, as used to match add-ons against the
//! application versions they support.
//!
//! ```
//! use vercmp::compare_versions;
//!
//! assert_eq!(compare_versions("2.0b1", "2.0"), -1);
//! assert_eq!(compare_versions("1.0+", "1.1pre"), 0);
//! assert_eq!(compare_versions("3.6", "*"), -1);
//! ```

pub mod compare;
pub mod compat;
pub mod models;
pub mod parser;

pub use compare::{compare, compare_versions};
pub use models::{Application, PartNumber, Version, VersionPart, VersionRange};
