//! Data models for versions and the compatibility checks built on them

pub mod version;
pub mod range;
pub mod compat;

pub use version::{Version, VersionPart, PartNumber};
pub use range::VersionRange;
pub use compat::{Application, CompatCheck, CompatReport, IncompatReason};
