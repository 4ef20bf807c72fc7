//! Pure path values and lexical path algebra.
//!
//! This module contains everything that operates on paths as data: the
//! [`PurePath`] value type, its component grammar, lexical normalization,
//! and relative-path computation. Nothing here touches the operating
//! system, and nothing here can fail; edge cases resolve to documented
//! empty results.
//!
//! # Key Concepts
//!
//! ## Components
//!
//! A path decomposes into an optional root name (`C:`, `//server`), an
//! optional root directory, and a sequence of names. Redundant separators
//! carry no meaning; a trailing separator denotes an empty final filename.
//! Two paths are equal iff their component sequences are equal.
//!
//! ## Lexical normalization
//!
//! [`PurePath::lexically_normal`] collapses `.` and `..` structurally,
//! without consulting the filesystem. The filesystem may disagree with the
//! lexical answer in the presence of symlinks; use
//! [`fs::canonical`](crate::fs::canonical) when the live answer matters.
//!
//! ## Relative computation
//!
//! [`PurePath::lexically_relative`] expresses one path relative to another
//! from textual structure alone, returning `None` when the roots are
//! incompatible. [`PathRelationship`] classifies two paths as
//! ancestor/descendant/same/unrelated.
//!
//! # Examples
//!
//! ```
//! use fspath::{PathRelationship, PurePath};
//!
//! let path = PurePath::from("/srv/data/../logs/app.log");
//! assert_eq!(path.lexically_normal(), PurePath::from("/srv/logs/app.log"));
//! assert_eq!(path.extension(), Some(".log"));
//!
//! let rel = PathRelationship::between(
//!     &PurePath::from("/srv"),
//!     &PurePath::from("/srv/logs"),
//! );
//! assert_eq!(rel, PathRelationship::Ancestor);
//! ```

pub mod component;
mod normalize;
pub mod relative;
mod pure;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use component::{Component, Components};
pub use pure::{Ancestors, PurePath};
pub use relative::PathRelationship;
