//! Core model shared by every javelin crate.
//!
//! Public API surface:
//! - [`types`]: newtypes and manifest structs
//! - [`error`]: [`ManifestError`]
//! - [`manifest`]: load / save / scaffold / record dependency
//! - [`layout`]: [`Layout`] project path resolution
//!
//! Every operation takes the project root (or a [`Layout`] derived from it)
//! explicitly; the crate holds no global state.

pub mod error;
pub mod layout;
pub mod manifest;
pub mod types;

pub use error::ManifestError;
pub use layout::Layout;
pub use types::{Dependency, DependencyOrigin, MainClass, Manifest};
