//! Data-driven match content and loaders.
//!
//! This crate reads the static inputs of a match from disk:
//! - Maze layouts in the text `.lay` format
//! - Agent tunables (data-driven via TOML)
//!
//! Content is turned into `capture-core` values and never appears in the
//! decision engine directly.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LayoutLoader};
