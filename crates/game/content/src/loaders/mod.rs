//! Content loaders for reading match data from files.
//!
//! Layouts use the plain-text maze format parsed by [`capture_core::Layout`];
//! agent tunables are TOML documents deserialized into
//! [`capture_core::AgentConfig`].

pub mod config;
pub mod factory;
pub mod layout;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use layout::LayoutLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
