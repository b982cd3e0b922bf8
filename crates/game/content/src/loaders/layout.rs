//! Maze layout loader.
//!
//! Loads walls, food, capsules and agent starts from `.lay` text files.

use std::path::Path;

use capture_core::Layout;

use crate::loaders::{LoadResult, read_file};

/// Loader for maze layouts.
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load a layout from a `.lay` file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the layout text file
    pub fn load(path: &Path) -> LoadResult<Layout> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse layout {}: {}", path.display(), e))
    }

    /// Parse layout text that is already in memory.
    pub fn parse(content: &str) -> LoadResult<Layout> {
        Ok(Layout::parse(content)?)
    }
}
