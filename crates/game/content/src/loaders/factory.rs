//! Content factory for loading match inputs from a data directory.

use std::path::{Path, PathBuf};

use capture_core::{AgentConfig, Layout};

use crate::loaders::{ConfigLoader, LayoutLoader, LoadResult};

/// Content factory that loads match content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── layouts/
///     ├── default_capture.lay
///     └── ...
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load agent tunables from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<AgentConfig> {
        let path = self.data_dir.join("config.toml");
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            Ok(AgentConfig::default())
        }
    }

    /// Load `layouts/<name>.lay`.
    pub fn load_layout(&self, name: &str) -> LoadResult<Layout> {
        let path = self.data_dir.join("layouts").join(format!("{name}.lay"));
        LayoutLoader::load(&path)
    }
}
