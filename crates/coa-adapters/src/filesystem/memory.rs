//! In-memory filesystem adapter for testing.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use coa_core::application::ports::Filesystem;

/// In-memory filesystem for testing: tracks path presence only, which is
/// all the prompt flow and scaffold guard consult.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    paths: Arc<RwLock<HashSet<PathBuf>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a path as existing (testing helper).
    pub fn touch(&self, path: impl Into<PathBuf>) {
        self.paths.write().unwrap().insert(path.into());
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.paths.read().unwrap().contains(path)
    }
}
