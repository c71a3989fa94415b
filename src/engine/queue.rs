use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::logger::trace;
use crate::vendor::{locate_module_root_on_disk, ModuleRoot};

/// Entries grouped by the module that owns them, in first-seen order. Each
/// root appears once, so no two workers ever receive the same module.
#[derive(Debug, Default)]
pub struct RootQueue {
    roots: IndexMap<ModuleRoot, Vec<PathBuf>>,
}

impl RootQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locates the owner of every entry (joined onto `base_dir`).
    pub fn from_entries(base_dir: &Path, entries: &[String]) -> Result<Self> {
        let mut queue = Self::new();
        for entry in entries {
            let path = base_dir.join(entry);
            let root = locate_module_root_on_disk(&path)?;
            queue.push(root, path);
        }
        Ok(queue)
    }

    pub fn push(&mut self, root: ModuleRoot, entry: PathBuf) {
        trace!(
            "RootQueue: {} -> {}",
            entry.display(),
            root.dir.display()
        );
        self.roots.entry(root).or_default().push(entry);
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn roots(&self) -> impl Iterator<Item = &ModuleRoot> {
        self.roots.keys()
    }

    pub fn root_at(&self, index: usize) -> Option<&ModuleRoot> {
        self.roots.get_index(index).map(|(root, _)| root)
    }

    /// Every entry path, grouped by root.
    pub fn entries(&self) -> impl Iterator<Item = &PathBuf> {
        self.roots.values().flatten()
    }

    pub fn entries_of(&self, root: &ModuleRoot) -> &[PathBuf] {
        self.roots.get(root).map(Vec::as_slice).unwrap_or_default()
    }
}
