/*!
 * In-Memory Filesystem Backend
 * Volatile single-tenant store, created fresh for each merge operation
 */

mod dir_ops;
mod fd_table;
mod file_ops;
mod metadata_ops;

use ahash::RandomState;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;

use super::console::{ConsoleSink, LogSink};
use super::paths;
use super::types::*;
use fd_table::FdTable;

/// In-memory filesystem with an open-descriptor table
///
/// One instance backs exactly one merge operation and is discarded when the
/// operation concludes, success or failure. Root, `/tmp` and `/work` exist
/// from construction.
#[derive(Clone)]
pub struct MemFs {
    nodes: Arc<DashMap<String, Node, RandomState>>,
    fds: Arc<FdTable>,
    cwd: Arc<RwLock<String>>,
    console: Arc<dyn ConsoleSink>,
}

impl MemFs {
    /// Create a filesystem with engine console output forwarded to the log
    pub fn new() -> Self {
        Self::with_console(Arc::new(LogSink))
    }

    /// Create a filesystem with a caller-provided console sink
    pub fn with_console(console: Arc<dyn ConsoleSink>) -> Self {
        let nodes: DashMap<String, Node, RandomState> = DashMap::with_hasher(RandomState::new());
        nodes.insert(paths::ROOT.to_string(), Node::new_dir());

        let fs = Self {
            nodes: Arc::new(nodes),
            fds: Arc::new(FdTable::new()),
            cwd: Arc::new(RwLock::new(paths::ROOT.to_string())),
            console,
        };

        for dir in paths::standard_directories() {
            // Root exists, parents are in creation order: cannot fail.
            let _ = fs.mkdir(dir);
        }

        fs
    }

    /// Canonicalize a path against the current working directory
    fn normalize(&self, path: &str) -> String {
        paths::resolve(path, &self.cwd.read())
    }

    /// Verify the parent of `path` exists and is a directory
    fn ensure_parent(&self, path: &str) -> VfsResult<String> {
        let parent = paths::parent(path)
            .ok_or_else(|| VfsError::InvalidPath(format!("no parent for: {}", path)))?;
        match self.nodes.get(&parent) {
            Some(node) if node.is_dir() => Ok(parent),
            Some(_) => Err(VfsError::NotADirectory(parent)),
            None => Err(VfsError::NotFound(format!("missing parent: {}", parent))),
        }
    }

    /// Record `child_name` under its parent directory
    fn add_child(&self, parent: &str, child_name: &str) {
        if let Some(mut node) = self.nodes.get_mut(parent) {
            if let Node::Directory { children, .. } = node.value_mut() {
                children.insert(child_name.to_string());
            }
        }
    }

    /// Drop `child_name` from its parent directory
    fn remove_child(&self, parent: &str, child_name: &str) {
        if let Some(mut node) = self.nodes.get_mut(parent) {
            if let Node::Directory { children, .. } = node.value_mut() {
                children.remove(child_name);
            }
        }
    }

    /// Create or replace a file with the given contents
    ///
    /// Orchestrator-facing convenience used to stage merge inputs; the engine
    /// itself goes through open/write/close.
    pub fn write_file(&self, path: &str, data: &[u8]) -> VfsResult<()> {
        let abs = self.normalize(path);
        let parent = self.ensure_parent(&abs)?;
        if let Some(existing) = self.nodes.get(&abs) {
            if existing.is_dir() {
                return Err(VfsError::IsADirectory(abs));
            }
        }
        let name = paths::file_name(&abs)
            .ok_or_else(|| VfsError::InvalidPath(abs.clone()))?
            .to_string();
        self.nodes.insert(abs, Node::new_file(data.to_vec()));
        self.add_child(&parent, &name);
        Ok(())
    }

    /// Read a file's full contents
    pub fn read_file(&self, path: &str) -> VfsResult<Vec<u8>> {
        let abs = self.normalize(path);
        match self.nodes.get(&abs) {
            Some(node) => match node.value() {
                Node::File { data, .. } => Ok(data.clone()),
                Node::Directory { .. } => Err(VfsError::IsADirectory(abs)),
            },
            None => Err(VfsError::NotFound(abs)),
        }
    }

    /// Check whether a path resolves to any entry
    pub fn exists(&self, path: &str) -> bool {
        self.nodes.contains_key(&self.normalize(path))
    }
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemFs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemFs")
            .field("entries", &self.nodes.len())
            .field("cwd", &*self.cwd.read())
            .finish()
    }
}
