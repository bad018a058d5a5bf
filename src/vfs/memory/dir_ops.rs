/*!
 * Directory Operations
 * Directory lifecycle and namespace manipulation
 */

use log::trace;

use super::super::paths;
use super::super::types::*;
use super::MemFs;

impl MemFs {
    /// Create a directory
    ///
    /// Succeeds silently if the path already exists as a directory. The
    /// parent must already exist; there is no recursive creation.
    pub fn mkdir(&self, path: &str) -> VfsResult<()> {
        let abs = self.normalize(path);
        if let Some(existing) = self.nodes.get(&abs) {
            if existing.is_dir() {
                return Ok(());
            }
            return Err(VfsError::NotADirectory(abs));
        }

        let parent = self.ensure_parent(&abs)?;
        let name = paths::file_name(&abs)
            .ok_or_else(|| VfsError::InvalidPath(abs.clone()))?
            .to_string();
        self.nodes.insert(abs.clone(), Node::new_dir());
        self.add_child(&parent, &name);
        trace!("mkdir {}", abs);
        Ok(())
    }

    /// List the immediate child names of a directory
    pub fn readdir(&self, path: &str) -> VfsResult<Vec<String>> {
        let abs = self.normalize(path);
        match self.nodes.get(&abs) {
            Some(node) => match node.value() {
                Node::Directory { children, .. } => Ok(children.iter().cloned().collect()),
                Node::File { .. } => Err(VfsError::NotADirectory(abs)),
            },
            None => Err(VfsError::NotFound(abs)),
        }
    }

    /// Move an entry to a new path
    ///
    /// The node moves under the new key with identity and timestamps intact.
    /// Parent children sets are deliberately left alone: the engine renames
    /// its temp output into place and never lists either path afterwards.
    pub fn rename(&self, from: &str, to: &str) -> VfsResult<()> {
        let abs_from = self.normalize(from);
        let abs_to = self.normalize(to);

        if !self.nodes.contains_key(&abs_from) {
            return Err(VfsError::NotFound(abs_from));
        }
        self.ensure_parent(&abs_to)?;

        if let Some((_, node)) = self.nodes.remove(&abs_from) {
            self.nodes.insert(abs_to.clone(), node);
        }
        trace!("rename {} -> {}", abs_from, abs_to);
        Ok(())
    }

    /// Remove a file
    ///
    /// Directories are reported as not-found, matching the engine's host
    /// contract (unlink never applies to them here).
    pub fn unlink(&self, path: &str) -> VfsResult<()> {
        let abs = self.normalize(path);
        let is_file = self
            .nodes
            .get(&abs)
            .map(|node| node.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(VfsError::NotFound(abs));
        }

        self.nodes.remove(&abs);
        if let (Some(parent), Some(name)) = (paths::parent(&abs), paths::file_name(&abs)) {
            self.remove_child(&parent, name);
        }
        trace!("unlink {}", abs);
        Ok(())
    }

    /// Remove an empty directory
    pub fn rmdir(&self, path: &str) -> VfsResult<()> {
        let abs = self.normalize(path);
        match self.nodes.get(&abs) {
            Some(node) => match node.value() {
                Node::Directory { children, .. } if !children.is_empty() => {
                    return Err(VfsError::NotEmpty(abs))
                }
                Node::Directory { .. } => {}
                Node::File { .. } => return Err(VfsError::NotFound(abs)),
            },
            None => return Err(VfsError::NotFound(abs)),
        }

        self.nodes.remove(&abs);
        if let (Some(parent), Some(name)) = (paths::parent(&abs), paths::file_name(&abs)) {
            self.remove_child(&parent, name);
        }
        trace!("rmdir {}", abs);
        Ok(())
    }
}
