/*!
 * Metadata Operations
 * stat/fstat, working directory, and the no-op metadata surface
 */

use super::super::console::{STDERR_FD, STDOUT_FD};
use super::super::types::*;
use super::MemFs;

impl MemFs {
    /// Stat a path
    pub fn stat(&self, path: &str) -> VfsResult<Metadata> {
        let abs = self.normalize(path);
        self.nodes
            .get(&abs)
            .map(|node| node.metadata())
            .ok_or(VfsError::NotFound(abs))
    }

    /// Stat an open descriptor
    ///
    /// The standard output streams report as empty files so the engine's
    /// startup fstat probe succeeds.
    pub fn fstat(&self, fd: u32) -> VfsResult<Metadata> {
        if fd == STDOUT_FD || fd == STDERR_FD {
            return Ok(Node::new_file(Vec::new()).metadata());
        }
        let handle = self.fds.get(fd)?;
        self.nodes
            .get(&handle.path)
            .map(|node| node.metadata())
            .ok_or(VfsError::NotFound(handle.path))
    }

    /// Current working directory
    pub fn cwd(&self) -> String {
        self.cwd.read().clone()
    }

    /// Change the working directory; the target must be an existing directory
    pub fn set_cwd(&self, path: &str) -> VfsResult<()> {
        let abs = self.normalize(path);
        match self.nodes.get(&abs) {
            Some(node) if node.is_dir() => {
                *self.cwd.write() = abs;
                Ok(())
            }
            Some(_) => Err(VfsError::NotADirectory(abs)),
            None => Err(VfsError::NotFound(abs)),
        }
    }

    /// Permission/ownership/timestamp/sync calls the engine issues but never
    /// inspects beyond success. Accepted as no-ops.
    pub fn chmod(&self, _path: &str, _mode: u32) -> VfsResult<()> {
        Ok(())
    }

    pub fn chown(&self, _path: &str, _uid: u32, _gid: u32) -> VfsResult<()> {
        Ok(())
    }

    pub fn fchmod(&self, _fd: u32, _mode: u32) -> VfsResult<()> {
        Ok(())
    }

    pub fn fchown(&self, _fd: u32, _uid: u32, _gid: u32) -> VfsResult<()> {
        Ok(())
    }

    pub fn truncate(&self, _path: &str, _len: u64) -> VfsResult<()> {
        Ok(())
    }

    pub fn ftruncate(&self, _fd: u32, _len: u64) -> VfsResult<()> {
        Ok(())
    }

    pub fn utimes(&self, _path: &str, _atime_ms: u64, _mtime_ms: u64) -> VfsResult<()> {
        Ok(())
    }

    pub fn fsync(&self, _fd: u32) -> VfsResult<()> {
        Ok(())
    }

    /// Link-family operations are part of the bound ABI surface but this
    /// filesystem never materializes links.
    pub fn readlink(&self, path: &str) -> VfsResult<String> {
        Err(VfsError::NotSupported(format!("readlink: {}", path)))
    }

    pub fn symlink(&self, _target: &str, link: &str) -> VfsResult<()> {
        Err(VfsError::NotSupported(format!("symlink: {}", link)))
    }

    pub fn link(&self, _target: &str, link: &str) -> VfsResult<()> {
        Err(VfsError::NotSupported(format!("link: {}", link)))
    }
}
