/*!
 * Filesystem Bridge
 * Callback-style adaptation of the VFS for the engine's host runtime
 */

use std::sync::Arc;

use crate::vfs::{MemFs, Metadata, VfsResult};

use super::error::AbiResult;

/// Filesystem capability the engine resolves at instantiation time
///
/// The backing store is synchronous, but the engine's host runtime binds
/// completion-callback signatures. Every method here finishes its work before
/// returning and invokes the completion argument exactly once, so callers are
/// free to assume either immediate or deferred delivery.
#[derive(Debug, Clone)]
pub struct HostFs {
    fs: Arc<MemFs>,
}

impl HostFs {
    pub fn new(fs: Arc<MemFs>) -> Self {
        Self { fs }
    }

    /// The underlying store, for the rest of the environment surface
    pub fn inner(&self) -> &Arc<MemFs> {
        &self.fs
    }

    fn complete<T, F>(result: VfsResult<T>, done: F)
    where
        F: FnOnce(AbiResult<T>),
    {
        done(result.map_err(Into::into));
    }

    pub fn open<F>(&self, path: &str, flags: u32, mode: u32, done: F)
    where
        F: FnOnce(AbiResult<u32>),
    {
        Self::complete(self.fs.open(path, flags, mode), done);
    }

    pub fn close<F>(&self, fd: u32, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.close(fd), done);
    }

    /// Read into the caller's buffer, completing with the byte count
    pub fn read<F>(&self, fd: u32, buf: &mut [u8], position: Option<usize>, done: F)
    where
        F: FnOnce(AbiResult<usize>),
    {
        let result = self.fs.read(fd, buf.len(), position).map(|bytes| {
            buf[..bytes.len()].copy_from_slice(&bytes);
            bytes.len()
        });
        Self::complete(result, done);
    }

    pub fn write<F>(&self, fd: u32, buf: &[u8], position: Option<usize>, done: F)
    where
        F: FnOnce(AbiResult<usize>),
    {
        Self::complete(self.fs.write(fd, buf, position), done);
    }

    pub fn stat<F>(&self, path: &str, done: F)
    where
        F: FnOnce(AbiResult<Metadata>),
    {
        Self::complete(self.fs.stat(path), done);
    }

    /// lstat aliases stat: no symlinks ever exist in the store
    pub fn lstat<F>(&self, path: &str, done: F)
    where
        F: FnOnce(AbiResult<Metadata>),
    {
        self.stat(path, done);
    }

    pub fn fstat<F>(&self, fd: u32, done: F)
    where
        F: FnOnce(AbiResult<Metadata>),
    {
        Self::complete(self.fs.fstat(fd), done);
    }

    pub fn readdir<F>(&self, path: &str, done: F)
    where
        F: FnOnce(AbiResult<Vec<String>>),
    {
        Self::complete(self.fs.readdir(path), done);
    }

    pub fn mkdir<F>(&self, path: &str, _perm: u32, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.mkdir(path), done);
    }

    pub fn rename<F>(&self, from: &str, to: &str, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.rename(from, to), done);
    }

    pub fn unlink<F>(&self, path: &str, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.unlink(path), done);
    }

    pub fn rmdir<F>(&self, path: &str, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.rmdir(path), done);
    }

    pub fn chmod<F>(&self, path: &str, mode: u32, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.chmod(path, mode), done);
    }

    pub fn chown<F>(&self, path: &str, uid: u32, gid: u32, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.chown(path, uid, gid), done);
    }

    pub fn fchmod<F>(&self, fd: u32, mode: u32, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.fchmod(fd, mode), done);
    }

    pub fn fchown<F>(&self, fd: u32, uid: u32, gid: u32, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.fchown(fd, uid, gid), done);
    }

    pub fn truncate<F>(&self, path: &str, len: u64, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.truncate(path, len), done);
    }

    pub fn ftruncate<F>(&self, fd: u32, len: u64, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.ftruncate(fd, len), done);
    }

    pub fn utimes<F>(&self, path: &str, atime_ms: u64, mtime_ms: u64, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.utimes(path, atime_ms, mtime_ms), done);
    }

    pub fn fsync<F>(&self, fd: u32, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.fsync(fd), done);
    }

    pub fn readlink<F>(&self, path: &str, done: F)
    where
        F: FnOnce(AbiResult<String>),
    {
        Self::complete(self.fs.readlink(path), done);
    }

    pub fn symlink<F>(&self, target: &str, link: &str, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.symlink(target, link), done);
    }

    pub fn link<F>(&self, target: &str, link: &str, done: F)
    where
        F: FnOnce(AbiResult<()>),
    {
        Self::complete(self.fs.link(target, link), done);
    }
}
