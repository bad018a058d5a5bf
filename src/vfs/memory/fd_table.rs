/*!
 * File Descriptor Table
 * Monotonic descriptor allocation above the reserved standard streams
 */

use ahash::RandomState;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use super::super::types::{VfsError, VfsResult};

/// First descriptor handed out; 0/1/2 are reserved for the standard streams
/// and everything below the base stays unused for clarity in engine traces.
const FD_BASE: u32 = 20;

/// An open file: the canonical path it refers to and its byte cursor
#[derive(Debug, Clone)]
pub struct FdHandle {
    pub path: String,
    pub position: usize,
}

/// Open-descriptor table
///
/// Descriptors are allocated monotonically and never reused while held;
/// after close the number may come around again only on counter wrap.
#[derive(Debug)]
pub struct FdTable {
    next_fd: AtomicU32,
    handles: DashMap<u32, FdHandle, RandomState>,
}

impl FdTable {
    pub fn new() -> Self {
        Self {
            next_fd: AtomicU32::new(FD_BASE),
            handles: DashMap::with_hasher(RandomState::new()),
        }
    }

    /// Allocate a descriptor for the given path with the cursor preset
    pub fn allocate(&self, path: String, position: usize) -> u32 {
        let fd = self.next_fd.fetch_add(1, Ordering::SeqCst);
        self.handles.insert(fd, FdHandle { path, position });
        fd
    }

    /// Release a descriptor
    pub fn release(&self, fd: u32) -> VfsResult<()> {
        self.handles
            .remove(&fd)
            .map(|_| ())
            .ok_or(VfsError::BadDescriptor(fd))
    }

    /// Snapshot the handle behind a descriptor
    pub fn get(&self, fd: u32) -> VfsResult<FdHandle> {
        self.handles
            .get(&fd)
            .map(|h| h.clone())
            .ok_or(VfsError::BadDescriptor(fd))
    }

    /// Advance the stored cursor to an absolute position
    pub fn set_position(&self, fd: u32, position: usize) -> VfsResult<()> {
        let mut handle = self.handles.get_mut(&fd).ok_or(VfsError::BadDescriptor(fd))?;
        handle.position = position;
        Ok(())
    }

    pub fn is_open(&self, fd: u32) -> bool {
        self.handles.contains_key(&fd)
    }
}

impl Default for FdTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_is_monotonic() {
        let table = FdTable::new();
        let a = table.allocate("/work/a.pdf".into(), 0);
        let b = table.allocate("/work/b.pdf".into(), 0);
        assert!(a >= FD_BASE);
        assert!(b > a);
    }

    #[test]
    fn test_release_unknown_fd() {
        let table = FdTable::new();
        assert_eq!(table.release(99), Err(VfsError::BadDescriptor(99)));
    }

    #[test]
    fn test_no_reuse_while_held() {
        let table = FdTable::new();
        let a = table.allocate("/work/a.pdf".into(), 0);
        table.release(a).unwrap();
        let b = table.allocate("/work/a.pdf".into(), 0);
        assert_ne!(a, b);
    }
}
