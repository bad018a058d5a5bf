/*!
 * File Operations
 * Descriptor-based open/close/read/write
 */

use log::trace;

use super::super::console::{StdStream, STDERR_FD, STDOUT_FD};
use super::super::paths;
use super::super::types::*;
use super::MemFs;

impl MemFs {
    /// Open a path and allocate a descriptor
    ///
    /// `flags` is the raw bitmask the engine passes; `mode` (creation
    /// permissions) is accepted for ABI compatibility and ignored, since the
    /// store does not enforce permissions.
    pub fn open(&self, path: &str, flags: u32, _mode: u32) -> VfsResult<u32> {
        let abs = self.normalize(path);
        let decoded = OpenFlags::from_bits(flags);

        let exists = match self.nodes.get(&abs) {
            Some(node) => {
                if node.is_dir() {
                    return Err(VfsError::IsADirectory(abs));
                }
                true
            }
            None => false,
        };

        if !exists {
            if !decoded.create {
                return Err(VfsError::NotFound(abs));
            }
            let parent = self.ensure_parent(&abs)?;
            let name = paths::file_name(&abs)
                .ok_or_else(|| VfsError::InvalidPath(abs.clone()))?
                .to_string();
            self.nodes.insert(abs.clone(), Node::new_file(Vec::new()));
            self.add_child(&parent, &name);
        } else if decoded.is_exclusive_create() {
            return Err(VfsError::AlreadyExists(abs));
        }

        if decoded.truncate && decoded.write {
            if let Some(mut node) = self.nodes.get_mut(&abs) {
                if let Node::File { data, .. } = node.value_mut() {
                    data.clear();
                }
                node.touch_modified();
            }
        }

        let position = if decoded.append {
            self.nodes.get(&abs).map(|n| n.size() as usize).unwrap_or(0)
        } else {
            0
        };

        let fd = self.fds.allocate(abs.clone(), position);
        trace!("open {} flags={:#o} -> fd {}", abs, flags, fd);
        Ok(fd)
    }

    /// Release a descriptor
    pub fn close(&self, fd: u32) -> VfsResult<()> {
        self.fds.release(fd)
    }

    /// Read up to `len` bytes from a descriptor
    ///
    /// With `position` given, reads at that absolute offset and leaves the
    /// stored cursor alone; otherwise reads from the cursor and advances it.
    /// Returns fewer bytes near end-of-file and an empty buffer at it; EOF is
    /// never an error. The standard streams are not readable.
    pub fn read(&self, fd: u32, len: usize, position: Option<usize>) -> VfsResult<Vec<u8>> {
        let handle = self.fds.get(fd)?;
        let pos = position.unwrap_or(handle.position);

        let out = {
            let mut node = self
                .nodes
                .get_mut(&handle.path)
                .ok_or_else(|| VfsError::NotFound(handle.path.clone()))?;
            let data = match node.value() {
                Node::File { data, .. } => data,
                Node::Directory { .. } => return Err(VfsError::IsADirectory(handle.path.clone())),
            };
            // A cursor past end-of-file reads zero bytes, it does not error.
            let start = pos.min(data.len());
            let to_read = len.min(data.len() - start);
            let out = data[start..start + to_read].to_vec();
            node.touch_accessed();
            out
        };

        if position.is_none() {
            self.fds.set_position(fd, pos + out.len())?;
        }
        Ok(out)
    }

    /// Write bytes through a descriptor
    ///
    /// Writes extending past the current length grow the buffer; a skipped
    /// gap is zero-filled so the file contents stay deterministic. Writes to
    /// descriptors 1 and 2 are captured as console output instead of stored.
    pub fn write(&self, fd: u32, bytes: &[u8], position: Option<usize>) -> VfsResult<usize> {
        if fd == STDOUT_FD || fd == STDERR_FD {
            self.capture_console(fd, bytes);
            return Ok(bytes.len());
        }

        let handle = self.fds.get(fd)?;
        let pos = position.unwrap_or(handle.position);
        let end = pos + bytes.len();

        {
            let mut node = self
                .nodes
                .get_mut(&handle.path)
                .ok_or_else(|| VfsError::NotFound(handle.path.clone()))?;
            let data = match node.value_mut() {
                Node::File { data, .. } => data,
                Node::Directory { .. } => return Err(VfsError::IsADirectory(handle.path.clone())),
            };
            if end > data.len() {
                data.resize(end, 0);
            }
            data[pos..end].copy_from_slice(bytes);
            node.touch_modified();
        }

        if position.is_none() {
            self.fds.set_position(fd, end)?;
        }
        Ok(bytes.len())
    }

    /// Split console bytes on line breaks and forward non-empty lines
    fn capture_console(&self, fd: u32, bytes: &[u8]) {
        let stream = if fd == STDERR_FD {
            StdStream::Stderr
        } else {
            StdStream::Stdout
        };
        let text = String::from_utf8_lossy(bytes);
        for line in text.split('\n') {
            let line = line.trim_end_matches('\r');
            if !line.trim().is_empty() {
                self.console.line(stream, line);
            }
        }
    }
}
