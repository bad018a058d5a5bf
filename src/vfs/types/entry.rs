/*!
 * Filesystem Node Types
 * Internal representation of files and directories
 */

use std::collections::HashSet;
use std::time::SystemTime;

use super::file_type::FileType;
use super::metadata::{epoch_ms, Metadata};

/// In-memory filesystem node
///
/// Invariant: every node's parent path resolves to an existing `Directory`
/// (the store pre-creates root, which has no parent).
#[derive(Debug, Clone)]
pub enum Node {
    File {
        data: Vec<u8>,
        created: SystemTime,
        modified: SystemTime,
        accessed: SystemTime,
    },
    Directory {
        children: HashSet<String>,
        created: SystemTime,
        modified: SystemTime,
        accessed: SystemTime,
    },
}

impl Node {
    /// New empty directory with current timestamps
    pub fn new_dir() -> Self {
        let now = SystemTime::now();
        Node::Directory {
            children: HashSet::new(),
            created: now,
            modified: now,
            accessed: now,
        }
    }

    /// New file owning the given bytes, current timestamps
    pub fn new_file(data: Vec<u8>) -> Self {
        let now = SystemTime::now();
        Node::File {
            data,
            created: now,
            modified: now,
            accessed: now,
        }
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn file_type(&self) -> FileType {
        match self {
            Node::File { .. } => FileType::File,
            Node::Directory { .. } => FileType::Directory,
        }
    }

    /// Size in bytes; directories report 0
    pub fn size(&self) -> u64 {
        match self {
            Node::File { data, .. } => data.len() as u64,
            Node::Directory { .. } => 0,
        }
    }

    pub fn metadata(&self) -> Metadata {
        let (created, modified, accessed) = match self {
            Node::File {
                created,
                modified,
                accessed,
                ..
            }
            | Node::Directory {
                created,
                modified,
                accessed,
                ..
            } => (*created, *modified, *accessed),
        };
        Metadata {
            file_type: self.file_type(),
            size: self.size(),
            created_ms: epoch_ms(created),
            modified_ms: epoch_ms(modified),
            accessed_ms: epoch_ms(accessed),
        }
    }

    /// Bump last-modification time
    pub fn touch_modified(&mut self) {
        match self {
            Node::File { modified, .. } | Node::Directory { modified, .. } => {
                *modified = SystemTime::now();
            }
        }
    }

    /// Bump last-access time
    pub fn touch_accessed(&mut self) {
        match self {
            Node::File { accessed, .. } | Node::Directory { accessed, .. } => {
                *accessed = SystemTime::now();
            }
        }
    }
}
