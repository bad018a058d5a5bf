/*!
 * VFS Open Flags
 * POSIX-style open flag bits and their decoded form
 */

use serde::{Deserialize, Serialize};

// Flag bit values the engine's host runtime passes verbatim.
// These numbers are part of the ABI contract and must not change.
pub const O_RDONLY: u32 = 0;
pub const O_WRONLY: u32 = 1;
pub const O_RDWR: u32 = 2;
pub const O_CREAT: u32 = 64;
pub const O_EXCL: u32 = 128;
pub const O_TRUNC: u32 = 512;
pub const O_APPEND: u32 = 1024;
pub const O_DIRECTORY: u32 = 65536;

const ACCESS_MODE_MASK: u32 = 0b11;

/// Decoded open flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", default)]
pub struct OpenFlags {
    pub read: bool,
    pub write: bool,
    pub create: bool,
    pub create_new: bool,
    pub truncate: bool,
    pub append: bool,
}

impl OpenFlags {
    /// Decode a raw flag bitmask from the engine
    ///
    /// The low two bits are the access mode: 0 read-only, 1 write-only,
    /// 2 read-write.
    #[must_use]
    pub fn from_bits(flags: u32) -> Self {
        let access = flags & ACCESS_MODE_MASK;
        Self {
            read: access == O_RDONLY || access == O_RDWR,
            write: access == O_WRONLY || access == O_RDWR,
            create: flags & O_CREAT != 0,
            create_new: flags & O_EXCL != 0,
            truncate: flags & O_TRUNC != 0,
            append: flags & O_APPEND != 0,
        }
    }

    /// Read-only flags
    #[inline]
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            read: true,
            ..Default::default()
        }
    }

    /// Write + create flags, as used for staging merge inputs
    #[inline]
    #[must_use]
    pub fn create() -> Self {
        Self {
            write: true,
            create: true,
            ..Default::default()
        }
    }

    /// Exclusive-create collision is only meaningful alongside create
    #[inline]
    #[must_use]
    pub const fn is_exclusive_create(&self) -> bool {
        self.create && self.create_new
    }
}
