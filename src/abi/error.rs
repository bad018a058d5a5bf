/*!
 * ABI Error Types
 * Errno-coded errors the engine's host runtime dispatches on
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vfs::VfsError;

/// Result type for bridged host calls
pub type AbiResult<T> = Result<T, AbiError>;

/// POSIX errno code names
///
/// The engine matches on the code string, not the message, so the names must
/// round-trip exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Errno {
    Enoent,
    Eisdir,
    Enotdir,
    Eexist,
    Enotempty,
    Ebadf,
    Einval,
    Enosys,
}

impl Errno {
    /// Code string as the engine expects it
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Errno::Enoent => "ENOENT",
            Errno::Eisdir => "EISDIR",
            Errno::Enotdir => "ENOTDIR",
            Errno::Eexist => "EEXIST",
            Errno::Enotempty => "ENOTEMPTY",
            Errno::Ebadf => "EBADF",
            Errno::Einval => "EINVAL",
            Errno::Enosys => "ENOSYS",
        }
    }
}

/// Error crossing the host-ABI boundary
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}: {message}", .errno.code())]
pub struct AbiError {
    pub errno: Errno,
    pub message: String,
}

impl AbiError {
    pub fn new(errno: Errno, message: impl Into<String>) -> Self {
        Self {
            errno,
            message: message.into(),
        }
    }
}

impl From<VfsError> for AbiError {
    fn from(err: VfsError) -> Self {
        let errno = match &err {
            VfsError::NotFound(_) => Errno::Enoent,
            VfsError::IsADirectory(_) => Errno::Eisdir,
            VfsError::NotADirectory(_) => Errno::Enotdir,
            VfsError::AlreadyExists(_) => Errno::Eexist,
            VfsError::NotEmpty(_) => Errno::Enotempty,
            VfsError::BadDescriptor(_) => Errno::Ebadf,
            VfsError::NotSupported(_) => Errno::Enosys,
            VfsError::InvalidPath(_) => Errno::Einval,
        };
        Self::new(errno, err.to_string())
    }
}
