/*!
 * VFS Types
 * Shared types for virtual filesystem operations
 */

mod entry;
mod errors;
mod file_type;
mod metadata;
mod open_flags;

pub use entry::Node;
pub use errors::{VfsError, VfsResult};
pub use file_type::FileType;
pub use metadata::Metadata;
pub use open_flags::{
    OpenFlags, O_APPEND, O_CREAT, O_DIRECTORY, O_EXCL, O_RDONLY, O_RDWR, O_TRUNC, O_WRONLY,
};
