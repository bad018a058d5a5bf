/*!
 * Virtual Filesystem Module
 * Single-tenant in-memory filesystem for one merge operation
 */

pub mod console;
pub mod memory;
pub mod paths;
pub mod types;

// Re-exports
pub use console::{BufferSink, ConsoleSink, LogSink, StdStream};
pub use memory::MemFs;
pub use types::{FileType, Metadata, Node, OpenFlags, VfsError, VfsResult};
