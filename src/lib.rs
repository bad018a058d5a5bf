/*!
 * JoinPDF Core Library
 * In-memory host environment and merge orchestrator for a WASM-compiled PDF engine
 */

pub mod abi;
pub mod cover;
pub mod engine;
pub mod merge;
pub mod vfs;

// Re-exports
pub use abi::{AbiError, Errno, HostEnv, HostFs, ProcessIdentity};
pub use cover::{build_cover_pdf, CoverText};
pub use engine::{
    CachedImageSource, EngineError, EngineRunner, HttpImageSource, ImageSource, Invocation,
};
pub use merge::{
    InputDocument, MergeError, MergeOptions, Merger, Pass, Selection, StatusLog, MAX_INPUTS,
};
pub use vfs::{ConsoleSink, MemFs, VfsError, VfsResult};
