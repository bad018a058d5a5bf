/*!
 * Merge Error Types
 * Operation-level failures that abort the whole merge
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineError;
use crate::vfs::VfsError;

/// Merge operation result
#[must_use = "merge failures abort the operation and must be handled"]
pub type MergeResult<T> = Result<T, MergeError>;

/// Errors aborting a merge operation
///
/// No partial artifact survives any of these; the filesystem and its
/// intermediates are discarded with the operation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum MergeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Engine failed with exit code {code}")]
    Engine { code: i32 },

    #[error(transparent)]
    Load(#[from] EngineError),

    /// A VFS error reaching this level means the orchestrator drove the
    /// filesystem wrong; it is an internal-contract violation, not an
    /// expected runtime condition.
    #[error(transparent)]
    Vfs(#[from] VfsError),
}
