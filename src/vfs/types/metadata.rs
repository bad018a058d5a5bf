/*!
 * Entry Metadata
 * Stat results with millisecond wall-clock timestamps
 */

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::file_type::FileType;

/// Metadata returned by stat/fstat
///
/// Timestamps are milliseconds since the Unix epoch, the unit the engine's
/// host runtime expects in stat results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub file_type: FileType,
    /// Size in bytes; 0 for directories
    pub size: u64,
    pub created_ms: u64,
    pub modified_ms: u64,
    pub accessed_ms: u64,
}

impl Metadata {
    #[inline]
    #[must_use]
    pub const fn is_file(&self) -> bool {
        self.file_type.is_file()
    }

    #[inline]
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.file_type.is_dir()
    }
}

/// Convert a wall-clock instant to epoch milliseconds
pub(crate) fn epoch_ms(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
