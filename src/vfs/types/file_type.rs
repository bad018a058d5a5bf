/*!
 * File Type
 * Entry kind tag for stat results
 */

use serde::{Deserialize, Serialize};

/// Kind of a filesystem entry
///
/// Symbolic links are never created by this filesystem; the variant list is
/// deliberately closed so `is_symlink` checks from the engine always see false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    File,
    Directory,
}

impl FileType {
    #[inline]
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, FileType::File)
    }

    #[inline]
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self, FileType::Directory)
    }
}
