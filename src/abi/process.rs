/*!
 * Process Identity Surface
 * Minimal process/environment accessors the engine expects at startup
 */

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::vfs::{MemFs, VfsResult};

/// Process-identity capability
///
/// The engine only ever checks these for plausibility; the values model a
/// single root-owned process with pid 1.
#[derive(Debug, Clone)]
pub struct ProcessIdentity {
    fs: Arc<MemFs>,
    env: Arc<RwLock<HashMap<String, String>>>,
}

impl ProcessIdentity {
    pub fn new(fs: Arc<MemFs>, env: HashMap<String, String>) -> Self {
        Self {
            fs,
            env: Arc::new(RwLock::new(env)),
        }
    }

    #[inline]
    pub fn pid(&self) -> u32 {
        1
    }

    #[inline]
    pub fn ppid(&self) -> u32 {
        1
    }

    #[inline]
    pub fn uid(&self) -> u32 {
        0
    }

    #[inline]
    pub fn gid(&self) -> u32 {
        0
    }

    #[inline]
    pub fn euid(&self) -> u32 {
        0
    }

    #[inline]
    pub fn egid(&self) -> u32 {
        0
    }

    #[inline]
    pub fn groups(&self) -> Vec<u32> {
        Vec::new()
    }

    #[inline]
    pub fn umask(&self) -> u32 {
        0
    }

    /// Working directory, delegated to the filesystem
    pub fn cwd(&self) -> String {
        self.fs.cwd()
    }

    /// Change working directory, delegated to the filesystem
    pub fn chdir(&self, path: &str) -> VfsResult<()> {
        self.fs.set_cwd(path)
    }

    pub fn env_get(&self, key: &str) -> Option<String> {
        self.env.read().get(key).cloned()
    }

    pub fn env_set(&self, key: &str, value: &str) {
        self.env.write().insert(key.to_string(), value.to_string());
    }

    pub fn env_snapshot(&self) -> HashMap<String, String> {
        self.env.read().clone()
    }
}
