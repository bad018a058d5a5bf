/*!
 * Host Environment Installer
 * The complete binding set one engine invocation discovers at startup
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::vfs::types::{O_APPEND, O_CREAT, O_DIRECTORY, O_EXCL, O_RDONLY, O_RDWR, O_TRUNC, O_WRONLY};
use crate::vfs::{paths, MemFs};

use super::bridge::HostFs;
use super::process::ProcessIdentity;

/// Open-flag constants installed alongside the filesystem bindings
///
/// The numeric values are part of the engine's ABI and are asserted exact in
/// tests; the struct exists so an embedder can serialize the whole set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FlagConstants {
    pub o_rdonly: u32,
    pub o_wronly: u32,
    pub o_rdwr: u32,
    pub o_creat: u32,
    pub o_excl: u32,
    pub o_trunc: u32,
    pub o_append: u32,
    pub o_directory: u32,
}

impl Default for FlagConstants {
    fn default() -> Self {
        Self {
            o_rdonly: O_RDONLY,
            o_wronly: O_WRONLY,
            o_rdwr: O_RDWR,
            o_creat: O_CREAT,
            o_excl: O_EXCL,
            o_trunc: O_TRUNC,
            o_append: O_APPEND,
            o_directory: O_DIRECTORY,
        }
    }
}

/// One installed host environment
///
/// Built fresh immediately before each engine pass, over the single VFS
/// instance that is the source of truth for the whole merge operation. Two
/// environments are never live concurrently because passes run strictly
/// sequentially.
#[derive(Debug, Clone)]
pub struct HostEnv {
    fs: HostFs,
    process: ProcessIdentity,
    constants: FlagConstants,
}

impl HostEnv {
    /// Install an environment over the given store with the given variables
    pub fn install(fs: Arc<MemFs>, env_vars: HashMap<String, String>) -> Self {
        Self {
            fs: HostFs::new(Arc::clone(&fs)),
            process: ProcessIdentity::new(fs, env_vars),
            constants: FlagConstants::default(),
        }
    }

    /// Filesystem capability
    pub fn fs(&self) -> &HostFs {
        &self.fs
    }

    /// Process-identity capability
    pub fn process(&self) -> &ProcessIdentity {
        &self.process
    }

    /// Open-flag constants
    pub fn constants(&self) -> FlagConstants {
        self.constants
    }

    /// `path.resolve` equivalent: canonicalize against the live cwd
    pub fn resolve(&self, path: &str) -> String {
        paths::resolve(path, &self.fs.inner().cwd())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_constants_are_abi_exact() {
        let constants = FlagConstants::default();
        assert_eq!(constants.o_rdonly, 0);
        assert_eq!(constants.o_wronly, 1);
        assert_eq!(constants.o_rdwr, 2);
        assert_eq!(constants.o_creat, 64);
        assert_eq!(constants.o_excl, 128);
        assert_eq!(constants.o_trunc, 512);
        assert_eq!(constants.o_append, 1024);
        assert_eq!(constants.o_directory, 65536);
    }

    #[test]
    fn test_resolve_tracks_cwd() {
        let fs = Arc::new(MemFs::new());
        let env = HostEnv::install(Arc::clone(&fs), HashMap::new());
        assert_eq!(env.resolve("work/../tmp"), "/tmp");
        fs.set_cwd("/work").unwrap();
        assert_eq!(env.resolve("out.pdf"), "/work/out.pdf");
    }
}
