/*!
 * Engine Capability
 * Seam to the pre-built PDF engine running inside the bytecode host
 */

pub mod image;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::abi::HostEnv;

// Re-exports
pub use image::{CachedImageSource, HttpImageSource, ImageSource};

/// Program name the engine sees as argv[0]
pub const ENGINE_PROGRAM: &str = "pdfcpu.wasm";

/// Errors from loading or running the engine
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum EngineError {
    #[error("Engine binary image could not be retrieved: {0}")]
    Load(String),

    #[error("Engine instantiation failed: {0}")]
    Instantiate(String),
}

/// One engine invocation: positional arguments plus environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub argv: Vec<String>,
    pub env: HashMap<String, String>,
}

impl Invocation {
    /// Build a merge invocation
    ///
    /// Layout the engine parses: program name, `merge` subcommand, optional
    /// divider flag, `-c disable` (merge needs no config dir), `--`
    /// separator, output path, then input paths in order.
    pub fn merge(output: &str, inputs: &[String], divider: bool) -> Self {
        let mut argv = vec![ENGINE_PROGRAM.to_string(), "merge".to_string()];
        if divider {
            argv.push("-d".to_string());
        }
        argv.push("-c".to_string());
        argv.push("disable".to_string());
        argv.push("--".to_string());
        argv.push(output.to_string());
        argv.extend(inputs.iter().cloned());

        let mut env = HashMap::new();
        env.insert("TMPDIR".to_string(), crate::vfs::paths::TMP.to_string());
        env.insert("HOME".to_string(), crate::vfs::paths::ROOT.to_string());

        Self { argv, env }
    }
}

/// Runs the compiled engine against an installed host environment
///
/// Implementations own fetching the binary image and driving the bytecode
/// host; the returned exit status is the sole signal of pass success. The
/// future must resolve (or fail) before the orchestrator starts the next
/// pass.
pub trait EngineRunner: Send + Sync {
    fn run<'a>(
        &'a self,
        env: &'a HostEnv,
        invocation: &'a Invocation,
    ) -> BoxFuture<'a, Result<i32, EngineError>>;
}
