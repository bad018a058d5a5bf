/*!
 * Host-ABI Bridge Module
 * The operating environment surface the compiled engine binds against
 */

pub mod bridge;
pub mod env;
pub mod error;
pub mod process;

// Re-exports
pub use bridge::HostFs;
pub use env::{FlagConstants, HostEnv};
pub use error::{AbiError, AbiResult, Errno};
pub use process::ProcessIdentity;
