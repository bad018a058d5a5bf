/*!
 * Merge Orchestration Module
 * Pass planning, staging, and sequencing of engine invocations
 */

pub mod artifact;
pub mod errors;
pub mod options;
pub mod orchestrator;
pub mod plan;
pub mod status;

// Re-exports
pub use artifact::{Artifact, ArtifactSlot};
pub use errors::{MergeError, MergeResult};
pub use options::{output_filename, InputDocument, MergeOptions, Selection, MAX_INPUTS};
pub use orchestrator::Merger;
pub use plan::{plan_passes, Pass};
pub use status::StatusLog;
