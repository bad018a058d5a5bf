/*!
 * Merge Orchestrator
 * Stages inputs, sequences engine passes, and reads back the result
 */

use bytes::Bytes;
use log::{info, warn};
use std::sync::Arc;
use tracing::Instrument;

use crate::abi::HostEnv;
use crate::cover::build_cover_pdf;
use crate::engine::{EngineRunner, Invocation};
use crate::vfs::MemFs;

use super::artifact::Artifact;
use super::errors::{MergeError, MergeResult};
use super::options::{output_filename, MergeOptions, Selection, MAX_INPUTS};
use super::plan::{plan_passes, work_paths, Pass};
use super::status::StatusLog;

/// Drives one or two engine passes over a fresh per-operation filesystem
///
/// The filesystem lives exactly as long as one `merge` call; nothing persists
/// between operations. Passes run strictly sequentially because the second
/// pass consumes the first one's output file.
pub struct Merger<R> {
    runner: R,
    status: StatusLog,
}

impl<R: EngineRunner> Merger<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            status: StatusLog::new(),
        }
    }

    /// User-facing progress history
    pub fn status(&self) -> &StatusLog {
        &self.status
    }

    /// The engine capability this merger drives
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Merge the selection into a single document, returning its bytes
    pub async fn merge(&self, selection: &Selection, options: &MergeOptions) -> MergeResult<Bytes> {
        if selection.truncated() {
            self.status.append(format!(
                "You selected {} files. Only the first {} will be merged.",
                selection.all_names().len(),
                MAX_INPUTS
            ));
        }
        self.validate(selection)?;
        self.status.append("Merging...");

        let result = self.run_passes(selection, options).await;
        match &result {
            Ok(bytes) => {
                info!("merge complete ({} bytes)", bytes.len());
                self.status.append("Merge complete.");
            }
            Err(err) => {
                warn!("merge failed: {}", err);
                self.status.append(format!("Error: {}", err));
            }
        }
        result
    }

    /// Merge and wrap the result as a named downloadable artifact
    ///
    /// `raw_name` is the user's filename input; see [`output_filename`] for
    /// the applied rules.
    pub async fn merge_to_artifact(
        &self,
        selection: &Selection,
        options: &MergeOptions,
        raw_name: &str,
    ) -> MergeResult<Artifact> {
        let data = self.merge(selection, options).await?;
        Ok(Artifact::new(output_filename(raw_name), data))
    }

    fn validate(&self, selection: &Selection) -> MergeResult<()> {
        if selection.len() < 2 {
            return Err(MergeError::InvalidInput(
                "select at least 2 PDF files".to_string(),
            ));
        }
        for doc in selection.documents() {
            if !doc.looks_like_pdf() {
                return Err(MergeError::InvalidInput(format!(
                    "not a PDF file: {}",
                    doc.name
                )));
            }
        }
        Ok(())
    }

    async fn run_passes(
        &self,
        selection: &Selection,
        options: &MergeOptions,
    ) -> MergeResult<Bytes> {
        // Fresh store per operation; dropped (with any intermediates) on
        // every exit path.
        let fs = Arc::new(MemFs::with_console(Arc::new(self.status.clone())));

        for (idx, doc) in selection.documents().iter().enumerate() {
            fs.write_file(&work_paths::input(idx), &doc.data)?;
        }

        if options.add_cover {
            let names: Vec<String> = selection
                .documents()
                .iter()
                .map(|d| d.name.clone())
                .collect();
            let cover = build_cover_pdf(&names, &options.cover_text);
            fs.write_file(work_paths::COVER, &cover)?;
        }

        let passes = plan_passes(selection.len(), options);
        let announce = passes.len() > 1;

        let mut final_output = work_paths::OUTPUT.to_string();
        for (number, pass) in passes.iter().enumerate() {
            if announce {
                self.status.append(pass_announcement(number));
            }
            self.run_pass(&fs, pass, number + 1)
                .instrument(tracing::info_span!(
                    "engine_pass",
                    pass = number + 1,
                    divider = pass.divider
                ))
                .await?;
            final_output = pass.output.clone();
        }

        Ok(Bytes::from(fs.read_file(&final_output)?))
    }

    async fn run_pass(&self, fs: &Arc<MemFs>, pass: &Pass, number: usize) -> MergeResult<()> {
        let invocation = Invocation::merge(&pass.output, &pass.inputs, pass.divider);
        // The engine discovers its environment ambiently at startup; install
        // a fresh one over the shared store before every invocation.
        let env = HostEnv::install(Arc::clone(fs), invocation.env.clone());

        info!(
            "pass {}: {} inputs -> {} (divider: {})",
            number,
            pass.inputs.len(),
            pass.output,
            pass.divider
        );

        let code = self.runner.run(&env, &invocation).await?;
        if code != 0 {
            return Err(MergeError::Engine { code });
        }
        Ok(())
    }
}

fn pass_announcement(index: usize) -> &'static str {
    match index {
        0 => "Running pass 1/2: merge documents with divider pages...",
        _ => "Running pass 2/2: prepend cover page...",
    }
}
