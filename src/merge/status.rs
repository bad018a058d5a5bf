/*!
 * Status Log
 * Append-only user-facing progress history for one merge operation
 */

use parking_lot::Mutex;
use std::sync::Arc;

use crate::vfs::{ConsoleSink, StdStream};

/// Running status log
///
/// Lines are only ever appended, including the failure message, so the
/// history shows how far the operation got before failing (which of the
/// up-to-two passes, in particular). Doubles as the console sink for engine
/// output.
#[derive(Debug, Default, Clone)]
pub struct StatusLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the history
    pub fn append(&self, line: impl Into<String>) {
        let line = line.into();
        log::info!("status: {}", line);
        self.lines.lock().push(line);
    }

    /// Full history, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Most recent line, if any
    pub fn last(&self) -> Option<String> {
        self.lines.lock().last().cloned()
    }
}

impl ConsoleSink for StatusLog {
    fn line(&self, _stream: StdStream, line: &str) {
        self.append(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_preserve_history() {
        let log = StatusLog::new();
        log.append("Merging...");
        log.append("Error: engine failed");
        assert_eq!(log.snapshot(), vec!["Merging...", "Error: engine failed"]);
        assert_eq!(log.last().as_deref(), Some("Error: engine failed"));
    }
}
