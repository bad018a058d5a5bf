/*!
 * Console Capture
 * Sink for engine output written to the reserved stdout/stderr descriptors
 */

use parking_lot::Mutex;
use std::sync::Arc;

/// Reserved standard stream descriptors
pub const STDIN_FD: u32 = 0;
pub const STDOUT_FD: u32 = 1;
pub const STDERR_FD: u32 = 2;

/// Which standard stream a captured line arrived on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdStream {
    Stdout,
    Stderr,
}

/// Receives engine console output line by line
///
/// Writes to descriptors 1 and 2 are never stored in the filesystem; they are
/// split on line breaks and each non-empty line is forwarded here.
pub trait ConsoleSink: Send + Sync {
    fn line(&self, stream: StdStream, line: &str);
}

/// Default sink forwarding engine output to the log
#[derive(Debug, Default, Clone)]
pub struct LogSink;

impl ConsoleSink for LogSink {
    fn line(&self, stream: StdStream, line: &str) {
        match stream {
            StdStream::Stdout => log::info!("engine: {}", line),
            StdStream::Stderr => log::warn!("engine: {}", line),
        }
    }
}

/// Collecting sink, mainly for tests and status reporting
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl ConsoleSink for BufferSink {
    fn line(&self, _stream: StdStream, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
