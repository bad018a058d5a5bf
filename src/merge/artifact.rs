/*!
 * Merged Artifact
 * The downloadable result and its single-occupancy slot
 */

use bytes::Bytes;

use parking_lot::Mutex;

/// A finished merge result offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub data: Bytes,
}

impl Artifact {
    pub fn new(filename: impl Into<String>, data: Bytes) -> Self {
        Self {
            filename: filename.into(),
            data,
        }
    }
}

/// Holds at most one artifact
///
/// Publishing drops the previous artifact before the new one is stored, and
/// `clear` releases it outright, mirroring how a download handle must be
/// revoked before a replacement is offered.
#[derive(Debug, Default)]
pub struct ArtifactSlot {
    current: Mutex<Option<Artifact>>,
}

impl ArtifactSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held artifact, releasing any previous one first
    pub fn publish(&self, artifact: Artifact) {
        let mut slot = self.current.lock();
        slot.take();
        *slot = Some(artifact);
    }

    /// Release the held artifact
    pub fn clear(&self) {
        self.current.lock().take();
    }

    pub fn current(&self) -> Option<Artifact> {
        self.current.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_replaces_previous() {
        let slot = ArtifactSlot::new();
        assert!(slot.current().is_none());

        slot.publish(Artifact::new("a.pdf", Bytes::from_static(b"%PDF a")));
        slot.publish(Artifact::new("b.pdf", Bytes::from_static(b"%PDF b")));
        assert_eq!(slot.current().unwrap().filename, "b.pdf");

        slot.clear();
        assert!(slot.current().is_none());
    }
}
