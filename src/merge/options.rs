/*!
 * Merge Options and Input Selection
 * Per-operation configuration and the 10-document selection cap
 */

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::cover::CoverText;

/// Maximum number of documents merged in one operation
pub const MAX_INPUTS: usize = 10;

/// Default output filename when the caller supplies none
pub const DEFAULT_OUTPUT_NAME: &str = "merged.pdf";

/// One source document: display name plus raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    pub name: String,
    pub data: Bytes,
}

impl InputDocument {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Whether this looks like a PDF: `.pdf` extension or `%PDF` magic
    pub fn looks_like_pdf(&self) -> bool {
        self.name.to_lowercase().ends_with(".pdf") || self.data.starts_with(b"%PDF")
    }
}

/// Immutable per-operation configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct MergeOptions {
    pub insert_divider: bool,
    pub add_cover: bool,
    pub cover_text: CoverText,
}

/// The user's document selection, capped at [`MAX_INPUTS`]
///
/// The full name list survives truncation so the caller can still display
/// everything the user picked alongside the warning.
#[derive(Debug, Clone)]
pub struct Selection {
    documents: Vec<InputDocument>,
    all_names: Vec<String>,
    truncated: bool,
}

impl Selection {
    pub fn new(documents: Vec<InputDocument>) -> Self {
        let all_names = documents.iter().map(|d| d.name.clone()).collect();
        let truncated = documents.len() > MAX_INPUTS;
        let mut documents = documents;
        documents.truncate(MAX_INPUTS);
        Self {
            documents,
            all_names,
            truncated,
        }
    }

    /// Documents that will actually be merged
    pub fn documents(&self) -> &[InputDocument] {
        &self.documents
    }

    /// Every selected name, including any past the cap
    pub fn all_names(&self) -> &[String] {
        &self.all_names
    }

    /// True when the selection exceeded the cap and was cut to it
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Derive the artifact filename from raw user input
///
/// Defaulted when blank, whitespace runs collapsed to underscores, and the
/// `.pdf` extension enforced.
pub fn output_filename(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_OUTPUT_NAME.to_string();
    }
    let collapsed: String = trimmed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    if collapsed.to_lowercase().ends_with(".pdf") {
        collapsed
    } else {
        format!("{}.pdf", collapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> InputDocument {
        InputDocument::new(name, Bytes::from_static(b"%PDF-1.4\n"))
    }

    #[test]
    fn test_selection_within_cap() {
        let selection = Selection::new((0..3).map(|i| doc(&format!("{}.pdf", i))).collect());
        assert_eq!(selection.len(), 3);
        assert!(!selection.truncated());
    }

    #[test]
    fn test_selection_truncates_but_keeps_names() {
        let selection = Selection::new((0..11).map(|i| doc(&format!("{}.pdf", i))).collect());
        assert_eq!(selection.len(), MAX_INPUTS);
        assert!(selection.truncated());
        assert_eq!(selection.all_names().len(), 11);
        assert_eq!(selection.documents()[9].name, "9.pdf");
    }

    #[test]
    fn test_pdf_detection() {
        assert!(doc("letter.PDF").looks_like_pdf());
        assert!(InputDocument::new("unnamed", Bytes::from_static(b"%PDF-1.7")).looks_like_pdf());
        assert!(!InputDocument::new("notes.txt", Bytes::from_static(b"hello")).looks_like_pdf());
    }

    #[test]
    fn test_output_filename_rules() {
        assert_eq!(output_filename(""), "merged.pdf");
        assert_eq!(output_filename("   "), "merged.pdf");
        assert_eq!(output_filename("my merged  file"), "my_merged_file.pdf");
        assert_eq!(output_filename(" report.pdf "), "report.pdf");
        assert_eq!(output_filename("Report.PDF"), "Report.PDF");
    }
}
