/*!
 * Cover Page Builder
 * Byte-exact minimal one-page PDF listing the merged source documents
 */

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A4 page box in PDF points
const MEDIA_BOX: &str = "[0 0 595 842]";

/// Text content for the cover page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverText {
    pub title: String,
    pub subtitle: String,
    pub heading: String,
}

impl Default for CoverText {
    fn default() -> Self {
        Self {
            title: "JoinPDF".to_string(),
            subtitle: "ramseyer.it/joinpdf".to_string(),
            heading: "Joined PDF documents in this file:".to_string(),
        }
    }
}

/// Escape text for embedding in a PDF literal string
///
/// Backslash and parentheses are the string delimiters and must be escaped;
/// anything outside printable ASCII becomes `?` because the embedded base
/// font only guarantees that range.
pub fn sanitize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            ' '..='~' => out.push(ch),
            _ => out.push('?'),
        }
    }
    out
}

/// Build the single-page cover PDF
///
/// Layout: title at 30pt, subtitle at 12pt, heading at 13pt, then one 20pt-
/// spaced line per document name, numbered from 1. The cross-reference table
/// carries the exact byte offset of every object, so all assembly below is
/// sequential and byte-counted.
pub fn build_cover_pdf(doc_names: &[String], text: &CoverText) -> Bytes {
    let mut content = vec![
        "BT".to_string(),
        "/F1 30 Tf".to_string(),
        "72 785 Td".to_string(),
        format!("({}) Tj", sanitize_text(&text.title)),
        "0 -24 Td".to_string(),
        "/F1 12 Tf".to_string(),
        format!("({}) Tj", sanitize_text(&text.subtitle)),
        "0 -38 Td".to_string(),
        "/F1 13 Tf".to_string(),
        format!("({}) Tj", sanitize_text(&text.heading)),
    ];

    for (idx, name) in doc_names.iter().enumerate() {
        content.push("0 -20 Td".to_string());
        content.push(format!(
            "({}) Tj",
            sanitize_text(&format!("{}. {}", idx + 1, name))
        ));
    }

    content.push("ET".to_string());
    let stream = format!("{}\n", content.join("\n"));
    let stream_len = stream.len();

    let objects = [
        "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n".to_string(),
        "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n".to_string(),
        format!(
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox {} /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>\nendobj\n",
            MEDIA_BOX
        ),
        "4 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n".to_string(),
        format!(
            "5 0 obj\n<< /Length {} >>\nstream\n{}endstream\nendobj\n",
            stream_len, stream
        ),
    ];

    let header = "%PDF-1.4\n";
    let mut offset = header.len();
    let mut xref_entries = vec!["0000000000 65535 f ".to_string()];
    for obj in &objects {
        xref_entries.push(format!("{:010} 00000 n ", offset));
        offset += obj.len();
    }

    let xref_start = offset;
    let xref = format!("xref\n0 {}\n{}\n", objects.len() + 1, xref_entries.join("\n"));
    let trailer = format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_start
    );

    let mut pdf = String::with_capacity(offset + xref.len() + trailer.len());
    pdf.push_str(header);
    for obj in &objects {
        pdf.push_str(obj);
    }
    pdf.push_str(&xref);
    pdf.push_str(&trailer);
    Bytes::from(pdf)
}
