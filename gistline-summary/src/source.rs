//! Summarizable sources handed over by text extractors.
//!
//! Fetching URLs and parsing PDF/DOCX files happens elsewhere; what arrives
//! here is already plain text plus whatever title the extractor found.

use gistline::{GistError, GistResult};
use serde::{Deserialize, Serialize};

use crate::{Depth, Summarizer, SummaryResult};

/// Extracted file content shorter than this is treated as empty.
pub const MIN_FILE_CHARS: usize = 50;

const BYTE_ORDER_MARK: char = '\u{feff}';

const FILE_EXTENSIONS: &[&str] = &[".txt", ".pdf", ".docx", ".doc"];

/// Where a source's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Text,
    Url,
    File,
}

/// Plain text ready for summarization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    /// Title supplied by the caller or extractor, if any.
    pub title: Option<String>,
    pub content: String,
    pub kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl SourceDocument {
    /// Text pasted directly by a user.
    pub fn from_text(content: impl Into<String>, title: Option<String>) -> Self {
        Self {
            title,
            content: content.into(),
            kind: SourceKind::Text,
            file_name: None,
            source_url: None,
        }
    }

    /// Article text scraped from `url`.
    pub fn from_url(
        url: impl Into<String>,
        title: Option<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title,
            content: content.into(),
            kind: SourceKind::Url,
            file_name: None,
            source_url: Some(url.into()),
        }
    }

    /// Text extracted from an uploaded file.
    ///
    /// The title is the file name without its document extension. Content
    /// shorter than [`MIN_FILE_CHARS`] after trimming is rejected. A byte
    /// order mark is trimmed along with surrounding whitespace.
    pub fn from_file(file_name: &str, content: &str) -> GistResult<Self> {
        let content = content.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
        if content.chars().count() < MIN_FILE_CHARS {
            return Err(GistError::validation(format!(
                "{} appears to be empty",
                file_name
            )));
        }

        Ok(Self {
            title: Some(title_from_file_name(file_name)),
            content: content.to_string(),
            kind: SourceKind::File,
            file_name: Some(file_name.to_string()),
            source_url: None,
        })
    }

    /// Raw bytes of a `.txt` upload. Invalid UTF-8 is replaced, not rejected.
    pub fn from_plain_text_file(file_name: &str, bytes: &[u8]) -> GistResult<Self> {
        Self::from_file(file_name, &String::from_utf8_lossy(bytes))
    }

    /// The supplied title, unless it is missing or blank.
    pub fn provided_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }
}

/// Strip a known document extension, ignoring case.
fn title_from_file_name(file_name: &str) -> String {
    let lower = file_name.to_ascii_lowercase();
    for ext in FILE_EXTENSIONS {
        if lower.ends_with(ext) && file_name.len() > ext.len() {
            return file_name[..file_name.len() - ext.len()].to_string();
        }
    }
    file_name.to_string()
}

impl Summarizer {
    /// Summarize a source, preferring its own title over the derived one.
    pub fn summarize_source(
        &self,
        source: &SourceDocument,
        depth: Depth,
    ) -> GistResult<SummaryResult> {
        let mut result = self.summarize(&source.content, depth)?;
        if let Some(title) = source.provided_title() {
            result.title = title.to_string();
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_title_drops_extension() {
        assert_eq!(title_from_file_name("report.txt"), "report");
        assert_eq!(title_from_file_name("Annual Review.PDF"), "Annual Review");
        assert_eq!(title_from_file_name("notes.docx"), "notes");
        assert_eq!(title_from_file_name("legacy.doc"), "legacy");
        assert_eq!(title_from_file_name("archive.tar.gz"), "archive.tar.gz");
        assert_eq!(title_from_file_name(".txt"), ".txt");
    }

    #[test]
    fn short_file_content_is_rejected() {
        let err = SourceDocument::from_file("empty.txt", "   tiny   ").unwrap_err();
        assert_eq!(err.kind(), gistline::ErrorKind::Validation);
        assert_eq!(err.message(), "empty.txt appears to be empty");
    }

    #[test]
    fn plain_text_upload_is_decoded_and_trimmed() {
        let bytes = b"  The quarterly report shows steady growth across every region.  \n";
        let source = SourceDocument::from_plain_text_file("q3.txt", bytes).unwrap();
        assert_eq!(source.kind, SourceKind::File);
        assert_eq!(source.title.as_deref(), Some("q3"));
        assert_eq!(
            source.content,
            "The quarterly report shows steady growth across every region."
        );
    }

    #[test]
    fn byte_order_mark_is_stripped() {
        let bytes = b"\xEF\xBB\xBFSolar panels convert sunlight into electricity. \
            Panels last for decades.\n";
        let source = SourceDocument::from_plain_text_file("solar.txt", bytes).unwrap();
        assert!(source.content.starts_with("Solar panels"));

        let derived = SourceDocument::from_text(source.content.clone(), None);
        let result = Summarizer::new()
            .summarize_source(&derived, Depth::Brief)
            .unwrap();
        assert_eq!(result.title, "Solar panels convert sunlight into electricity");
    }

    #[test]
    fn blank_titles_are_ignored() {
        let source = SourceDocument::from_text("body", Some("   ".into()));
        assert_eq!(source.provided_title(), None);

        let source = SourceDocument::from_text("body", Some(" Kept ".into()));
        assert_eq!(source.provided_title(), Some("Kept"));
    }
}
