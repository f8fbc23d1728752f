use serde::{Deserialize, Serialize};
use std::path::Path;

/// One output page: a contiguous run of text units from the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub number: usize,
    pub units: Vec<String>,
}

impl Page {
    /// Accumulated character length of the units on this page.
    /// Separators added later when the page is joined are not counted.
    pub fn text_len(&self) -> usize {
        self.units.iter().map(|u| u.chars().count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Render the page for display, one unit per line.
    pub fn join(&self) -> String {
        self.units.join("\n")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedDocument {
    pub source: String,
    pub total_pages: usize,
    pub pages: Vec<Page>,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub filename: String,
    pub source_type: SourceType,
    pub format: SourceFormat,
    pub created_at: String,
    pub total_units: usize,
}

impl DocumentMetadata {
    pub fn new(filename: String, source_type: SourceType, format: SourceFormat) -> Self {
        Self {
            filename,
            source_type,
            format,
            created_at: chrono::Utc::now().to_rfc3339(),
            total_units: 0, // Filled in once normalization has run
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    LocalFile,
    Url,
}

/// Which normalizer path a source goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    /// Split on newlines, nothing dropped.
    PlainText,
    /// Fetched web page: script/style/footer stripped, wide gaps split.
    WebPage,
    /// Raw HTML text: head/meta stripped, blank lines dropped.
    Html,
    /// One unit per paragraph of the container.
    Docx,
    /// One unit per document page.
    Pdf,
}

impl SourceFormat {
    /// Classify a source string. URLs always take the web-page path;
    /// local paths are classified by extension, defaulting to plain text.
    pub fn detect(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            return Self::WebPage;
        }

        match Path::new(source)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("html") | Some("htm") => Self::Html,
            Some("docx") => Self::Docx,
            Some("pdf") => Self::Pdf,
            _ => Self::PlainText,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            SourceFormat::detect("https://example.com/article"),
            SourceFormat::WebPage
        );
        assert_eq!(SourceFormat::detect("notes/report.DOCX"), SourceFormat::Docx);
        assert_eq!(SourceFormat::detect("paper.pdf"), SourceFormat::Pdf);
        assert_eq!(SourceFormat::detect("page.htm"), SourceFormat::Html);
        assert_eq!(SourceFormat::detect("readme.txt"), SourceFormat::PlainText);
        assert_eq!(SourceFormat::detect("LICENSE"), SourceFormat::PlainText);
    }

    #[test]
    fn test_page_length_counts_chars_not_bytes() {
        let page = Page {
            number: 1,
            units: vec!["héllo".to_string(), "wörld".to_string()],
        };
        assert_eq!(page.text_len(), 10);
        assert_eq!(page.join(), "héllo\nwörld");
    }
}
