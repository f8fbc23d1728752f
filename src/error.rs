use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocPagerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("HTTP status error: {status}")]
    HttpStatus { status: u16 },

    #[error("Invalid DOCX container: {reason}")]
    DocxFormat { reason: String },

    #[error("Invalid PDF document: {0}")]
    PdfFormat(#[from] lopdf::Error),

    #[error("Pagination configuration error: {reason}")]
    PaginateConfig { reason: String },

    #[error("Source validation error: {reason}")]
    SourceValidation { reason: String },

    #[error("Output directory error: {reason}")]
    OutputDirectory { reason: String },

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

impl DocPagerError {
    /// The source could not be reached or opened at all.
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::Http(_)
                | Self::InvalidUrl(_)
                | Self::FileNotFound { .. }
                | Self::HttpStatus { .. }
        )
    }

    /// The source was reached but could not be decoded as its declared format.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::DocxFormat { .. } | Self::PdfFormat(_))
    }
}

pub type Result<T> = std::result::Result<T, DocPagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieval_classification() {
        let err = DocPagerError::FileNotFound {
            path: "missing.pdf".to_string(),
        };
        assert!(err.is_retrieval());
        assert!(!err.is_format());

        let err = DocPagerError::HttpStatus { status: 404 };
        assert!(err.is_retrieval());
    }

    #[test]
    fn test_format_classification() {
        let err = DocPagerError::DocxFormat {
            reason: "not a ZIP archive".to_string(),
        };
        assert!(err.is_format());
        assert!(!err.is_retrieval());
    }
}
