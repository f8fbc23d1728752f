use crate::error::{DocPagerError, Result};
use lopdf::Document;
use std::path::Path;
use tracing::debug;

/// Extracts one text unit per PDF page: the page's full visible text.
///
/// This is a coarser granularity than the line/paragraph units of the other
/// normalizer paths, so a downstream page of the paginator typically holds
/// a small number of document pages.
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn page_units(path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            return Err(DocPagerError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let document = Document::load(path).map_err(classify_pdf_error)?;
        Self::collect_page_units(&document)
    }

    pub fn page_units_from_bytes(bytes: &[u8]) -> Result<Vec<String>> {
        let document = Document::load_mem(bytes).map_err(classify_pdf_error)?;
        Self::collect_page_units(&document)
    }

    fn collect_page_units(document: &Document) -> Result<Vec<String>> {
        let mut units = Vec::new();

        // get_pages is keyed by page number, so iteration is in page order.
        for (page_number, _object_id) in document.get_pages() {
            let text = document.extract_text(&[page_number])?;
            units.push(text);
        }

        debug!("Extracted text from {} PDF pages", units.len());
        Ok(units)
    }
}

/// Loading can fail before any decoding happens (e.g. permission denied on
/// an existing path). Those are retrieval failures, not format failures.
fn classify_pdf_error(err: lopdf::Error) -> DocPagerError {
    match err {
        lopdf::Error::IO(io_err) => DocPagerError::Io(io_err),
        other => DocPagerError::PdfFormat(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_a_format_error() {
        let err = PdfExtractor::page_units_from_bytes(b"this is not a pdf").unwrap_err();
        assert!(err.is_format());
        assert!(matches!(err, DocPagerError::PdfFormat(_)));
    }

    #[test]
    fn test_missing_file_is_a_retrieval_error() {
        let err = PdfExtractor::page_units(Path::new("no/such/file.pdf")).unwrap_err();
        assert!(err.is_retrieval());
        assert!(matches!(err, DocPagerError::FileNotFound { .. }));
    }

    #[test]
    fn test_unreadable_existing_path_is_a_retrieval_error() {
        // A directory passes the existence pre-check but fails with an IO
        // error when read; that must stay on the retrieval side of the
        // taxonomy rather than being reported as a malformed PDF.
        let err = PdfExtractor::page_units(Path::new("src")).unwrap_err();
        assert!(err.is_retrieval());
        assert!(matches!(err, DocPagerError::Io(_)));
    }
}
