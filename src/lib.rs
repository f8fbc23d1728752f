//! # docpager
//!
//! A library for extracting plain text from heterogeneous document sources
//! (web pages, HTML, plain text, DOCX, PDF) and splitting the extracted
//! text into bounded-size pages.
//!
//! The pipeline has two parts: a [`Normalizer`] that turns raw input into an
//! ordered sequence of text units (one logical line or paragraph each), and
//! a [`Paginator`] that greedily packs those units into pages whose
//! accumulated character length stays close to a configured maximum without
//! ever splitting a unit.
//!
//! ## Example Usage
//!
//! ```rust
//! use docpager::{Normalizer, Paginator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let normalizer = Normalizer::new();
//!
//!     // Normalize raw HTML into text units
//!     let html = "<html><body><p>First paragraph</p><p>Second paragraph</p></body></html>";
//!     let units = normalizer.from_html(html);
//!
//!     // Pack units into pages of at most ~5000 characters
//!     let paginator = Paginator::new(5000)?;
//!     let pages = paginator.paginate(units);
//!
//!     println!("Produced {} pages", pages.len());
//!     Ok(())
//! }
//! ```
//!
//! Remote fetching goes through [`ContentFetcher`], and the binary formats
//! have their own extractors ([`DocxExtractor`], [`PdfExtractor`]) that
//! yield unit sequences ready for pagination.

pub mod error;
pub mod services;
pub mod types;

// Re-export main types and services for easier usage
pub use error::{DocPagerError, Result};
pub use services::{
    ContentFetcher, DocxExtractor, Normalizer, Paginator, PdfExtractor,
    DEFAULT_MAX_PAGE_LENGTH,
};
pub use types::{DocumentMetadata, Page, PagedDocument, SourceFormat, SourceType};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_page_workflow() {
        let html = r#"<html>
            <head><style>body { color: red; }</style></head>
            <body>
                <h1>Report Title  Volume One</h1>
                <p>Body text of the report.</p>
                <script>trackVisit();</script>
                <footer>Copyright notice</footer>
            </body>
        </html>"#;

        let normalizer = Normalizer::new();
        let units = normalizer.from_web_page(html);

        assert!(units.contains(&"Report Title".to_string()));
        assert!(units.contains(&"Volume One".to_string()));
        assert!(units.contains(&"Body text of the report.".to_string()));
        assert!(!units.iter().any(|u| u.contains("trackVisit")));
        assert!(!units.iter().any(|u| u.contains("Copyright")));

        let paginator = Paginator::new(DEFAULT_MAX_PAGE_LENGTH).unwrap();
        let pages = paginator.paginate(units.clone());

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].units, units);
    }

    #[test]
    fn test_pagination_preserves_unit_sequence() {
        let normalizer = Normalizer::new();
        let units = normalizer.from_text("line one\nline two\n\nline four");

        let paginator = Paginator::new(10).unwrap();
        let pages = paginator.paginate(units.clone());

        let rejoined: Vec<String> = pages.iter().flat_map(|p| p.units.clone()).collect();
        assert_eq!(rejoined, units);
        assert!(pages.len() > 1);
    }

    #[test]
    fn test_paginator_rejects_zero_maximum() {
        assert!(Paginator::new(0).is_err());
        assert!(Paginator::new(1).is_ok());
    }

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
