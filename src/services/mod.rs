pub mod docx;
pub mod fetcher;
pub mod normalizer;
pub mod paginator;
pub mod pdf;

pub use docx::DocxExtractor;
pub use fetcher::ContentFetcher;
pub use normalizer::Normalizer;
pub use paginator::{Paginator, DEFAULT_MAX_PAGE_LENGTH};
pub use pdf::PdfExtractor;
