use crate::error::{DocPagerError, Result};
use crate::types::{DocumentMetadata, SourceFormat, SourceType};
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};
use url::Url;

/// Retrieves raw textual content from a URL or a local file. Binary formats
/// (DOCX, PDF) go through their extractors directly and never pass here.
pub struct ContentFetcher;

impl ContentFetcher {
    pub async fn fetch_content(source: &str) -> Result<(String, DocumentMetadata)> {
        if Self::is_url(source) {
            Self::fetch_from_url(source).await
        } else {
            Self::fetch_from_file(source).await
        }
    }

    async fn fetch_from_url(url: &str) -> Result<(String, DocumentMetadata)> {
        info!("Fetching content from URL: {}", url);

        let parsed_url = Url::parse(url)?;
        let client = reqwest::Client::new();
        let response = client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(DocPagerError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        let content = response.text().await?;
        let filename = Self::extract_filename_from_url(&parsed_url);
        let metadata = DocumentMetadata::new(filename, SourceType::Url, SourceFormat::WebPage);

        Ok((content, metadata))
    }

    async fn fetch_from_file(file_path: &str) -> Result<(String, DocumentMetadata)> {
        info!("Reading file: {}", file_path);

        let path = Path::new(file_path);

        if !path.exists() {
            return Err(DocPagerError::FileNotFound {
                path: file_path.to_string(),
            });
        }

        let content = fs::read_to_string(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let metadata = DocumentMetadata::new(
            filename,
            SourceType::LocalFile,
            SourceFormat::detect(file_path),
        );

        Ok((content, metadata))
    }

    pub fn is_url(source: &str) -> bool {
        source.starts_with("http://") || source.starts_with("https://")
    }

    fn extract_filename_from_url(url: &Url) -> String {
        url.path_segments()
            .and_then(|segments| segments.last())
            .and_then(|name| if name.is_empty() { None } else { Some(name) })
            .unwrap_or("downloaded.html")
            .to_string()
    }

    pub async fn validate_sources(sources: &[String]) -> Result<Vec<String>> {
        let mut validated = Vec::new();

        for source in sources {
            if Self::is_url(source) {
                // Validate URL format
                Url::parse(source)?;
                validated.push(source.clone());
            } else {
                // Check if file exists
                let path = Path::new(source);
                if path.exists() && path.is_file() {
                    validated.push(source.clone());
                } else {
                    warn!("Source does not exist: {}", source);
                    return Err(DocPagerError::FileNotFound {
                        path: source.clone(),
                    });
                }
            }
        }

        Ok(validated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_detection() {
        assert!(ContentFetcher::is_url("https://example.com/doc"));
        assert!(ContentFetcher::is_url("http://example.com"));
        assert!(!ContentFetcher::is_url("docs/report.docx"));
        assert!(!ContentFetcher::is_url("ftp://example.com"));
    }

    #[tokio::test]
    async fn test_missing_file_is_a_retrieval_error() {
        let err = ContentFetcher::fetch_content("no/such/source.txt")
            .await
            .unwrap_err();
        assert!(err.is_retrieval());
    }

    #[tokio::test]
    async fn test_validate_rejects_missing_files() {
        let sources = vec!["definitely/not/here.txt".to_string()];
        let err = ContentFetcher::validate_sources(&sources).await.unwrap_err();
        assert!(matches!(err, DocPagerError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_validate_rejects_malformed_urls() {
        let sources = vec!["http://".to_string()];
        let err = ContentFetcher::validate_sources(&sources).await.unwrap_err();
        assert!(matches!(err, DocPagerError::InvalidUrl(_)));
    }
}
