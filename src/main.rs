mod cli;
mod error;
mod services;
mod types;

use anyhow::Context;
use clap::Parser;
use cli::{AnalyzeArgs, Cli, Commands, ExtractArgs, ValidateArgs};
use error::{DocPagerError, Result};
use services::{ContentFetcher, DocxExtractor, Normalizer, Paginator, PdfExtractor};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{error, info, Level};
use types::{DocumentMetadata, PagedDocument, SourceFormat, SourceType};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Extract(args) => handle_extract_command(args, &cli.output).await,
        Commands::Analyze(args) => handle_analyze_command(args).await,
        Commands::Validate(args) => handle_validate_command(args).await,
    };

    if let Err(e) = result {
        error!("Operation failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the full pipeline for one source: retrieve, normalize into text
/// units along the format's path, then paginate.
async fn paginate_source(
    source: &str,
    max_page_length: usize,
    filter_empty: bool,
) -> Result<PagedDocument> {
    let paginator = Paginator::new(max_page_length)?.filter_empty(filter_empty);
    let normalizer = Normalizer::new();
    let format = SourceFormat::detect(source);

    let (units, mut metadata) = match format {
        SourceFormat::WebPage => {
            let (content, metadata) = ContentFetcher::fetch_content(source).await?;
            (normalizer.from_web_page(&content), metadata)
        }
        SourceFormat::Html => {
            let (content, metadata) = ContentFetcher::fetch_content(source).await?;
            (normalizer.from_html(&content), metadata)
        }
        SourceFormat::PlainText => {
            let (content, metadata) = ContentFetcher::fetch_content(source).await?;
            (normalizer.from_text(&content), metadata)
        }
        SourceFormat::Docx => (
            DocxExtractor::paragraph_units(Path::new(source))?,
            local_metadata(source, format),
        ),
        SourceFormat::Pdf => (
            PdfExtractor::page_units(Path::new(source))?,
            local_metadata(source, format),
        ),
    };

    metadata.total_units = units.len();
    let pages = paginator.paginate(units);

    Ok(PagedDocument {
        source: metadata.filename.clone(),
        total_pages: pages.len(),
        pages,
        metadata,
    })
}

fn local_metadata(source: &str, format: SourceFormat) -> DocumentMetadata {
    let filename = Path::new(source)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();
    DocumentMetadata::new(filename, SourceType::LocalFile, format)
}

async fn handle_extract_command(args: &ExtractArgs, output_dir: &PathBuf) -> Result<()> {
    info!("Starting extraction with {} sources", args.sources.len());

    // Validate sources first
    let validated_sources = ContentFetcher::validate_sources(&args.sources).await?;
    info!("Validated {} sources", validated_sources.len());

    // Check if output directory exists and handle force flag
    if output_dir.exists() && !args.force {
        let entries =
            std::fs::read_dir(output_dir).map_err(|e| DocPagerError::OutputDirectory {
                reason: format!("Cannot read output directory: {}", e),
            })?;

        if entries.count() > 0 {
            return Err(DocPagerError::OutputDirectory {
                reason: "Output directory is not empty. Use --force to overwrite.".to_string(),
            });
        }
    }

    ensure_output_directory(output_dir).await?;

    for (idx, source) in validated_sources.iter().enumerate() {
        info!(
            "Processing source {}/{}: {}",
            idx + 1,
            validated_sources.len(),
            source
        );

        let document =
            paginate_source(source, args.max_page_length, args.filter_empty).await?;

        info!(
            "Document '{}' produced {} pages from {} units",
            document.source, document.total_pages, document.metadata.total_units
        );

        let written = write_page_files(&document, output_dir).await?;
        for path in &written {
            info!("  - {}", path.display());
        }

        if args.include_metadata {
            let metadata_path = write_metadata_file(&document, output_dir, &written).await?;
            info!("  - {} (metadata)", metadata_path.display());
        }
    }

    info!("Extraction completed successfully!");
    Ok(())
}

async fn ensure_output_directory(output_dir: &Path) -> Result<()> {
    if !output_dir.exists() {
        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|e| DocPagerError::OutputDirectory {
                reason: format!("Failed to create output directory: {}", e),
            })?;
        info!("Created output directory: {}", output_dir.display());
    }
    Ok(())
}

async fn write_page_files(document: &PagedDocument, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let base_name = Path::new(&document.source)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");

    let width = document.total_pages.to_string().len();
    let mut written = Vec::new();

    for page in &document.pages {
        let filename = format!("{}_page_{:0width$}.txt", base_name, page.number, width = width);
        let path = output_dir.join(filename);

        tokio::fs::write(&path, page.join())
            .await
            .map_err(|e| DocPagerError::OutputDirectory {
                reason: format!("Failed to write page file {}: {}", path.display(), e),
            })?;

        written.push(path);
    }

    Ok(written)
}

async fn write_metadata_file(
    document: &PagedDocument,
    output_dir: &Path,
    page_files: &[PathBuf],
) -> Result<PathBuf> {
    let base_name = Path::new(&document.source)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");

    let metadata_path = output_dir.join(format!("{}_metadata.json", base_name));

    let metadata = serde_json::json!({
        "source": document.source,
        "total_pages": document.total_pages,
        "total_units": document.metadata.total_units,
        "document_metadata": document.metadata,
        "pages": document.pages.iter().zip(page_files).map(|(page, path)| {
            serde_json::json!({
                "number": page.number,
                "units": page.units.len(),
                "length": page.text_len(),
                "file": path.file_name().and_then(|n| n.to_str()).unwrap_or(""),
            })
        }).collect::<Vec<_>>(),
    });

    let json_content =
        serde_json::to_string_pretty(&metadata).map_err(|e| DocPagerError::OutputDirectory {
            reason: format!("Failed to serialize metadata: {}", e),
        })?;

    tokio::fs::write(&metadata_path, json_content)
        .await
        .map_err(|e| DocPagerError::OutputDirectory {
            reason: format!("Failed to write metadata file: {}", e),
        })?;

    Ok(metadata_path)
}

async fn handle_analyze_command(args: &AnalyzeArgs) -> Result<()> {
    info!("Starting analysis of {} sources", args.sources.len());

    let validated_sources = ContentFetcher::validate_sources(&args.sources).await?;
    let mut all_analyses = HashMap::new();

    for source in validated_sources {
        info!("Analyzing: {}", source);

        let document =
            paginate_source(&source, args.max_page_length, args.filter_empty).await?;

        let empty_units = document
            .pages
            .iter()
            .flat_map(|p| &p.units)
            .filter(|u| u.trim().is_empty())
            .count();
        let total_chars: usize = document.pages.iter().map(|p| p.text_len()).sum();
        let avg_page_length = if document.total_pages > 0 {
            total_chars as f64 / document.total_pages as f64
        } else {
            0.0
        };

        // Print analysis to console
        println!("\n=== Analysis for '{}' ===", document.source);
        println!("Source type: {:?}", document.metadata.source_type);
        println!("Format: {:?}", document.metadata.format);
        println!("Total units: {}", document.metadata.total_units);
        println!("Blank units: {}", empty_units);
        println!("Total characters: {}", total_chars);
        println!("Total pages: {}", document.total_pages);
        println!("Average page length: {:.1}", avg_page_length);

        if args.detailed {
            println!("\nPage Details:");
            for page in &document.pages {
                println!(
                    "  Page {}: {} units, {} characters",
                    page.number,
                    page.units.len(),
                    page.text_len()
                );
            }
        }

        // Preview page counts at other maxima
        println!("\nPage counts at other maxima:");
        let units: Vec<String> = document
            .pages
            .iter()
            .flat_map(|p| p.units.clone())
            .collect();
        for max in [1000, 2500, 5000, 10000] {
            let paginator = Paginator::new(max)?;
            let pages = paginator.paginate(units.clone());
            println!("  max {}: {} pages", max, pages.len());
        }

        // Store for JSON output
        all_analyses.insert(
            source.clone(),
            serde_json::json!({
                "document": document,
                "stats": {
                    "empty_units": empty_units,
                    "total_chars": total_chars,
                    "avg_page_length": avg_page_length,
                }
            }),
        );
    }

    // Write JSON output if requested
    if let Some(json_path) = &args.json_output {
        let json_content = serde_json::to_string_pretty(&all_analyses)
            .context("Failed to serialize analysis results")?;

        tokio::fs::write(json_path, json_content)
            .await
            .context("Failed to write JSON analysis file")?;

        info!("Analysis results written to: {}", json_path.display());
    }

    Ok(())
}

async fn handle_validate_command(args: &ValidateArgs) -> Result<()> {
    info!("Validating {} sources", args.sources.len());

    let mut valid_sources = Vec::new();
    let mut invalid_sources = Vec::new();

    for source in &args.sources {
        match ContentFetcher::validate_sources(&[source.clone()]).await {
            Ok(_) => {
                info!("✓ Valid: {}", source);
                valid_sources.push(source);

                if args.check_access {
                    // Try to actually run the pipeline over the source
                    match paginate_source(source, services::DEFAULT_MAX_PAGE_LENGTH, false).await
                    {
                        Ok(document) => {
                            info!(
                                "  Accessible, {} units found",
                                document.metadata.total_units
                            );
                        }
                        Err(e) => {
                            error!("  Cannot access content: {}", e);
                            invalid_sources.push((source, format!("Access error: {}", e)));
                        }
                    }
                }
            }
            Err(e) => {
                error!("✗ Invalid: {} - {}", source, e);
                invalid_sources.push((source, e.to_string()));
            }
        }
    }

    println!("\n=== Validation Summary ===");
    println!(
        "Valid sources: {}/{}",
        valid_sources.len(),
        args.sources.len()
    );

    if !invalid_sources.is_empty() {
        println!("Invalid sources:");
        let invalid_count = invalid_sources.len();
        for (source, error) in invalid_sources {
            println!("  - {}: {}", source, error);
        }
        return Err(DocPagerError::SourceValidation {
            reason: format!("{} sources failed validation", invalid_count),
        });
    }

    println!("All sources are valid!");
    Ok(())
}
