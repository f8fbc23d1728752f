use crate::error::{DocPagerError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::debug;

/// Reads the paragraph stream of a DOCX container.
///
/// DOCX files are ZIP archives of Open XML parts; the body text lives in
/// `word/document.xml` as a flat sequence of `w:p` paragraphs. Each
/// paragraph becomes one text unit, its run text taken verbatim with no
/// trimming or empty-filtering.
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn paragraph_units(path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            return Err(DocPagerError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let bytes = fs::read(path)?;
        Self::paragraph_units_from_bytes(&bytes)
    }

    pub fn paragraph_units_from_bytes(bytes: &[u8]) -> Result<Vec<String>> {
        let mut archive =
            zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| DocPagerError::DocxFormat {
                reason: format!("not a DOCX archive: {}", e),
            })?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| DocPagerError::DocxFormat {
                reason: format!("missing word/document.xml: {}", e),
            })?
            .read_to_string(&mut xml)
            .map_err(|e| DocPagerError::DocxFormat {
                reason: format!("unreadable word/document.xml: {}", e),
            })?;

        let units = parse_paragraphs(&xml)?;
        debug!("Extracted {} paragraphs from DOCX container", units.len());
        Ok(units)
    }
}

/// Walk document.xml collecting run text per paragraph. Tabs and line
/// breaks inside a run map to their plain-text equivalents, matching the
/// paragraph text a word processor would report.
fn parse_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"t" => in_text = in_paragraph,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                // Self-closing paragraph: still one (blank) unit.
                b"p" => paragraphs.push(String::new()),
                b"tab" if in_paragraph => current.push('\t'),
                b"br" | b"cr" if in_paragraph => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e.unescape().map_err(|err| DocPagerError::DocxFormat {
                        reason: format!("malformed document.xml: {}", err),
                    })?;
                    current.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    if in_paragraph {
                        paragraphs.push(std::mem::take(&mut current));
                        in_paragraph = false;
                    }
                }
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocPagerError::DocxFormat {
                    reason: format!("malformed document.xml: {}", e),
                })
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
