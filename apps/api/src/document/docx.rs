//! DOCX text extraction.
//!
//! A DOCX file is a zip container; the document body lives in
//! `word/document.xml`. Paragraph text is recovered from `<w:t>` runs,
//! table rows are flattened to `cell | cell | cell` lines so the
//! downstream table heuristic still fires.

use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::text::normalize_whitespace;
use crate::errors::AppError;
use crate::models::resume::RawDocument;

static TABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<w:tbl[ >].*?</w:tbl>").unwrap());
static ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<w:tr[ >].*?</w:tr>").unwrap());
static CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<w:tc[ >].*?</w:tc>").unwrap());
static RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<w:t[^>]*>([^<]*)</w:t>|<w:tab\s*/>").unwrap());

pub fn read_docx(data: &[u8]) -> Result<RawDocument, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| AppError::UnprocessableEntity(format!("Invalid DOCX file: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| {
            AppError::UnprocessableEntity("Invalid DOCX file: missing document body".to_string())
        })?
        .read_to_string(&mut xml)
        .map_err(|e| AppError::UnprocessableEntity(format!("Invalid DOCX file: {e}")))?;

    let mut blocks = extract_paragraphs(&xml);
    blocks.extend(extract_tables(&xml));

    if blocks.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Unable to extract text from DOCX document".to_string(),
        ));
    }

    let full_text = blocks.join("\n\n");

    Ok(RawDocument {
        full_text,
        blocks,
        page_count: None,
    })
}

/// Body paragraphs, in order, with table content removed (tables are
/// flattened separately).
fn extract_paragraphs(xml: &str) -> Vec<String> {
    let without_tables = TABLE.replace_all(xml, "");
    without_tables
        .split("</w:p>")
        .filter_map(|chunk| {
            let text = run_text(chunk);
            let text = normalize_whitespace(&text);
            (!text.is_empty()).then_some(text)
        })
        .collect()
}

/// Each table becomes one block: rows on separate lines, cells joined
/// with " | ".
fn extract_tables(xml: &str) -> Vec<String> {
    TABLE
        .find_iter(xml)
        .filter_map(|tbl| {
            let rows: Vec<String> = ROW
                .find_iter(tbl.as_str())
                .filter_map(|row| {
                    let cells: Vec<String> = CELL
                        .find_iter(row.as_str())
                        .map(|cell| normalize_whitespace(&run_text(cell.as_str())))
                        .filter(|c| !c.is_empty())
                        .collect();
                    (!cells.is_empty()).then(|| cells.join(" | "))
                })
                .collect();
            (!rows.is_empty()).then(|| rows.join("\n"))
        })
        .collect()
}

/// Concatenates the `<w:t>` runs of an XML fragment; tabs survive as `\t`.
fn run_text(fragment: &str) -> String {
    let mut out = String::new();
    for cap in RUN.captures_iter(fragment) {
        match cap.get(1) {
            Some(text) => out.push_str(&unescape(text.as_str())),
            None => out.push('\t'),
        }
    }
    out
}

fn unescape(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn make_docx(body_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(body_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    const SIMPLE_BODY: &str = r#"<?xml version="1.0"?>
<w:document><w:body>
<w:p><w:r><w:t>JOHN DOE</w:t></w:r></w:p>
<w:p><w:r><w:t>Experience</w:t></w:r></w:p>
<w:p><w:r><w:t>Built things &amp; shipped them</w:t></w:r></w:p>
</w:body></w:document>"#;

    #[test]
    fn test_paragraph_extraction() {
        let doc = read_docx(&make_docx(SIMPLE_BODY)).unwrap();
        assert_eq!(doc.blocks.len(), 3);
        assert_eq!(doc.blocks[0], "JOHN DOE");
        assert_eq!(doc.blocks[2], "Built things & shipped them");
        assert!(doc.full_text.contains("Experience"));
    }

    #[test]
    fn test_table_cells_join_with_pipes() {
        let body = r#"<w:document><w:body>
<w:p><w:r><w:t>Skills</w:t></w:r></w:p>
<w:tbl xmlns="x"><w:tr a="1"><w:tc b="1"><w:p><w:r><w:t>Rust</w:t></w:r></w:p></w:tc><w:tc b="2"><w:p><w:r><w:t>Expert</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
</w:body></w:document>"#;
        let doc = read_docx(&make_docx(body)).unwrap();
        // table block appended after paragraphs
        assert_eq!(doc.blocks.last().unwrap(), "Rust | Expert");
        // table paragraphs must not be duplicated as body paragraphs
        assert_eq!(doc.blocks.len(), 2);
    }

    #[test]
    fn test_split_runs_concatenate() {
        let body = r#"<w:document><w:body>
<w:p><w:r><w:t>Jan 2020 </w:t></w:r><w:r><w:t>- Present</w:t></w:r></w:p>
</w:body></w:document>"#;
        let doc = read_docx(&make_docx(body)).unwrap();
        assert_eq!(doc.blocks[0], "Jan 2020 - Present");
    }

    #[test]
    fn test_not_a_zip_is_unprocessable() {
        let err = read_docx(b"plain text, not a zip").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_zip_without_document_xml_is_unprocessable() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("other.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hi").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        let err = read_docx(&bytes).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
