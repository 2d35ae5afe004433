//! PDF text extraction.
//!
//! PDFs preserve visual layout rather than logical reading order, so this is
//! best-effort: multi-column layouts and tables may not keep their structure.
//! Scanned/image-only PDFs yield no text and are rejected (no OCR).

use crate::document::text::{is_page_number, normalize_whitespace};
use crate::errors::AppError;
use crate::models::resume::RawDocument;

pub fn read_pdf(data: &[u8]) -> Result<RawDocument, AppError> {
    let raw = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| AppError::UnprocessableEntity(format!("Invalid PDF file: {e}")))?;

    let full_text = normalize_whitespace(&raw);

    // Paragraph blocks, with bare page numbers filtered out.
    let blocks: Vec<String> = full_text
        .split("\n\n")
        .map(str::trim)
        .filter(|b| !b.is_empty() && !is_page_number(b))
        .map(ToOwned::to_owned)
        .collect();

    if full_text.is_empty() || blocks.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Unable to extract text from PDF. This may be a scanned or image-based PDF that requires OCR."
                .to_string(),
        ));
    }

    Ok(RawDocument {
        full_text,
        blocks,
        // pdf-extract exposes text only; the scorer estimates pages from
        // word count instead.
        page_count: None,
    })
}
