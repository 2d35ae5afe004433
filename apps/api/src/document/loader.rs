//! Upload validation and reader dispatch. The single entry point the HTTP
//! handlers use to turn uploaded bytes into a `RawDocument`.

use crate::document::{docx, pdf};
use crate::errors::AppError;
use crate::models::resume::RawDocument;

const ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".doc"];

/// Validates an upload (extension, emptiness, size cap) and dispatches to the
/// matching reader. Validation failures are client errors; documents that
/// pass validation but cannot be decoded surface as 422.
pub fn load_document(filename: &str, data: &[u8], max_bytes: usize) -> Result<RawDocument, AppError> {
    if filename.is_empty() {
        return Err(AppError::Validation("No filename provided".to_string()));
    }

    let lower = filename.to_lowercase();
    let ext = ALLOWED_EXTENSIONS
        .iter()
        .find(|ext| lower.ends_with(**ext))
        .ok_or_else(|| {
            AppError::Validation(format!(
                "Unsupported file type. Allowed: {}",
                ALLOWED_EXTENSIONS.join(", ")
            ))
        })?;

    if data.is_empty() {
        return Err(AppError::Validation("File is empty".to_string()));
    }
    if data.len() > max_bytes {
        return Err(AppError::Validation(format!(
            "File too large. Maximum size: {:.1}MB",
            max_bytes as f64 / (1024.0 * 1024.0)
        )));
    }

    match *ext {
        ".pdf" => pdf::read_pdf(data),
        _ => docx::read_docx(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_filename_rejected() {
        let err = load_document("", b"data", 1024).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let err = load_document("resume.txt", b"data", 1024).unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("Unsupported file type")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_rejected() {
        let err = load_document("resume.pdf", b"", 1024).unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("empty")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_file_rejected() {
        let err = load_document("resume.pdf", &[0u8; 64], 16).unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("too large")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        // passes validation, then fails decoding as expected
        let err = load_document("Resume.PDF", b"not a pdf", 1024).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
