//! Document reading: turns uploaded PDF/DOCX bytes into a `RawDocument`
//! (full text + paragraph blocks). No OCR — image-only documents fail with
//! a descriptive error.

pub mod docx;
pub mod loader;
pub mod pdf;
pub mod text;
