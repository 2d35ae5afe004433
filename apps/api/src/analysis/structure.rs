//! Layout-issue heuristics inferred purely from extracted text. The reader
//! keeps no visual layout, so these are text-pattern proxies: pipe-delimited
//! cells for tables, wide space runs for columns, and so on.

use once_cell::sync::Lazy;
use regex::Regex;

static TABLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\|\s*\w+\s*\|").unwrap(), // | cell |
        Regex::new(r"\t{2,}").unwrap(),        // multi-tab runs
        Regex::new(r"_{5,}").unwrap(),         // underscore borders
    ]
});

static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[image\]|\[photo\]|\[picture\]|\.jpg|\.png|\.gif").unwrap());

static COLUMN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{5,}").unwrap());

/// Words per estimated page.
const WORDS_PER_PAGE: f64 = 450.0;

#[derive(Debug, Clone, Default)]
pub struct StructureFlags {
    pub has_tables: bool,
    pub has_images: bool,
    pub has_columns: bool,
    pub has_headers_footers: bool,
    pub is_image_only_pdf: bool,
    pub page_count: u32,
}

/// Detects structural issues in raw resume text. Fewer than 20 words means
/// the document is effectively image-only and all other checks are skipped.
pub fn detect_structure_flags(raw_text: &str) -> StructureFlags {
    let mut flags = StructureFlags {
        page_count: 1,
        ..StructureFlags::default()
    };

    let word_count = raw_text.split_whitespace().count();
    if word_count < 20 {
        flags.is_image_only_pdf = true;
        return flags;
    }

    flags.has_tables = TABLE_PATTERNS.iter().any(|p| p.is_match(raw_text));
    flags.has_images = IMAGE_PATTERN.is_match(raw_text);
    flags.has_columns = COLUMN_PATTERN.is_match(raw_text);
    flags.page_count = ((word_count as f64 / WORDS_PER_PAGE).round() as u32).max(1);

    flags
}
