//! Shared text analysis computed once per scoring request and handed to both
//! the scoring engine and the auto-fix recommender, so neither re-derives the
//! same signals.

pub mod quantify;
pub mod readability;
pub mod structure;
pub mod tokenizer;

use crate::models::resume::Resume;
use crate::models::scoring::ReadabilityMetrics;

use quantify::QuantificationSummary;
use structure::StructureFlags;
use tokenizer::Tokenizer;

/// One-shot analysis of a parsed resume.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub readability: ReadabilityMetrics,
    pub structure: StructureFlags,
    pub quantification: QuantificationSummary,
    /// Token count over the full text (layout scoring input).
    pub word_count: usize,
}

pub fn analyze_resume(tokenizer: &dyn Tokenizer, resume: &Resume) -> DocumentAnalysis {
    DocumentAnalysis {
        readability: readability::analyze_readability(tokenizer, &resume.raw_text),
        structure: structure::detect_structure_flags(&resume.raw_text),
        quantification: quantify::summarize_quantification(resume),
        word_count: tokenizer.words(&resume.raw_text).len(),
    }
}

pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
