//! Quantification, impact, and bias detection over bullet/achievement text.
//! Single source of truth for these signals: the scoring engine and the
//! auto-fix recommender both consume this module instead of keeping their
//! own pattern lists.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::Resume;

static QUANTIFICATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\d+%",                          // percentages: 40%
        r"(?i)\$\d+",                         // dollar amounts: $1000
        r"(?i)R\s?\d+",                       // rand amounts: R1000
        r"(?i)£\d+",                          // pound amounts
        r"(?i)€\d+",                          // euro amounts
        r"(?i)\d+[KMB]\b",                    // 10K, 5M, 2B
        r"(?i)\d+\s*(million|billion|thousand)",
        r"(?i)\d+\+",                         // 100+
        r"(?i)\d{1,3}(,\d{3})+",              // 1,000 or 1,000,000
        r"(?i)\b\d+x\b",                      // 5x improvement
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static IMPACT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\d+%\s*(increase|decrease|improvement|growth|reduction)",
        r"(?i)(increased|decreased|improved|grew|reduced).*\d+%",
        r"(?i)\$[\d,]+\s*(revenue|savings|budget)",
        r"(?i)\d+[KMB]\s*(users|customers|transactions)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static BIAS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(date\s+of\s+birth|dob|born\s+on)\b",
        r"\b(age|gender|male|female|married|single)\b",
        r"\b(nationality|religion|race)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Weak verbs that auto-fix suggestions replace with strong alternatives.
pub const WEAK_VERBS: &[&str] = &["responsible for", "worked on", "helped with", "did", "made"];

pub const STRONG_VERBS: &[&str] =
    &["Led", "Developed", "Implemented", "Optimized", "Achieved", "Designed"];

/// Whether a statement carries a quantified metric (%, currency, count).
pub fn contains_quantification(text: &str) -> bool {
    QUANTIFICATION_PATTERNS.iter().any(|p| p.is_match(text))
}

/// Whether a statement ties a metric to an outcome ("reduced latency 40%").
pub fn has_impact_statement(text: &str) -> bool {
    IMPACT_PATTERNS.iter().any(|p| p.is_match(text))
}

/// Whether text mentions bias-risk personal details (DOB, gender, ...).
/// Matches on lowercased input.
pub fn has_bias_indicators(text: &str) -> bool {
    let lower = text.to_lowercase();
    BIAS_PATTERNS.iter().any(|p| p.is_match(&lower))
}

static BIAS_DOB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(date\s+of\s+birth|dob)\b").unwrap());
static BIAS_GENDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(gender|male|female)\b").unwrap());
static BIAS_NATIONALITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(nationality|religion)\b").unwrap());

/// Per-category bias hits, for individual warning flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct BiasIndicators {
    pub date_of_birth: bool,
    pub gender: bool,
    pub nationality: bool,
}

pub fn detect_bias_indicators(text: &str) -> BiasIndicators {
    let lower = text.to_lowercase();
    BiasIndicators {
        date_of_birth: BIAS_DOB.is_match(&lower),
        gender: BIAS_GENDER.is_match(&lower),
        nationality: BIAS_NATIONALITY.is_match(&lower),
    }
}

/// Bullet-level quantification counts across all experience entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantificationSummary {
    pub total_bullets: usize,
    pub quantified_bullets: usize,
}

impl QuantificationSummary {
    /// Percentage of bullets with a metric; 0 when there are no bullets.
    pub fn rate(&self) -> f64 {
        if self.total_bullets == 0 {
            return 0.0;
        }
        self.quantified_bullets as f64 / self.total_bullets as f64 * 100.0
    }
}

pub fn summarize_quantification(resume: &Resume) -> QuantificationSummary {
    let mut summary = QuantificationSummary::default();
    for exp in &resume.experience {
        summary.total_bullets += exp.bullets.len();
        summary.quantified_bullets += exp
            .bullets
            .iter()
            .filter(|b| contains_quantification(b))
            .count();
    }
    summary
}
