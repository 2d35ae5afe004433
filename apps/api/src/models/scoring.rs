//! Scoring data model: scan modes, per-component metrics, and the final score.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Analysis depth tier. Drives the component set and the weight table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    #[default]
    Basic,
    Ats,
    Expert,
}

impl ScanMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMode::Basic => "basic",
            ScanMode::Ats => "ats",
            ScanMode::Expert => "expert",
        }
    }

    /// ATS and EXPERT both score experience and skills; BASIC skips them.
    pub fn scores_content(&self) -> bool {
        matches!(self, ScanMode::Ats | ScanMode::Expert)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadabilityMetrics {
    /// Flesch Reading Ease, clamped to [0, 100].
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid grade level, floored at 0.
    pub flesch_kincaid_grade: f64,
    pub avg_words_per_sentence: f64,
    pub avg_syllables_per_word: f64,
    /// Normalized 0-100 score after ideal-band penalties.
    pub readability_score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceMetrics {
    pub total_roles: usize,
    pub avg_bullets_per_role: f64,
    pub quantified_achievements: usize,
    /// Percentage of bullets carrying a numeric/currency metric.
    pub quantification_rate: f64,
    pub experience_score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsMetrics {
    pub total_skills: usize,
    pub categorized_skills: usize,
    pub unique_categories: usize,
    pub skills_score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LengthMetrics {
    pub word_count: usize,
    pub estimated_pages: f64,
    pub is_too_short: bool,
    pub is_too_long: bool,
    pub length_score: f64,
}

/// Complete resume quality score.
///
/// `overall` is a convex combination of the component scores (weights sum to
/// 1.0 per mode) plus a bounded EXPERT adjustment, re-clamped to [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeScore {
    pub overall: f64,

    // Always present.
    pub ats_compliance: f64,
    pub readability: f64,
    pub layout: f64,

    // Populated in ATS/EXPERT modes only.
    pub experience: Option<f64>,
    pub skills: Option<f64>,

    // Only when a job description was supplied.
    pub job_match: Option<f64>,

    /// Improvement suggestions, at most 6.
    pub comments: Vec<String>,
    /// Warning flags.
    pub flags: Vec<String>,

    pub mode: ScanMode,
    pub industry: Option<String>,

    /// Detailed breakdown for advanced display.
    pub detailed_metrics: Value,
}
