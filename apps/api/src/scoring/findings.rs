//! Typed findings emitted by the scoring engine.
//!
//! The engine reports issues as data (`FindingKind` + message + severity);
//! the user-facing `flags`/`comments` strings are rendered from findings,
//! and the auto-fix recommender dispatches on the kind instead of sniffing
//! message text.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    ImageOnlyPdf,
    MissingEmail,
    MissingPhone,
    TablesDetected,
    ImagesDetected,
    TooManyPages,
    NoQuantifiedAchievements,
    MissingSummary,
    SparseSkills,
    BiasDateOfBirth,
    BiasGender,
    BiasNationality,
    MissingExperience,
    MissingSkillsSection,
    PoorReadability,
    TooShort,
    TooLong,
    MissingIndustrySkills,
    MissingIndustryCertifications,
    LowBulletDensity,
    NarrowSkillMix,
    MissingCertifications,
    InconsistentBullets,
}

/// Flags are warnings about the document as-is; advice entries become the
/// improvement-comment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Flag,
    Advice,
}

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn flag(kind: FindingKind, message: impl Into<String>) -> Self {
        Finding {
            kind,
            severity: Severity::Flag,
            message: message.into(),
        }
    }

    pub fn advice(kind: FindingKind, message: impl Into<String>) -> Self {
        Finding {
            kind,
            severity: Severity::Advice,
            message: message.into(),
        }
    }
}

/// Maximum improvement comments surfaced to the caller.
pub const MAX_COMMENTS: usize = 6;

pub fn render_flags(findings: &[Finding]) -> Vec<String> {
    findings
        .iter()
        .filter(|f| f.severity == Severity::Flag)
        .map(|f| f.message.clone())
        .collect()
}

/// Advice messages in rule order, truncated to the first [`MAX_COMMENTS`].
pub fn render_comments(findings: &[Finding]) -> Vec<String> {
    findings
        .iter()
        .filter(|f| f.severity == Severity::Advice)
        .take(MAX_COMMENTS)
        .map(|f| f.message.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_and_comments_split_by_severity() {
        let findings = vec![
            Finding::flag(FindingKind::MissingEmail, "Missing contact email"),
            Finding::advice(FindingKind::MissingSummary, "Add a professional summary"),
        ];
        assert_eq!(render_flags(&findings), ["Missing contact email"]);
        assert_eq!(render_comments(&findings), ["Add a professional summary"]);
    }

    #[test]
    fn test_comments_truncated_to_six() {
        let findings: Vec<Finding> = (0..10)
            .map(|i| Finding::advice(FindingKind::PoorReadability, format!("advice {i}")))
            .collect();
        let comments = render_comments(&findings);
        assert_eq!(comments.len(), MAX_COMMENTS);
        assert_eq!(comments[0], "advice 0");
    }
}
