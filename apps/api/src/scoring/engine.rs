//! Multi-tier resume scoring engine.
//!
//! Pure function per invocation: given a parsed resume, its shared analysis,
//! and the scan mode, it produces component scores, a weighted overall score,
//! and typed findings. Weights by mode:
//!
//!   BASIC:  ats_compliance 50%, layout 30%, readability 20%
//!   ATS:    ats_compliance 25%, experience 25%, skills 20%, readability 15%, layout 15%
//!   EXPERT: same as ATS, plus a bounded recruiter adjustment
//!
//! Every component score and the overall score stay within [0, 100]
//! regardless of input degeneracy; empty sections score 0, never error.

use std::collections::HashSet;

use serde_json::json;

use crate::analysis::quantify::{
    detect_bias_indicators, has_bias_indicators, has_impact_statement, QuantificationSummary,
};
use crate::analysis::structure::StructureFlags;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::{round1, DocumentAnalysis};
use crate::models::resume::Resume;
use crate::models::scoring::{
    ExperienceMetrics, LengthMetrics, ResumeScore, ScanMode, SkillsMetrics,
};
use crate::scoring::findings::{render_comments, render_flags, Finding, FindingKind};
use crate::scoring::industry::{display_name, industry_profile};

struct ModeWeights {
    ats: f64,
    experience: f64,
    skills: f64,
    readability: f64,
    layout: f64,
}

const BASIC_WEIGHTS: ModeWeights = ModeWeights {
    ats: 0.50,
    experience: 0.0,
    skills: 0.0,
    readability: 0.20,
    layout: 0.30,
};

const CONTENT_WEIGHTS: ModeWeights = ModeWeights {
    ats: 0.25,
    experience: 0.25,
    skills: 0.20,
    readability: 0.15,
    layout: 0.15,
};

fn weights_for(mode: ScanMode) -> &'static ModeWeights {
    match mode {
        ScanMode::Basic => &BASIC_WEIGHTS,
        ScanMode::Ats | ScanMode::Expert => &CONTENT_WEIGHTS,
    }
}

/// Score plus the typed findings it was rendered from. The findings feed the
/// auto-fix recommender.
pub struct ScoreOutcome {
    pub score: ResumeScore,
    pub findings: Vec<Finding>,
}

pub fn score_resume(
    resume: &Resume,
    analysis: &DocumentAnalysis,
    mode: ScanMode,
    job_description: Option<&str>,
    industry: Option<&str>,
    tokenizer: &dyn Tokenizer,
) -> ScoreOutcome {
    let structure = &analysis.structure;
    let quant = &analysis.quantification;

    let ats_score = ats_compliance_score(resume, structure);
    let readability_score = analysis.readability.readability_score;
    let (layout_score, length_metrics) = layout_score(analysis.word_count, structure);

    let (experience, experience_metrics, skills, skills_metrics) = if mode.scores_content() {
        let (exp_score, exp_metrics) = experience_score(resume, quant, industry);
        let (skl_score, skl_metrics) = skills_score(resume, industry);
        (Some(exp_score), Some(exp_metrics), Some(skl_score), Some(skl_metrics))
    } else {
        (None, None, None, None)
    };

    let weights = weights_for(mode);
    let mut overall = ats_score * weights.ats
        + experience.unwrap_or(0.0) * weights.experience
        + skills.unwrap_or(0.0) * weights.skills
        + readability_score * weights.readability
        + layout_score * weights.layout;

    // EXPERT adjustment is additive on the weighted sum, then re-clamped.
    if mode == ScanMode::Expert {
        overall = (overall + expert_adjustment(resume, quant, industry)).clamp(0.0, 100.0);
    }

    let job_match = job_description.map(|jd| job_match_score(tokenizer, resume, jd));

    let findings = collect_findings(FindingInputs {
        resume,
        structure,
        quant,
        mode,
        ats_score,
        readability_score,
        layout_score,
        experience,
        skills,
        word_count: analysis.word_count,
        industry,
    });

    let mut detailed_metrics = json!({
        "readability": {
            "flesch_reading_ease": analysis.readability.flesch_reading_ease,
            "flesch_kincaid_grade": analysis.readability.flesch_kincaid_grade,
            "avg_words_per_sentence": analysis.readability.avg_words_per_sentence,
        },
        "layout": {
            "word_count": length_metrics.word_count,
            "estimated_pages": length_metrics.estimated_pages,
        },
        "structure": {
            "has_contact": resume.contact.email.is_some() || resume.contact.phone.is_some(),
            "has_summary": resume.summary.is_some(),
            "has_experience": !resume.experience.is_empty(),
            "has_education": !resume.education.is_empty(),
            "has_skills": !resume.skills.is_empty(),
        },
    });
    if let Some(m) = &experience_metrics {
        detailed_metrics["experience"] = json!({
            "total_roles": m.total_roles,
            "avg_bullets_per_role": m.avg_bullets_per_role,
            "quantified_achievements": m.quantified_achievements,
            "quantification_rate": m.quantification_rate,
        });
    }
    if let Some(m) = &skills_metrics {
        detailed_metrics["skills"] = json!({
            "total_skills": m.total_skills,
            "categorized_skills": m.categorized_skills,
            "unique_categories": m.unique_categories,
        });
    }

    let score = ResumeScore {
        overall: round1(overall),
        ats_compliance: round1(ats_score),
        readability: round1(readability_score),
        layout: round1(layout_score),
        experience: experience.map(round1),
        skills: skills.map(round1),
        job_match: job_match.map(round1),
        comments: render_comments(&findings),
        flags: render_flags(&findings),
        mode,
        industry: industry.map(ToOwned::to_owned),
        detailed_metrics,
    };

    ScoreOutcome { score, findings }
}

// ────────────────────────────────────────────────────────────────────────────
// Component scores
// ────────────────────────────────────────────────────────────────────────────

/// Fixed-point penalties against a 100 baseline; an image-only PDF is an
/// immediate 10 (the document cannot be parsed by an ATS at all).
fn ats_compliance_score(resume: &Resume, structure: &StructureFlags) -> f64 {
    if structure.is_image_only_pdf {
        return 10.0;
    }

    let mut score: f64 = 100.0;

    if resume.contact.email.is_none() {
        score -= 15.0;
    }
    if resume.contact.phone.is_none() {
        score -= 10.0;
    }

    if structure.has_tables {
        score -= 15.0;
    }
    if structure.has_images {
        score -= 10.0;
    }
    if structure.has_columns {
        score -= 8.0;
    }

    if resume.summary.is_none() {
        score -= 5.0;
    }
    if resume.experience.is_empty() {
        score -= 20.0;
    }
    if resume.education.is_empty() {
        score -= 10.0;
    }
    if resume.skills.is_empty() {
        score -= 10.0;
    }

    // ATS prefers 1-2 pages
    if structure.page_count > 3 {
        score -= 10.0;
    }

    score.clamp(0.0, 100.0)
}

/// Word-count banding: 400-1500 words is ideal, very short resumes are
/// penalized steeply, very long ones mildly.
fn layout_score(word_count: usize, structure: &StructureFlags) -> (f64, LengthMetrics) {
    let estimated_pages = word_count as f64 / 450.0;
    let is_too_short = word_count < 150;
    let is_too_long = word_count > 2000;

    let mut score = 100.0;
    if is_too_short {
        score -= (150 - word_count) as f64 * 0.4;
    } else if is_too_long {
        score -= (word_count - 2000) as f64 * 0.03;
    } else if (400..=1500).contains(&word_count) {
        score = 100.0;
    } else if (200..400).contains(&word_count) {
        score = 80.0;
    } else if (1501..=2000).contains(&word_count) {
        score = 85.0;
    }

    if structure.has_columns {
        score -= 5.0;
    }
    if structure.has_headers_footers {
        score -= 3.0;
    }

    let score = score.clamp(0.0, 100.0);

    let metrics = LengthMetrics {
        word_count,
        estimated_pages: round1(estimated_pages),
        is_too_short,
        is_too_long,
        length_score: round1(score),
    };
    (score, metrics)
}

/// Bucketed points for role count, bullet density, and quantification rate,
/// plus an industry action-verb bonus. Capped at 100.
fn experience_score(
    resume: &Resume,
    quant: &QuantificationSummary,
    industry: Option<&str>,
) -> (f64, ExperienceMetrics) {
    let total_roles = resume.experience.len();
    if total_roles == 0 {
        return (0.0, ExperienceMetrics::default());
    }

    let avg_bullets_per_role = quant.total_bullets as f64 / total_roles as f64;
    let quantification_rate = quant.rate();

    let mut score: f64 = 0.0;

    score += match total_roles {
        0 => 0.0,
        1 => 10.0,
        2 => 20.0,
        _ => 30.0,
    };

    score += if (3.0..=5.0).contains(&avg_bullets_per_role) {
        30.0
    } else if avg_bullets_per_role > 5.0 {
        25.0
    } else if avg_bullets_per_role >= 2.0 {
        15.0
    } else if avg_bullets_per_role >= 1.0 {
        5.0
    } else {
        0.0
    };

    score += if quantification_rate >= 40.0 {
        40.0
    } else if quantification_rate >= 25.0 {
        30.0
    } else if quantification_rate >= 15.0 {
        20.0
    } else if quantification_rate > 0.0 {
        10.0
    } else {
        0.0
    };

    if let Some(profile) = industry.and_then(industry_profile) {
        let verb_matches = resume
            .experience
            .iter()
            .flat_map(|exp| exp.bullets.iter())
            .filter(|bullet| {
                let lower = bullet.to_lowercase();
                profile.action_verbs.iter().any(|verb| lower.contains(verb))
            })
            .count();

        score += match verb_matches {
            0 => 0.0,
            1..=2 => 2.0,
            3..=4 => 5.0,
            _ => 10.0,
        };
    }

    let score = score.min(100.0);
    let metrics = ExperienceMetrics {
        total_roles,
        avg_bullets_per_role: round1(avg_bullets_per_role),
        quantified_achievements: quant.quantified_bullets,
        quantification_rate: round1(quantification_rate),
        experience_score: round1(score),
    };
    (score, metrics)
}

/// Bucketed points for skill count, taxonomy categorization rate, and
/// category diversity, plus an industry keyword bonus. Capped at 100.
fn skills_score(resume: &Resume, industry: Option<&str>) -> (f64, SkillsMetrics) {
    let total_skills = resume.skills.len();
    if total_skills == 0 {
        return (0.0, SkillsMetrics::default());
    }

    let categorized_skills = resume.skills.iter().filter(|s| s.category.is_some()).count();
    let unique_categories = resume
        .skills
        .iter()
        .filter_map(|s| s.category.as_deref())
        .collect::<HashSet<_>>()
        .len();

    let mut score: f64 = 0.0;

    score += if total_skills >= 15 {
        40.0
    } else if total_skills >= 10 {
        30.0
    } else if total_skills >= 5 {
        20.0
    } else {
        10.0
    };

    let categorization_rate = categorized_skills as f64 / total_skills as f64 * 100.0;
    score += if categorization_rate >= 70.0 {
        30.0
    } else if categorization_rate >= 50.0 {
        20.0
    } else if categorization_rate >= 30.0 {
        10.0
    } else {
        0.0
    };

    score += if unique_categories >= 5 {
        30.0
    } else if unique_categories >= 3 {
        20.0
    } else if unique_categories >= 2 {
        10.0
    } else {
        0.0
    };

    if let Some(profile) = industry.and_then(industry_profile) {
        let mut all_text = resume
            .skills
            .iter()
            .map(|s| s.normalized_name.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        all_text.push(' ');
        all_text.push_str(&resume.raw_text.to_lowercase());

        let matched = profile
            .technical_skills
            .iter()
            .filter(|skill| all_text.contains(**skill))
            .count();
        let match_rate = matched as f64 / profile.technical_skills.len().max(1) as f64 * 100.0;

        score += if match_rate >= 40.0 {
            15.0
        } else if match_rate >= 25.0 {
            10.0
        } else if match_rate >= 15.0 {
            5.0
        } else {
            0.0
        };
    }

    let score = score.min(100.0);
    let metrics = SkillsMetrics {
        total_skills,
        categorized_skills,
        unique_categories,
        skills_score: round1(score),
    };
    (score, metrics)
}

/// EXPERT-mode recruiter adjustment, bounded by construction to roughly
/// [-10, +14]: impact metrics +5, certifications +3 (+4 industry-matched),
/// summary +2, bias indicators -5, zero quantified bullets -5.
fn expert_adjustment(resume: &Resume, quant: &QuantificationSummary, industry: Option<&str>) -> f64 {
    let mut adjustment = 0.0;

    let has_impact = resume
        .experience
        .iter()
        .flat_map(|exp| exp.bullets.iter())
        .any(|bullet| has_impact_statement(bullet));
    if has_impact {
        adjustment += 5.0;
    }

    if !resume.certifications.is_empty() {
        adjustment += 3.0;

        if let Some(profile) = industry.and_then(industry_profile) {
            let cert_text = resume
                .certifications
                .iter()
                .map(|c| c.name.to_lowercase())
                .collect::<Vec<_>>()
                .join(" ");
            if profile.certifications.iter().any(|c| cert_text.contains(c)) {
                adjustment += 4.0;
            }
        }
    }

    if resume.summary.is_some() {
        adjustment += 2.0;
    }

    if has_bias_indicators(&resume.raw_text) {
        adjustment -= 5.0;
    }

    if quant.quantified_bullets == 0 && !resume.experience.is_empty() {
        adjustment -= 5.0;
    }

    adjustment
}

/// Keyword-overlap job match: |jd words ∩ resume words| / |jd words|,
/// boosted 1.5x and capped at 100. Defaults to 50 when the description
/// yields no usable keywords.
fn job_match_score(tokenizer: &dyn Tokenizer, resume: &Resume, job_description: &str) -> f64 {
    let job_words: HashSet<String> = tokenizer
        .words(&job_description.to_lowercase())
        .into_iter()
        .filter(|w| w.len() > 2)
        .collect();

    if job_words.is_empty() {
        return 50.0;
    }

    let mut resume_words: HashSet<String> = tokenizer
        .words(&resume.raw_text.to_lowercase())
        .into_iter()
        .collect();
    for skill in &resume.skills {
        resume_words.insert(skill.name.to_lowercase());
        resume_words.insert(skill.normalized_name.clone());
    }

    let common = job_words.intersection(&resume_words).count();
    let overlap_rate = common as f64 / job_words.len() as f64 * 100.0;

    (overlap_rate * 1.5).min(100.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Findings
// ────────────────────────────────────────────────────────────────────────────

struct FindingInputs<'a> {
    resume: &'a Resume,
    structure: &'a StructureFlags,
    quant: &'a QuantificationSummary,
    mode: ScanMode,
    ats_score: f64,
    readability_score: f64,
    layout_score: f64,
    experience: Option<f64>,
    skills: Option<f64>,
    word_count: usize,
    industry: Option<&'a str>,
}

/// Independent rule passes over the same inputs; condition order decides
/// which advice surfaces before the comment cutoff.
fn collect_findings(inputs: FindingInputs<'_>) -> Vec<Finding> {
    let FindingInputs {
        resume,
        structure,
        quant,
        mode,
        ats_score,
        readability_score,
        layout_score,
        experience,
        skills,
        word_count,
        industry,
    } = inputs;

    let mut findings = Vec::new();

    // Warning flags.
    if structure.is_image_only_pdf {
        findings.push(Finding::flag(
            FindingKind::ImageOnlyPdf,
            "ATS cannot parse images - use a text-based PDF",
        ));
    }
    if resume.contact.email.is_none() {
        findings.push(Finding::flag(FindingKind::MissingEmail, "Missing contact email"));
    }
    if resume.contact.phone.is_none() {
        findings.push(Finding::flag(FindingKind::MissingPhone, "Missing phone number"));
    }
    if structure.has_tables {
        findings.push(Finding::flag(
            FindingKind::TablesDetected,
            "Tables may not parse correctly in ATS systems",
        ));
    }
    if structure.has_images {
        findings.push(Finding::flag(
            FindingKind::ImagesDetected,
            "Images or photos may increase bias risk",
        ));
    }
    if structure.page_count > 2 {
        findings.push(Finding::flag(
            FindingKind::TooManyPages,
            "Resume is longer than recommended (2 pages max)",
        ));
    }
    if mode.scores_content() {
        if quant.total_bullets > 0 && quant.quantified_bullets == 0 {
            findings.push(Finding::flag(
                FindingKind::NoQuantifiedAchievements,
                "No achievements quantified - add metrics and numbers",
            ));
        }
        if resume.summary.is_none() {
            findings.push(Finding::flag(
                FindingKind::MissingSummary,
                "Missing professional summary",
            ));
        }
        if resume.skills.len() < 5 {
            findings.push(Finding::flag(
                FindingKind::SparseSkills,
                "Limited skills listed - consider adding more",
            ));
        }
    }
    if mode == ScanMode::Expert {
        let bias = detect_bias_indicators(&resume.raw_text);
        if bias.date_of_birth {
            findings.push(Finding::flag(
                FindingKind::BiasDateOfBirth,
                "Personal info increases bias risk (date of birth)",
            ));
        }
        if bias.gender {
            findings.push(Finding::flag(
                FindingKind::BiasGender,
                "Personal info increases bias risk (gender)",
            ));
        }
        if bias.nationality {
            findings.push(Finding::flag(
                FindingKind::BiasNationality,
                "Personal info increases bias risk (nationality/religion)",
            ));
        }
    }

    // Improvement advice.
    if ats_score < 70.0 {
        if resume.contact.email.is_none() {
            findings.push(Finding::advice(
                FindingKind::MissingEmail,
                "Add a professional email address for recruiter contact",
            ));
        }
        if resume.experience.is_empty() {
            findings.push(Finding::advice(
                FindingKind::MissingExperience,
                "Include work experience to strengthen your resume",
            ));
        }
        if resume.skills.is_empty() {
            findings.push(Finding::advice(
                FindingKind::MissingSkillsSection,
                "Add a skills section with relevant keywords",
            ));
        }
    }

    if readability_score < 70.0 {
        findings.push(Finding::advice(
            FindingKind::PoorReadability,
            "Improve readability by shortening long sentences",
        ));
        findings.push(Finding::advice(
            FindingKind::PoorReadability,
            "Use simpler language where possible",
        ));
    }

    if layout_score < 70.0 {
        if word_count < 300 {
            findings.push(Finding::advice(
                FindingKind::TooShort,
                "Resume is too short - add more detail to experience",
            ));
        } else if word_count > 1500 {
            findings.push(Finding::advice(
                FindingKind::TooLong,
                "Consider condensing resume to 1-2 pages",
            ));
        }
    }

    if let Some(profile) = industry.and_then(industry_profile) {
        let name = display_name(profile.key);
        let text_lower = resume.raw_text.to_lowercase();
        let matched_skills = profile
            .technical_skills
            .iter()
            .filter(|s| text_lower.contains(**s))
            .count();
        if matched_skills < 3 {
            findings.push(Finding::advice(
                FindingKind::MissingIndustrySkills,
                format!("Add more {name}-specific technical skills to match industry standards"),
            ));
        }

        let cert_text = resume
            .certifications
            .iter()
            .map(|c| c.name.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        let has_industry_cert = profile.certifications.iter().any(|c| cert_text.contains(c));
        if !has_industry_cert && resume.certifications.is_empty() {
            findings.push(Finding::advice(
                FindingKind::MissingIndustryCertifications,
                format!("Consider adding {name}-relevant certifications to boost credibility"),
            ));
        }
    }

    if let Some(exp_score) = experience {
        if exp_score < 70.0 {
            if quant.quantified_bullets == 0 {
                findings.push(Finding::advice(
                    FindingKind::NoQuantifiedAchievements,
                    "Add metrics to show real impact (e.g., 'Increased efficiency by 20%')",
                ));
            }
            let avg_bullets =
                quant.total_bullets as f64 / resume.experience.len().max(1) as f64;
            if avg_bullets < 3.0 {
                findings.push(Finding::advice(
                    FindingKind::LowBulletDensity,
                    "Add 3-5 bullet points per role describing key achievements",
                ));
            }
        }
    }

    if let Some(skl_score) = skills {
        if skl_score < 70.0 {
            if resume.skills.len() < 10 {
                findings.push(Finding::advice(
                    FindingKind::SparseSkills,
                    "Add a skills section with more relevant keywords",
                ));
            }
            findings.push(Finding::advice(
                FindingKind::NarrowSkillMix,
                "Include both technical and soft skills",
            ));
        }
    }

    if resume.summary.is_none() {
        findings.push(Finding::advice(
            FindingKind::MissingSummary,
            "Add a professional summary at the top of your resume",
        ));
    }

    if resume.certifications.is_empty() && mode == ScanMode::Expert {
        findings.push(Finding::advice(
            FindingKind::MissingCertifications,
            "Consider adding relevant certifications to stand out",
        ));
    }

    if has_inconsistent_bullets(resume) {
        findings.push(Finding::advice(
            FindingKind::InconsistentBullets,
            "Ensure consistent bullet formatting - start each with a strong action verb",
        ));
    }

    findings
}

/// Checks whether any role mixes capitalized action-verb bullets with
/// other phrasing (first three bullets per role).
fn has_inconsistent_bullets(resume: &Resume) -> bool {
    for exp in &resume.experience {
        if exp.bullets.is_empty() {
            continue;
        }
        let mut saw_action = false;
        let mut saw_other = false;
        for bullet in exp.bullets.iter().take(3) {
            match bullet.split_whitespace().next() {
                Some(word) if word.chars().next().is_some_and(char::is_uppercase) => {
                    saw_action = true
                }
                Some(_) => saw_other = true,
                None => {}
            }
        }
        if saw_action && saw_other {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_resume;
    use crate::analysis::tokenizer::UnicodeTokenizer;
    use crate::models::resume::{
        CertificationItem, ContactInfo, ExperienceItem, RawDocument, SkillItem,
    };
    use crate::parsing::extractor::parse_resume;
    use crate::parsing::taxonomy::category_for;
    use crate::scoring::findings::MAX_COMMENTS;

    const TOK: UnicodeTokenizer = UnicodeTokenizer;

    fn score(
        resume: &Resume,
        mode: ScanMode,
        job_description: Option<&str>,
        industry: Option<&str>,
    ) -> ScoreOutcome {
        let analysis = analyze_resume(&TOK, resume);
        score_resume(resume, &analysis, mode, job_description, industry, &TOK)
    }

    fn make_skill(name: &str) -> SkillItem {
        let normalized = name.to_lowercase();
        SkillItem {
            name: name.to_string(),
            category: category_for(&normalized).map(ToOwned::to_owned),
            normalized_name: normalized,
        }
    }

    fn make_role(bullets: &[&str]) -> ExperienceItem {
        ExperienceItem {
            job_title: Some("Software Engineer".to_string()),
            company: Some("Acme Corp".to_string()),
            start_date: Some("2020-01".to_string()),
            is_current: true,
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            raw_text: bullets.join("\n"),
            ..ExperienceItem::default()
        }
    }

    /// A reasonably complete resume with long enough text to clear the
    /// image-only threshold.
    fn solid_resume() -> Resume {
        let raw_text = "Seasoned engineer who designs and ships reliable backend services. "
            .repeat(20);
        Resume {
            name: Some("Jane Smith".to_string()),
            contact: ContactInfo {
                email: Some("jane@example.com".to_string()),
                phone: Some("555 123 4567".to_string()),
                ..ContactInfo::default()
            },
            summary: Some("Backend engineer focused on reliability.".to_string()),
            experience: vec![
                make_role(&[
                    "Improved throughput by 40%",
                    "Reduced costs by $50,000",
                    "Mentored 4 engineers",
                ]),
                make_role(&[
                    "Migrated services to Kubernetes",
                    "Cut deploy time by 30%",
                    "Introduced integration testing",
                ]),
                make_role(&[
                    "Built payment APIs",
                    "Served 10K+ users",
                    "Automated reporting",
                ]),
            ],
            education: vec![crate::models::resume::EducationItem {
                degree: Some("BSc".to_string()),
                institution: Some("State University".to_string()),
                graduation_year: Some("2014".to_string()),
                ..crate::models::resume::EducationItem::default()
            }],
            skills: [
                "Python", "Java", "SQL", "Docker", "Kubernetes", "AWS", "Leadership",
                "Communication", "Terraform", "PostgreSQL",
            ]
            .iter()
            .map(|s| make_skill(s))
            .collect(),
            raw_text,
            ..Resume::default()
        }
    }

    #[test]
    fn test_basic_mode_skips_content_scores() {
        let outcome = score(&solid_resume(), ScanMode::Basic, None, None);
        assert!(outcome.score.experience.is_none());
        assert!(outcome.score.skills.is_none());
    }

    #[test]
    fn test_content_modes_populate_content_scores() {
        for mode in [ScanMode::Ats, ScanMode::Expert] {
            let outcome = score(&solid_resume(), mode, None, None);
            assert!(outcome.score.experience.is_some());
            assert!(outcome.score.skills.is_some());
        }
    }

    #[test]
    fn test_all_scores_bounded_for_solid_resume() {
        for mode in [ScanMode::Basic, ScanMode::Ats, ScanMode::Expert] {
            let s = score(&solid_resume(), mode, Some("python backend"), None).score;
            for value in [s.overall, s.ats_compliance, s.readability, s.layout] {
                assert!((0.0..=100.0).contains(&value), "{value} in {mode:?}");
            }
            for value in [s.experience, s.skills, s.job_match].into_iter().flatten() {
                assert!((0.0..=100.0).contains(&value), "{value} in {mode:?}");
            }
        }
    }

    #[test]
    fn test_all_scores_bounded_for_empty_resume() {
        for mode in [ScanMode::Basic, ScanMode::Ats, ScanMode::Expert] {
            let s = score(&Resume::default(), mode, Some(""), None).score;
            assert!((0.0..=100.0).contains(&s.overall), "{mode:?}");
            assert!((0.0..=100.0).contains(&s.ats_compliance));
            if let Some(exp) = s.experience {
                assert_eq!(exp, 0.0);
            }
            if let Some(skl) = s.skills {
                assert_eq!(skl, 0.0);
            }
        }
    }

    #[test]
    fn test_image_only_pdf_floors_ats_score() {
        // fewer than 20 words of raw text
        let resume = Resume {
            raw_text: "scanned".to_string(),
            ..solid_resume()
        };
        let s = score(&resume, ScanMode::Basic, None, None).score;
        assert_eq!(s.ats_compliance, 10.0);
        assert!(s.flags.iter().any(|f| f.contains("text-based PDF")));
    }

    #[test]
    fn test_ats_penalty_for_missing_email() {
        let full = score(&solid_resume(), ScanMode::Basic, None, None).score;
        let mut without = solid_resume();
        without.contact.email = None;
        let partial = score(&without, ScanMode::Basic, None, None).score;
        assert_eq!(full.ats_compliance - partial.ats_compliance, 15.0);
    }

    #[test]
    fn test_ats_penalty_for_missing_sections() {
        let mut resume = solid_resume();
        resume.experience.clear();
        resume.education.clear();
        let s = score(&resume, ScanMode::Basic, None, None).score;
        // baseline 100 - 20 (experience) - 10 (education)
        assert_eq!(s.ats_compliance, 70.0);
    }

    #[test]
    fn test_layout_bands() {
        let flags = StructureFlags::default();
        assert_eq!(layout_score(1000, &flags).0, 100.0);
        assert_eq!(layout_score(300, &flags).0, 80.0);
        assert_eq!(layout_score(1800, &flags).0, 85.0);
        // short: 100 - (150-100)*0.4
        assert_eq!(layout_score(100, &flags).0, 80.0);
        // long: 100 - (2500-2000)*0.03
        assert_eq!(layout_score(2500, &flags).0, 85.0);
        assert_eq!(layout_score(0, &flags).0, 40.0);
    }

    #[test]
    fn test_layout_column_penalty() {
        let flags = StructureFlags {
            has_columns: true,
            ..StructureFlags::default()
        };
        assert_eq!(layout_score(1000, &flags).0, 95.0);
    }

    #[test]
    fn test_experience_buckets_reach_cap() {
        // 3 roles, 3 bullets each, quantification rate above 40%
        let resume = solid_resume();
        let analysis = analyze_resume(&TOK, &resume);
        let (score, metrics) = experience_score(&resume, &analysis.quantification, None);
        assert_eq!(metrics.total_roles, 3);
        assert_eq!(metrics.avg_bullets_per_role, 3.0);
        assert!(metrics.quantification_rate >= 40.0);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_experience_zero_roles_scores_zero() {
        let resume = Resume::default();
        let quant = QuantificationSummary::default();
        let (score, metrics) = experience_score(&resume, &quant, None);
        assert_eq!(score, 0.0);
        assert_eq!(metrics.total_roles, 0);
    }

    #[test]
    fn test_skills_scoring_components() {
        let resume = solid_resume();
        let (score, metrics) = skills_score(&resume, None);
        assert_eq!(metrics.total_skills, 10);
        // all ten skills are in the taxonomy
        assert_eq!(metrics.categorized_skills, 10);
        assert!(metrics.unique_categories >= 3);
        // 30 (count) + 30 (categorization) + >=20 (diversity)
        assert!(score >= 80.0);
    }

    #[test]
    fn test_skills_zero_scores_zero() {
        let (score, metrics) = skills_score(&Resume::default(), None);
        assert_eq!(score, 0.0);
        assert_eq!(metrics.total_skills, 0);
    }

    #[test]
    fn test_expert_certification_bonus_is_monotonic() {
        let without = solid_resume();
        let mut with = solid_resume();
        with.certifications.push(CertificationItem {
            name: "AWS Certified Solutions Architect".to_string(),
            issuer: None,
            date: None,
            raw_text: String::new(),
        });

        let s_without = score(&without, ScanMode::Expert, None, None).score;
        let s_with = score(&with, ScanMode::Expert, None, None).score;
        assert!(s_with.overall >= s_without.overall);
    }

    #[test]
    fn test_expert_penalty_for_unquantified_experience() {
        let mut resume = solid_resume();
        for exp in &mut resume.experience {
            exp.bullets = vec!["Maintained internal services".to_string(); 3];
        }
        let ats = score(&resume, ScanMode::Ats, None, None).score;
        let expert = score(&resume, ScanMode::Expert, None, None).score;
        // EXPERT applies the -5 no-quantification penalty on top of the same
        // weighted sum, minus the +2 summary bonus it also grants.
        assert!(expert.overall <= ats.overall);
    }

    #[test]
    fn test_expert_bias_penalty() {
        let clean = solid_resume();
        let mut biased = solid_resume();
        biased.raw_text.push_str(" Date of Birth: 1985-03-04. Gender: male.");
        let s_clean = score(&clean, ScanMode::Expert, None, None).score;
        let s_biased = score(&biased, ScanMode::Expert, None, None).score;
        assert!(s_biased.overall < s_clean.overall);
        assert!(s_biased.flags.iter().any(|f| f.contains("date of birth")));
        assert!(s_biased.flags.iter().any(|f| f.contains("gender")));
    }

    #[test]
    fn test_industry_bonus_is_monotonic() {
        // solid resume's skills and text lean it-software
        let plain = score(&solid_resume(), ScanMode::Ats, None, None).score;
        let targeted = score(&solid_resume(), ScanMode::Ats, None, Some("it-software")).score;
        assert!(targeted.overall >= plain.overall);
        assert_eq!(targeted.industry.as_deref(), Some("it-software"));
    }

    #[test]
    fn test_unknown_industry_changes_nothing() {
        let plain = score(&solid_resume(), ScanMode::Ats, None, None).score;
        let unknown = score(&solid_resume(), ScanMode::Ats, None, Some("astrology")).score;
        assert_eq!(plain.overall, unknown.overall);
    }

    #[test]
    fn test_job_match_keyword_overlap() {
        let resume = solid_resume();
        let s = score(
            &resume,
            ScanMode::Ats,
            Some("Looking for python kubernetes aws engineer"),
            None,
        )
        .score;
        let job_match = s.job_match.unwrap();
        assert!(job_match > 0.0);
        assert!(job_match <= 100.0);
    }

    #[test]
    fn test_job_match_defaults_to_50_without_keywords() {
        let s = score(&solid_resume(), ScanMode::Ats, Some("a an of"), None).score;
        assert_eq!(s.job_match, Some(50.0));
    }

    #[test]
    fn test_no_job_description_leaves_job_match_none() {
        let s = score(&solid_resume(), ScanMode::Ats, None, None).score;
        assert_eq!(s.job_match, None);
    }

    #[test]
    fn test_comments_capped_at_six() {
        // A weak resume trips many advice rules at once.
        let resume = Resume {
            raw_text: "short resume text with barely twenty words of content to stay above the \
                       image only threshold for scanning purposes"
                .to_string(),
            experience: vec![make_role(&["responsible for various things"])],
            ..Resume::default()
        };
        for mode in [ScanMode::Basic, ScanMode::Ats, ScanMode::Expert] {
            let s = score(&resume, mode, None, Some("finance")).score;
            assert!(s.comments.len() <= MAX_COMMENTS, "{mode:?}");
        }
    }

    #[test]
    fn test_parse_and_score_end_to_end() {
        let document = RawDocument {
            full_text: String::new(),
            blocks: vec![
                "JOHN DOE".to_string(),
                "john.doe@example.com | (555) 123-4567".to_string(),
                "Experience".to_string(),
                "Senior Engineer\nAcme Corp\nJan 2020 - Present\n\u{2022} Improved performance by 40%\n\u{2022} Shipped the billing service".to_string(),
                "Education".to_string(),
                "BSc Computer Science, State University, 2015".to_string(),
                "Skills".to_string(),
                "Python, Java, SQL, Docker, Leadership".to_string(),
            ],
            page_count: None,
        };
        let document = RawDocument {
            full_text: document.blocks.join("\n\n"),
            ..document
        };

        let resume = parse_resume(&document);
        assert!(resume.name.is_some());
        assert!(resume.contact.email.is_some());
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.education.len(), 1);

        let outcome = score(&resume, ScanMode::Ats, None, None);
        assert!(outcome.score.ats_compliance > 70.0, "{}", outcome.score.ats_compliance);
        assert!(outcome.score.experience.unwrap() > 0.0);
    }

    #[test]
    fn test_findings_present_for_missing_contact() {
        let outcome = score(&Resume::default(), ScanMode::Ats, None, None);
        assert!(outcome
            .findings
            .iter()
            .any(|f| f.kind == FindingKind::MissingEmail));
        assert!(outcome
            .findings
            .iter()
            .any(|f| f.kind == FindingKind::MissingPhone));
    }

    #[test]
    fn test_detailed_metrics_structure() {
        let s = score(&solid_resume(), ScanMode::Ats, None, None).score;
        assert!(s.detailed_metrics["readability"]["flesch_reading_ease"].is_number());
        assert!(s.detailed_metrics["structure"]["has_experience"].as_bool().unwrap());
        assert!(s.detailed_metrics["experience"]["total_roles"].is_number());
        assert!(s.detailed_metrics["skills"]["total_skills"].is_number());
    }
}
