//! Auto-fix recommender: maps scoring findings to a catalog of remediation
//! actions. Dispatch is on the typed `FindingKind` carried by each finding,
//! so wording changes in flag/comment text never change behavior.
//!
//! Only a small subset of fixes is mechanically appliable (currently the
//! templated summary); everything else is surfaced as a suggestion.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::analysis::quantify::{contains_quantification, STRONG_VERBS, WEAK_VERBS};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::DocumentAnalysis;
use crate::models::builder::{ProfessionalSummary, ResumeBuilder};
use crate::models::resume::Resume;
use crate::scoring::findings::{Finding, FindingKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixType {
    Length,
    Summary,
    Readability,
    Formatting,
    Quantification,
    Contact,
    Dates,
    Bullets,
    Keywords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixAction {
    Add,
    Remove,
    Modify,
    Reformat,
    Suggest,
}

/// Single remediation recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoFix {
    pub fix_type: FixType,
    pub action: FixAction,
    pub section: String,
    pub description: String,
    pub original_value: Option<Value>,
    pub suggested_value: Option<Value>,
    pub auto_applicable: bool,
    #[serde(default)]
    pub metadata: Value,
}

/// Display priority (1 = highest). Used to sort recommendations.
pub fn fix_priority(fix: &AutoFix) -> u8 {
    match fix.fix_type {
        FixType::Contact => 1,
        FixType::Summary | FixType::Length => 2,
        FixType::Quantification | FixType::Bullets => 3,
        FixType::Readability => 4,
        _ => 5,
    }
}

/// Generates fixes for the findings of a scoring pass. Each fix generator
/// runs at most once per analysis, no matter how many findings point at it.
pub fn generate_fixes(
    resume: &Resume,
    analysis: &DocumentAnalysis,
    findings: &[Finding],
    tokenizer: &dyn Tokenizer,
) -> Vec<AutoFix> {
    let mut fixes = Vec::new();
    let mut dispatched = std::collections::HashSet::new();

    for finding in findings {
        let fix_type = match finding.kind {
            FindingKind::TooLong | FindingKind::TooManyPages => FixType::Length,
            FindingKind::MissingSummary => FixType::Summary,
            FindingKind::PoorReadability => FixType::Readability,
            FindingKind::MissingEmail | FindingKind::MissingPhone => FixType::Contact,
            FindingKind::NoQuantifiedAchievements => FixType::Quantification,
            FindingKind::LowBulletDensity | FindingKind::InconsistentBullets => FixType::Bullets,
            _ => continue,
        };
        if !dispatched.insert(fix_type) {
            continue;
        }
        match fix_type {
            FixType::Length => fixes.extend(fix_length(resume, analysis)),
            FixType::Summary => fixes.extend(fix_summary(resume)),
            FixType::Readability => fixes.extend(fix_readability(resume, tokenizer)),
            FixType::Contact => fixes.extend(fix_contact(resume)),
            FixType::Quantification => fixes.extend(fix_quantification(resume)),
            FixType::Bullets => fixes.extend(fix_bullets(resume)),
            _ => {}
        }
    }

    fixes.sort_by_key(fix_priority);
    fixes
}

fn fix_length(_resume: &Resume, analysis: &DocumentAnalysis) -> Option<AutoFix> {
    let word_count = analysis.word_count;
    // roughly two pages
    if word_count <= 1000 {
        return None;
    }
    Some(AutoFix {
        fix_type: FixType::Length,
        action: FixAction::Modify,
        section: "overall".to_string(),
        description: "Resume exceeds 2 pages. Condense experience descriptions.".to_string(),
        original_value: Some(json!(format!("{word_count} words"))),
        suggested_value: Some(json!("~500-800 words (1-2 pages)")),
        auto_applicable: false,
        metadata: json!({
            "current_words": word_count,
            "target_words": 750,
            "reduction_needed": word_count.saturating_sub(750),
        }),
    })
}

fn fix_summary(resume: &Resume) -> Option<AutoFix> {
    let job_title = resume
        .experience
        .first()
        .and_then(|exp| exp.job_title.as_deref())
        .unwrap_or("Professional");

    let suggested = format!(
        "Experienced {job_title} with proven track record in [key achievement]. \
         Skilled in [top 3 skills] with expertise in [domain]. \
         Passionate about [value proposition] and driving [business outcome]."
    );

    Some(AutoFix {
        fix_type: FixType::Summary,
        action: FixAction::Add,
        section: "summary".to_string(),
        description: "Add a professional summary to introduce your qualifications".to_string(),
        original_value: None,
        suggested_value: Some(json!(suggested)),
        auto_applicable: true,
        metadata: json!({
            "template": true,
            "customization_needed": true,
            "position": "top",
        }),
    })
}

/// One fix per overlong sentence (> 25 words), capped at the worst three.
fn fix_readability(resume: &Resume, tokenizer: &dyn Tokenizer) -> Vec<AutoFix> {
    tokenizer
        .sentences(&resume.raw_text)
        .iter()
        .enumerate()
        .filter(|(_, sentence)| sentence.split_whitespace().count() > 25)
        .take(3)
        .map(|(i, sentence)| {
            let word_count = sentence.split_whitespace().count();
            let preview: String = sentence.chars().take(100).collect();
            AutoFix {
                fix_type: FixType::Readability,
                action: FixAction::Modify,
                section: "content".to_string(),
                description: format!("Shorten sentence {} (currently {} words)", i + 1, word_count),
                original_value: Some(json!(format!("{preview}..."))),
                suggested_value: Some(json!("Break into 2-3 shorter sentences")),
                auto_applicable: false,
                metadata: json!({
                    "word_count": word_count,
                    "target_words": 20,
                    "sentence_index": i,
                }),
            }
        })
        .collect()
}

fn fix_contact(resume: &Resume) -> Option<AutoFix> {
    let mut missing = Vec::new();
    if resume.contact.email.is_none() {
        missing.push("email");
    }
    if resume.contact.phone.is_none() {
        missing.push("phone");
    }
    if resume.contact.location.is_none() {
        missing.push("location");
    }
    if missing.is_empty() {
        return None;
    }

    Some(AutoFix {
        fix_type: FixType::Contact,
        action: FixAction::Add,
        section: "contact".to_string(),
        description: format!("Add missing contact information: {}", missing.join(", ")),
        original_value: Some(json!(resume.contact)),
        suggested_value: Some(json!({
            "email": "your.email@example.com",
            "phone": "+1-XXX-XXX-XXXX",
            "location": "City, State",
        })),
        auto_applicable: false,
        metadata: json!({
            "missing_fields": missing,
            "priority": "high",
        }),
    })
}

/// One fix per experience entry whose bullets carry no metric, capped at
/// three entries.
fn fix_quantification(resume: &Resume) -> Vec<AutoFix> {
    resume
        .experience
        .iter()
        .enumerate()
        .filter(|(_, exp)| !exp.bullets.iter().any(|b| contains_quantification(b)))
        .take(3)
        .map(|(i, exp)| {
            let position = exp.job_title.as_deref().unwrap_or("position");
            let company = exp.company.as_deref().unwrap_or("company");
            let joined = exp.bullets.join(" ");
            let preview: String = joined.chars().take(100).collect();
            AutoFix {
                fix_type: FixType::Quantification,
                action: FixAction::Modify,
                section: format!("experience[{i}]"),
                description: format!("Add metrics to {position} at {company}"),
                original_value: Some(json!(format!("{preview}..."))),
                suggested_value: Some(json!(
                    "Add specific numbers: % improved, $ saved, # managed, etc."
                )),
                auto_applicable: false,
                metadata: json!({
                    "company": exp.company,
                    "position": exp.job_title,
                    "examples": [
                        "Increased sales by 25%",
                        "Managed team of 8 developers",
                        "Reduced costs by $50K annually",
                    ],
                }),
            }
        })
        .collect()
}

/// One fix per weak-verb bullet, capped at five.
fn fix_bullets(resume: &Resume) -> Vec<AutoFix> {
    let mut fixes = Vec::new();
    for (i, exp) in resume.experience.iter().enumerate() {
        for (j, bullet) in exp.bullets.iter().enumerate() {
            let lower = bullet.to_lowercase();
            if !WEAK_VERBS.iter().any(|weak| lower.contains(weak)) {
                continue;
            }
            fixes.push(AutoFix {
                fix_type: FixType::Bullets,
                action: FixAction::Modify,
                section: format!("experience[{i}].bullets[{j}]"),
                description: "Replace weak verb with strong action verb".to_string(),
                original_value: Some(json!(bullet)),
                suggested_value: Some(json!(format!(
                    "Start with: {}...",
                    STRONG_VERBS[..3].join(", ")
                ))),
                auto_applicable: false,
                metadata: json!({
                    "weak_verb_found": true,
                    "suggested_verbs": STRONG_VERBS,
                    "company": exp.company,
                }),
            });
            if fixes.len() >= 5 {
                return fixes;
            }
        }
    }
    fixes
}

/// Applies a fix to a builder document. Returns `(applied, message)`; fixes
/// that are not auto-applicable always come back unapplied.
pub fn apply_fix(builder: &mut ResumeBuilder, fix: &AutoFix) -> (bool, String) {
    if !fix.auto_applicable {
        return (false, "This fix requires manual intervention".to_string());
    }

    if fix.fix_type == FixType::Summary && fix.action == FixAction::Add {
        if builder.summary.is_none() {
            let summary = fix
                .suggested_value
                .as_ref()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            builder.summary = Some(ProfessionalSummary { summary });
            return (true, "Professional summary added successfully".to_string());
        }
        return (false, "Resume already has a summary".to_string());
    }

    (
        false,
        format!("Auto-fix for {:?} not yet implemented", fix.fix_type),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_resume;
    use crate::analysis::tokenizer::UnicodeTokenizer;
    use crate::models::resume::{ContactInfo, ExperienceItem};
    use crate::scoring::findings::Finding;

    const TOK: UnicodeTokenizer = UnicodeTokenizer;

    fn make_resume() -> Resume {
        Resume {
            contact: ContactInfo {
                email: Some("a@b.co".to_string()),
                ..ContactInfo::default()
            },
            experience: vec![ExperienceItem {
                job_title: Some("Engineer".to_string()),
                company: Some("Acme".to_string()),
                bullets: vec![
                    "Responsible for deployments".to_string(),
                    "Worked on internal tools".to_string(),
                ],
                ..ExperienceItem::default()
            }],
            raw_text: "some resume text".to_string(),
            ..Resume::default()
        }
    }

    fn fixes_for(kinds: &[FindingKind], resume: &Resume) -> Vec<AutoFix> {
        let analysis = analyze_resume(&TOK, resume);
        let findings: Vec<Finding> = kinds
            .iter()
            .map(|k| Finding::advice(*k, "message text is irrelevant to dispatch"))
            .collect();
        generate_fixes(resume, &analysis, &findings, &TOK)
    }

    #[test]
    fn test_summary_fix_is_auto_applicable() {
        let fixes = fixes_for(&[FindingKind::MissingSummary], &make_resume());
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].fix_type, FixType::Summary);
        assert!(fixes[0].auto_applicable);
        // template uses the most recent job title
        assert!(fixes[0]
            .suggested_value
            .as_ref()
            .unwrap()
            .as_str()
            .unwrap()
            .contains("Engineer"));
    }

    #[test]
    fn test_contact_fix_lists_missing_fields() {
        let fixes = fixes_for(&[FindingKind::MissingPhone], &make_resume());
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].fix_type, FixType::Contact);
        assert!(fixes[0].description.contains("phone"));
        assert!(!fixes[0].description.contains("email,"));
        assert!(!fixes[0].auto_applicable);
    }

    #[test]
    fn test_quantification_fix_targets_unquantified_roles() {
        let fixes = fixes_for(&[FindingKind::NoQuantifiedAchievements], &make_resume());
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].fix_type, FixType::Quantification);
        assert!(fixes[0].description.contains("Engineer"));
    }

    #[test]
    fn test_bullet_fixes_flag_weak_verbs() {
        let fixes = fixes_for(&[FindingKind::LowBulletDensity], &make_resume());
        assert_eq!(fixes.len(), 2); // both bullets carry weak verbs
        assert!(fixes.iter().all(|f| f.fix_type == FixType::Bullets));
    }

    #[test]
    fn test_length_fix_only_for_long_resumes() {
        assert!(fixes_for(&[FindingKind::TooLong], &make_resume()).is_empty());

        let mut long = make_resume();
        long.raw_text = "word ".repeat(1200);
        let fixes = fixes_for(&[FindingKind::TooLong], &long);
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes[0].fix_type, FixType::Length);
    }

    #[test]
    fn test_readability_fix_caps_at_three_sentences() {
        let mut resume = make_resume();
        let long_sentence = format!("{}. ", vec!["word"; 30].join(" "));
        resume.raw_text = long_sentence.repeat(5);
        let fixes = fixes_for(&[FindingKind::PoorReadability], &resume);
        assert_eq!(fixes.len(), 3);
        assert!(fixes.iter().all(|f| f.fix_type == FixType::Readability));
    }

    #[test]
    fn test_each_generator_runs_once_despite_duplicate_findings() {
        let fixes = fixes_for(
            &[
                FindingKind::MissingSummary,
                FindingKind::MissingSummary,
                FindingKind::MissingEmail,
                FindingKind::MissingPhone,
            ],
            &make_resume(),
        );
        let summary_count = fixes.iter().filter(|f| f.fix_type == FixType::Summary).count();
        let contact_count = fixes.iter().filter(|f| f.fix_type == FixType::Contact).count();
        assert_eq!(summary_count, 1);
        assert_eq!(contact_count, 1);
    }

    #[test]
    fn test_fixes_sorted_by_priority() {
        let fixes = fixes_for(
            &[FindingKind::MissingSummary, FindingKind::MissingPhone],
            &make_resume(),
        );
        // contact (1) sorts ahead of summary (2)
        assert_eq!(fixes[0].fix_type, FixType::Contact);
        assert_eq!(fixes[1].fix_type, FixType::Summary);
    }

    #[test]
    fn test_apply_summary_fix_mutates_builder() {
        let fixes = fixes_for(&[FindingKind::MissingSummary], &make_resume());
        let mut builder = ResumeBuilder::default();
        let (applied, message) = apply_fix(&mut builder, &fixes[0]);
        assert!(applied, "{message}");
        assert!(builder.summary.is_some());

        // applying again is a no-op
        let (applied_again, _) = apply_fix(&mut builder, &fixes[0]);
        assert!(!applied_again);
    }

    #[test]
    fn test_apply_rejects_manual_fixes() {
        let fixes = fixes_for(&[FindingKind::MissingPhone], &make_resume());
        let mut builder = ResumeBuilder::default();
        let (applied, message) = apply_fix(&mut builder, &fixes[0]);
        assert!(!applied);
        assert!(message.contains("manual"));
    }
}
