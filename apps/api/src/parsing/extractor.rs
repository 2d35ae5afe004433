//! Field extraction: turns a raw document into a structured `Resume`.
//!
//! Every extractor degrades to `None` or an empty list when nothing matches;
//! parsing never fails. Downstream scoring treats the gaps as quality
//! signals rather than errors.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::text::extract_bullet_points;
use crate::models::resume::{
    CertificationItem, ContactInfo, EducationItem, ExperienceItem, ProjectItem, RawDocument,
    Resume, SectionType, SkillItem,
};
use crate::parsing::sections::detect_sections;
use crate::parsing::{patterns, taxonomy};

/// Lines inspected when hunting for the candidate name / header contact info.
const HEADER_LINES: usize = 10;

static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());
static ROLE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d{4}|jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)").unwrap()
});
static DEGREE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(BSc|BEng|BA|BS|BE|BTech|Bachelor)\b",
        r"(?i)\b(MSc|MEng|MA|MS|ME|MTech|Master)\b",
        r"(?i)\b(PhD|Doctorate|Ph\.D\.)\b",
        r"(?i)\b(Diploma|Certificate|Associate)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});
static FIELD_OF_STUDY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:BSc|BEng|BA|BS|BTech|Bachelor|MSc|MEng|MA|MS|MTech|Master|PhD|Doctorate)[^,\n]*?\s+(?:in|of)\s+([A-Za-z][A-Za-z& ]{2,40})").unwrap()
});
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b((?:19|20)\d{2})\b").unwrap());
static GPA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)GPA[:\s]*(\d+\.\d+)").unwrap());
static INSTITUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(University|College|Institute|School|Academy)\b").unwrap());
static SKILL_DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,;|\n\u{2022}\u{00b7}]").unwrap());
static CERT_DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\u{2022}]").unwrap());
static CERT_ISSUER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-–—]\s*(.+)$").unwrap());
static TECH_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:technologies|tech stack|stack|built with)\s*:\s*").unwrap());

/// Parses a resume document into structured fields.
pub fn parse_resume(document: &RawDocument) -> Resume {
    let sections = detect_sections(document);

    Resume {
        name: patterns::extract_name(&document.full_text, HEADER_LINES),
        contact: extract_contact_info(&document.full_text),
        summary: extract_summary(&sections.blocks(SectionType::Summary).join("\n\n")),
        experience: extract_experience(&sections.blocks(SectionType::Experience).join("\n\n")),
        education: extract_education(&sections.blocks(SectionType::Education).join("\n\n")),
        skills: extract_skills(&sections.blocks(SectionType::Skills).join("\n")),
        projects: extract_projects(sections.blocks(SectionType::Projects)),
        certifications: extract_certifications(
            &sections.blocks(SectionType::Certifications).join("\n"),
        ),
        languages: extract_languages(&sections.blocks(SectionType::Languages).join("\n")),
        raw_text: document.full_text.clone(),
    }
}

fn extract_contact_info(text: &str) -> ContactInfo {
    let header: String = text.lines().take(HEADER_LINES).collect::<Vec<_>>().join("\n");
    ContactInfo {
        email: patterns::extract_email(text),
        phone: patterns::extract_phone(text),
        linkedin: patterns::extract_linkedin(text),
        github: patterns::extract_github(text),
        website: patterns::extract_website(&header),
        // restricted to the header so job locations don't win
        location: patterns::extract_location(&header),
    }
}

fn extract_summary(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn extract_experience(text: &str) -> Vec<ExperienceItem> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    split_role_blocks(text)
        .iter()
        .filter_map(|block| parse_experience_block(block))
        .collect()
}

/// Splits experience text into per-role blocks: a paragraph that opens with a
/// date-like token (year or month name) starts a new role; other paragraphs
/// are continuations of the current one.
fn split_role_blocks(text: &str) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for block in BLANK_LINE.split(text) {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        if ROLE_START.is_match(block) && !current.is_empty() {
            merged.push(current.join("\n\n"));
            current = vec![block];
        } else {
            current.push(block);
        }
    }
    if !current.is_empty() {
        merged.push(current.join("\n\n"));
    }
    merged
}

fn parse_experience_block(block: &str) -> Option<ExperienceItem> {
    let lines: Vec<&str> = block.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let first = *lines.first()?;

    let dates = patterns::extract_date_range(block);
    let is_current = matches!(&dates, Some((_, Some(end))) if end == "Present");
    let (start_date, end_date) = match dates {
        Some((start, end)) => (Some(start), if is_current { None } else { end }),
        None => (None, None),
    };

    Some(ExperienceItem {
        job_title: Some(first.to_string()),
        company: patterns::extract_organization(&lines),
        location: patterns::extract_location(block),
        start_date,
        end_date,
        is_current,
        bullets: extract_bullet_points(block),
        raw_text: block.to_string(),
    })
}

fn extract_education(text: &str) -> Vec<EducationItem> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    BLANK_LINE
        .split(text)
        .filter_map(parse_education_block)
        .collect()
}

fn parse_education_block(block: &str) -> Option<EducationItem> {
    let block = block.trim();
    if block.is_empty() {
        return None;
    }

    let degree = DEGREE_PATTERNS
        .iter()
        .find_map(|p| p.find(block))
        .map(|m| m.as_str().to_string());

    let field_of_study = FIELD_OF_STUDY
        .captures(block)
        .map(|c| c[1].trim().to_string());

    // most recent year in the block
    let graduation_year = YEAR
        .captures_iter(block)
        .last()
        .map(|c| c[1].to_string());

    let gpa = GPA.captures(block).map(|c| c[1].to_string());

    Some(EducationItem {
        degree,
        field_of_study,
        institution: extract_institution(block),
        location: patterns::extract_location(block),
        graduation_year,
        gpa,
        honors: None,
        raw_text: block.to_string(),
    })
}

fn extract_institution(block: &str) -> Option<String> {
    for line in block.lines() {
        for segment in line.split([',', '|', '\u{2022}']) {
            if INSTITUTION.is_match(segment) {
                return Some(segment.trim().to_string());
            }
        }
    }
    let lines: Vec<&str> = block.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    patterns::extract_organization(&lines)
}

fn extract_skills(text: &str) -> Vec<SkillItem> {
    let mut items = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for raw in SKILL_DELIMITERS.split(text) {
        // drop a "Technical Skills:" style label prefix
        let raw = match raw.split_once(':') {
            Some((_, rest)) => rest,
            None => raw,
        };
        let skill = raw.trim();
        if skill.len() < 2 {
            continue;
        }
        let normalized = skill.to_lowercase();
        if !seen.insert(normalized.clone()) {
            continue;
        }
        items.push(SkillItem {
            name: skill.to_string(),
            category: taxonomy::category_for(&normalized).map(ToOwned::to_owned),
            normalized_name: normalized,
        });
    }
    items
}

fn extract_projects(blocks: &[String]) -> Vec<ProjectItem> {
    blocks
        .iter()
        .filter_map(|block| {
            let lines: Vec<&str> = block.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
            let title = *lines.first()?;

            let technologies = lines
                .iter()
                .find_map(|l| TECH_PREFIX.find(l).map(|m| &l[m.end()..]))
                .map(|rest| {
                    rest.split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(ToOwned::to_owned)
                        .collect()
                })
                .unwrap_or_default();

            let description = (lines.len() > 1).then(|| lines[1..].join("\n"));

            Some(ProjectItem {
                title: Some(title.to_string()),
                description,
                technologies,
                url: patterns::extract_website(block),
                raw_text: block.clone(),
            })
        })
        .collect()
}

fn extract_certifications(text: &str) -> Vec<CertificationItem> {
    CERT_DELIMITERS
        .split(text)
        .filter_map(|line| {
            let line = line.trim();
            if line.len() < 5 {
                return None;
            }
            let (name, issuer) = match CERT_ISSUER.captures(line) {
                Some(c) => {
                    let issuer = c[1].trim().to_string();
                    let name = line[..c.get(0).unwrap().start()].trim().to_string();
                    (name, Some(issuer))
                }
                None => (line.to_string(), None),
            };
            let date = YEAR.captures(line).map(|c| c[1].to_string());
            Some(CertificationItem {
                name,
                issuer,
                date,
                raw_text: line.to_string(),
            })
        })
        .collect()
}

fn extract_languages(text: &str) -> Vec<String> {
    SKILL_DELIMITERS
        .split(text)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_document(blocks: &[&str]) -> RawDocument {
        RawDocument {
            full_text: blocks.join("\n\n"),
            blocks: blocks.iter().map(|b| b.to_string()).collect(),
            page_count: None,
        }
    }

    fn sample_document() -> RawDocument {
        make_document(&[
            "JOHN DOE",
            "john.doe@example.com | (555) 123-4567 | Austin, TX",
            "Summary",
            "Engineer with a decade of shipping backend services.",
            "Experience",
            "Senior Engineer\nAcme Corp\nJan 2020 - Present\n\u{2022} Improved performance by 40%\n\u{2022} Led team of 5 engineers",
            "Education",
            "BSc in Computer Science, State University, 2015",
            "Skills",
            "Python, Java, SQL, Docker, Leadership",
        ])
    }

    #[test]
    fn test_end_to_end_parse() {
        let resume = parse_resume(&sample_document());

        assert_eq!(resume.name.as_deref(), Some("JOHN DOE"));
        assert_eq!(resume.contact.email.as_deref(), Some("john.doe@example.com"));
        assert!(resume.contact.phone.is_some());
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.skills.len(), 5);
    }

    #[test]
    fn test_experience_fields() {
        let resume = parse_resume(&sample_document());
        let exp = &resume.experience[0];

        assert_eq!(exp.job_title.as_deref(), Some("Senior Engineer"));
        assert_eq!(exp.company.as_deref(), Some("Acme Corp"));
        assert_eq!(exp.start_date.as_deref(), Some("2020-01"));
        assert_eq!(exp.end_date, None);
        assert!(exp.is_current);
        assert_eq!(exp.bullets.len(), 2);
        assert_eq!(exp.bullets[0], "Improved performance by 40%");
    }

    #[test]
    fn test_education_fields() {
        let resume = parse_resume(&sample_document());
        let edu = &resume.education[0];

        assert_eq!(edu.degree.as_deref(), Some("BSc"));
        assert_eq!(edu.institution.as_deref(), Some("State University"));
        assert_eq!(edu.graduation_year.as_deref(), Some("2015"));
        assert_eq!(edu.field_of_study.as_deref(), Some("Computer Science"));
    }

    #[test]
    fn test_skills_categorized_and_deduped() {
        let resume = parse_resume(&make_document(&[
            "Skills",
            "Python, python, Rust; Interpretive Dance",
        ]));
        assert_eq!(resume.skills.len(), 3);
        let python = resume.skills.iter().find(|s| s.normalized_name == "python").unwrap();
        assert_eq!(python.category.as_deref(), Some("programming_languages"));
        let dance = resume
            .skills
            .iter()
            .find(|s| s.normalized_name == "interpretive dance")
            .unwrap();
        assert_eq!(dance.category, None);
    }

    #[test]
    fn test_skills_label_prefix_stripped() {
        let resume = parse_resume(&make_document(&["Skills", "Technical Skills: Python, Java"]));
        assert!(resume.skills.iter().any(|s| s.normalized_name == "python"));
        assert!(!resume
            .skills
            .iter()
            .any(|s| s.normalized_name.contains("technical")));
    }

    #[test]
    fn test_role_split_on_date_boundaries() {
        let text = "Senior Engineer\nAcme Corp\n2020 - 2022\n\u{2022} Did things\n\nMore detail on the same role\n\nJan 2018 - Dec 2019\nJunior Engineer\nHooli";
        let roles = split_role_blocks(text);
        assert_eq!(roles.len(), 2);
        // the continuation paragraph merges into the first role
        assert!(roles[0].contains("More detail on the same role"));
        assert!(roles[1].contains("Hooli"));
    }

    #[test]
    fn test_missing_sections_degrade_to_empty() {
        let resume = parse_resume(&make_document(&["JOHN DOE", "just some text"]));
        assert!(resume.experience.is_empty());
        assert!(resume.education.is_empty());
        assert!(resume.skills.is_empty());
        assert!(resume.summary.is_none());
        assert!(resume.certifications.is_empty());
    }

    #[test]
    fn test_certifications_split_name_and_issuer() {
        let resume = parse_resume(&make_document(&[
            "Certifications",
            "AWS Certified Solutions Architect - Amazon Web Services\nCKA 2023",
        ]));
        assert_eq!(resume.certifications.len(), 2);
        assert_eq!(
            resume.certifications[0].name,
            "AWS Certified Solutions Architect"
        );
        assert_eq!(
            resume.certifications[0].issuer.as_deref(),
            Some("Amazon Web Services")
        );
        assert_eq!(resume.certifications[1].date.as_deref(), Some("2023"));
    }

    #[test]
    fn test_projects_title_and_technologies() {
        let resume = parse_resume(&make_document(&[
            "Projects",
            "Inventory Tracker\nBuilt a warehouse dashboard.\nTechnologies: Rust, Postgres",
        ]));
        assert_eq!(resume.projects.len(), 1);
        let project = &resume.projects[0];
        assert_eq!(project.title.as_deref(), Some("Inventory Tracker"));
        assert_eq!(project.technologies, vec!["Rust", "Postgres"]);
    }

    #[test]
    fn test_languages_delimited() {
        let resume = parse_resume(&make_document(&["Languages", "English, Dutch; Spanish"]));
        assert_eq!(resume.languages, vec!["English", "Dutch", "Spanish"]);
    }
}
