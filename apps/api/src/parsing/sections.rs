//! Section detection: classifies text blocks into semantic resume sections
//! by matching them against a heading synonym dictionary.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::{RawDocument, RawSections, SectionType};

/// Canonical section -> heading synonyms seen in real resumes. Matching is
/// exact (after normalization) — no fuzzy matching, so unrecognized heading
/// phrasings silently merge content into the previous section.
const SECTION_HEADINGS: &[(SectionType, &[&str])] = &[
    (
        SectionType::Summary,
        &[
            "summary",
            "professional summary",
            "career summary",
            "executive summary",
            "profile",
            "professional profile",
            "objective",
            "career objective",
            "about",
            "about me",
            "personal statement",
        ],
    ),
    (
        SectionType::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment",
            "employment history",
            "work history",
            "career history",
            "relevant experience",
        ],
    ),
    (
        SectionType::Education,
        &[
            "education",
            "academic background",
            "academics",
            "educational background",
            "academic history",
            "qualifications",
        ],
    ),
    (
        SectionType::Skills,
        &[
            "skills",
            "technical skills",
            "core competencies",
            "competencies",
            "key skills",
            "skills and abilities",
            "areas of expertise",
            "technologies",
        ],
    ),
    (
        SectionType::Projects,
        &[
            "projects",
            "personal projects",
            "key projects",
            "selected projects",
            "academic projects",
        ],
    ),
    (
        SectionType::Certifications,
        &[
            "certifications",
            "certificates",
            "licenses",
            "licenses and certifications",
            "professional certifications",
        ],
    ),
    (
        SectionType::Achievements,
        &[
            "achievements",
            "awards",
            "honors",
            "accomplishments",
            "awards and honors",
        ],
    ),
    (
        SectionType::Languages,
        &["languages", "language proficiency"],
    ),
    (
        SectionType::References,
        &["references", "referees"],
    ),
];

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Checks whether a block is a section heading.
pub fn detect_section_heading(text: &str) -> Option<SectionType> {
    let lower = text.to_lowercase();
    let normalized = PUNCTUATION.replace_all(&lower, "");
    let normalized = normalized.trim();
    let collapsed: String = normalized.split_whitespace().collect::<Vec<_>>().join("");

    for (section, synonyms) in SECTION_HEADINGS {
        for synonym in *synonyms {
            if normalized == *synonym || collapsed == synonym.replace(' ', "") {
                return Some(*section);
            }
        }
    }
    None
}

/// Walks the document blocks in order: a heading block opens a new current
/// section, every other block joins the current one. Blocks before the first
/// recognized heading are dropped.
pub fn detect_sections(document: &RawDocument) -> RawSections {
    let mut sections: BTreeMap<SectionType, Vec<String>> = BTreeMap::new();
    let mut current: Option<SectionType> = None;

    for block in &document.blocks {
        if let Some(section) = detect_section_heading(block) {
            current = Some(section);
            sections.entry(section).or_default();
        } else if let Some(section) = current {
            sections.entry(section).or_default().push(block.clone());
        }
    }

    RawSections { sections }
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

    #[test]
    fn test_heading_exact_match() {
        assert_eq!(detect_section_heading("Experience"), Some(SectionType::Experience));
        assert_eq!(detect_section_heading("EDUCATION"), Some(SectionType::Education));
    }

    #[test]
    fn test_heading_synonym_match() {
        assert_eq!(
            detect_section_heading("Professional Experience"),
            Some(SectionType::Experience)
        );
        assert_eq!(
            detect_section_heading("Core Competencies"),
            Some(SectionType::Skills)
        );
    }

    #[test]
    fn test_heading_punctuation_stripped() {
        assert_eq!(detect_section_heading("SKILLS:"), Some(SectionType::Skills));
        assert_eq!(detect_section_heading("— Education —"), Some(SectionType::Education));
    }

    #[test]
    fn test_heading_space_collapsed_match() {
        assert_eq!(
            detect_section_heading("W o r k  E x p e r i e n c e"),
            Some(SectionType::Experience)
        );
    }

    #[test]
    fn test_heading_no_fuzzy_match() {
        assert_eq!(detect_section_heading("My Work Stuff"), None);
        assert_eq!(detect_section_heading("Experiences and More"), None);
    }

    #[test]
    fn test_blocks_grouped_under_current_heading() {
        let doc = make_document(&[
            "JOHN DOE",
            "Experience",
            "Engineer at Acme",
            "Built things",
            "Education",
            "BSc Computer Science",
        ]);
        let sections = detect_sections(&doc);
        assert_eq!(
            sections.blocks(SectionType::Experience),
            ["Engineer at Acme", "Built things"]
        );
        assert_eq!(
            sections.blocks(SectionType::Education),
            ["BSc Computer Science"]
        );
    }

    #[test]
    fn test_blocks_before_first_heading_dropped() {
        let doc = make_document(&["JOHN DOE", "john@example.com", "Skills", "Rust, Python"]);
        let sections = detect_sections(&doc);
        assert_eq!(sections.sections.len(), 1);
        assert_eq!(sections.blocks(SectionType::Skills), ["Rust, Python"]);
    }

    #[test]
    fn test_empty_document_has_no_sections() {
        let doc = make_document(&[]);
        assert!(detect_sections(&doc).sections.is_empty());
    }
}
