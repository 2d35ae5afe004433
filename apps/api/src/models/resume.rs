//! Parsed-resume data model: raw document, detected sections, extracted fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical resume section kinds recognised by the section detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Achievements,
    Languages,
    References,
    Other,
}

/// Raw document produced once per upload. Immutable downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    /// Complete document text.
    pub full_text: String,
    /// Paragraph-level text blocks in reading order.
    pub blocks: Vec<String>,
    /// Page count when the reader can report one (PDF only, best-effort).
    pub page_count: Option<u32>,
}

/// Section-detector output: ordered blocks grouped by section kind.
#[derive(Debug, Clone, Default)]
pub struct RawSections {
    pub sections: BTreeMap<SectionType, Vec<String>>,
}

impl RawSections {
    pub fn blocks(&self, section: SectionType) -> &[String] {
        self.sections.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
}

/// Work experience entry. Dates are free-form strings ("2020-01", "Present"),
/// never validated calendar dates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub bullets: Vec<String>,
    pub raw_text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub institution: Option<String>,
    pub location: Option<String>,
    pub graduation_year: Option<String>,
    pub gpa: Option<String>,
    pub honors: Option<String>,
    pub raw_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    /// Category from the static taxonomy; `None` when unrecognised.
    pub category: Option<String>,
    /// Lowercased form used for dedup and keyword matching.
    pub normalized_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub raw_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationItem {
    pub name: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub raw_text: String,
}

/// Complete parsed resume. Created once by the field extractor and read-only
/// for every downstream consumer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resume {
    pub name: Option<String>,
    pub contact: ContactInfo,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<SkillItem>,
    pub projects: Vec<ProjectItem>,
    pub certifications: Vec<CertificationItem>,
    pub languages: Vec<String>,
    pub raw_text: String,
}
