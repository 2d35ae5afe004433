//! Builder data model: the mutable, user-editable counterpart of a parsed
//! resume. All sections are optional so a resume can be assembled
//! incrementally; list sections are edited by index.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sections that accept entry-level add/remove operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuilderSection {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
    Achievements,
    Languages,
}

impl BuilderSection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "contact" => Some(Self::Contact),
            "summary" => Some(Self::Summary),
            "experience" => Some(Self::Experience),
            "education" => Some(Self::Education),
            "skills" => Some(Self::Skills),
            "certifications" => Some(Self::Certifications),
            "projects" => Some(Self::Projects),
            "achievements" => Some(Self::Achievements),
            "languages" => Some(Self::Languages),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuilderContact {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalSummary {
    pub summary: String,
}

/// Dates use the same free-form convention as parsed resumes:
/// "YYYY-MM" or "Present".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<f64>,
    #[serde(default)]
    pub honors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub github: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub language: String,
    pub proficiency: Option<String>,
}

/// Complete builder document, persisted as JSON keyed by `id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeBuilder {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,

    pub contact: Option<BuilderContact>,
    pub summary: Option<ProfessionalSummary>,

    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,

    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
    /// Free-form sections kept for extensibility; never interpreted.
    #[serde(default)]
    pub custom_sections: Value,
}

/// Partial update payload; unset fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeUpdate {
    pub title: Option<String>,
    pub contact: Option<BuilderContact>,
    pub summary: Option<ProfessionalSummary>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub education: Option<Vec<EducationEntry>>,
    pub skills: Option<Vec<SkillCategory>>,
    pub certifications: Option<Vec<CertificationEntry>>,
    pub projects: Option<Vec<ProjectEntry>>,
    pub achievements: Option<Vec<String>>,
    pub languages: Option<Vec<LanguageEntry>>,
    pub custom_sections: Option<Value>,
}

/// Listing metadata returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSummaryRow {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Uniform response envelope for builder operations.
#[derive(Debug, Clone, Serialize)]
pub struct BuilderResponse {
    pub success: bool,
    pub message: String,
    pub resume: Option<ResumeBuilder>,
}
