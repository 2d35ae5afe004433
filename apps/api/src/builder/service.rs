//! Builder operations: create, import from a parsed resume, partial update,
//! section entry editing, plain-text export, and the read-only `Resume` view
//! used when a builder document is analyzed.

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::builder::{
    BuilderContact, BuilderSection, CertificationEntry, EducationEntry, ExperienceEntry,
    LanguageEntry, ProfessionalSummary, ResumeBuilder, ResumeUpdate, SkillCategory,
};
use crate::models::resume::{
    CertificationItem, ContactInfo, EducationItem, ExperienceItem, Resume, SkillItem,
};
use crate::parsing::taxonomy;

pub fn create_resume(title: &str) -> ResumeBuilder {
    let now = Utc::now().to_rfc3339();
    ResumeBuilder {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        created_at: now.clone(),
        updated_at: now,
        ..ResumeBuilder::default()
    }
}

/// Converts a parsed resume into an editable builder document.
pub fn create_from_parsed(parsed: &Resume) -> ResumeBuilder {
    let mut builder = create_resume("Imported Resume");

    builder.contact = Some(BuilderContact {
        full_name: parsed.name.clone().unwrap_or_default(),
        email: parsed
            .contact
            .email
            .clone()
            .unwrap_or_else(|| "email@example.com".to_string()),
        phone: parsed.contact.phone.clone(),
        location: parsed.contact.location.clone(),
        linkedin: parsed.contact.linkedin.clone(),
        github: parsed.contact.github.clone(),
        website: parsed.contact.website.clone(),
    });

    builder.summary = parsed
        .summary
        .clone()
        .map(|summary| ProfessionalSummary { summary });

    builder.experience = parsed
        .experience
        .iter()
        .map(|exp| ExperienceEntry {
            company: exp.company.clone().unwrap_or_default(),
            position: exp.job_title.clone().unwrap_or_default(),
            location: exp.location.clone(),
            start_date: exp.start_date.clone().unwrap_or_default(),
            end_date: exp.end_date.clone(),
            current: exp.is_current,
            description: exp.bullets.clone(),
            achievements: Vec::new(),
        })
        .collect();

    builder.education = parsed
        .education
        .iter()
        .map(|edu| EducationEntry {
            institution: edu.institution.clone().unwrap_or_default(),
            degree: edu.degree.clone().unwrap_or_default(),
            field_of_study: edu.field_of_study.clone(),
            location: edu.location.clone(),
            start_date: None,
            end_date: edu.graduation_year.clone(),
            gpa: edu.gpa.as_deref().and_then(|g| g.parse().ok()),
            honors: Vec::new(),
        })
        .collect();

    if !parsed.skills.is_empty() {
        builder.skills = vec![SkillCategory {
            category: "Technical Skills".to_string(),
            skills: parsed.skills.iter().map(|s| s.name.clone()).collect(),
        }];
    }

    builder.certifications = parsed
        .certifications
        .iter()
        .map(|cert| CertificationEntry {
            name: cert.name.clone(),
            issuer: cert.issuer.clone().unwrap_or_default(),
            issue_date: cert.date.clone(),
            ..CertificationEntry::default()
        })
        .collect();

    builder.languages = parsed
        .languages
        .iter()
        .map(|language| LanguageEntry {
            language: language.clone(),
            proficiency: None,
        })
        .collect();

    builder
}

/// Applies a partial update; unset fields keep their stored values.
pub fn apply_update(builder: &mut ResumeBuilder, update: ResumeUpdate) {
    if let Some(title) = update.title {
        builder.title = title;
    }
    if let Some(contact) = update.contact {
        builder.contact = Some(contact);
    }
    if let Some(summary) = update.summary {
        builder.summary = Some(summary);
    }
    if let Some(experience) = update.experience {
        builder.experience = experience;
    }
    if let Some(education) = update.education {
        builder.education = education;
    }
    if let Some(skills) = update.skills {
        builder.skills = skills;
    }
    if let Some(certifications) = update.certifications {
        builder.certifications = certifications;
    }
    if let Some(projects) = update.projects {
        builder.projects = projects;
    }
    if let Some(achievements) = update.achievements {
        builder.achievements = achievements;
    }
    if let Some(languages) = update.languages {
        builder.languages = languages;
    }
    if let Some(custom_sections) = update.custom_sections {
        builder.custom_sections = custom_sections;
    }
    touch(builder);
}

/// Appends an entry to a list-based section; the payload must match the
/// section's entry model.
pub fn add_section_entry(
    builder: &mut ResumeBuilder,
    section: BuilderSection,
    entry: Value,
) -> Result<(), AppError> {
    match section {
        BuilderSection::Experience => builder.experience.push(parse_entry(entry)?),
        BuilderSection::Education => builder.education.push(parse_entry(entry)?),
        BuilderSection::Skills => builder.skills.push(parse_entry(entry)?),
        BuilderSection::Certifications => builder.certifications.push(parse_entry(entry)?),
        BuilderSection::Projects => builder.projects.push(parse_entry(entry)?),
        BuilderSection::Achievements => builder.achievements.push(parse_entry(entry)?),
        BuilderSection::Languages => builder.languages.push(parse_entry(entry)?),
        BuilderSection::Contact | BuilderSection::Summary => {
            return Err(AppError::Validation(
                "Section does not accept list entries".to_string(),
            ))
        }
    }
    touch(builder);
    Ok(())
}

fn parse_entry<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value)
        .map_err(|e| AppError::Validation(format!("Invalid section entry: {e}")))
}

/// Removes a list-section entry by index.
pub fn remove_section_entry(
    builder: &mut ResumeBuilder,
    section: BuilderSection,
    index: usize,
) -> Result<(), AppError> {
    let removed = match section {
        BuilderSection::Experience => remove_at(&mut builder.experience, index),
        BuilderSection::Education => remove_at(&mut builder.education, index),
        BuilderSection::Skills => remove_at(&mut builder.skills, index),
        BuilderSection::Certifications => remove_at(&mut builder.certifications, index),
        BuilderSection::Projects => remove_at(&mut builder.projects, index),
        BuilderSection::Achievements => remove_at(&mut builder.achievements, index),
        BuilderSection::Languages => remove_at(&mut builder.languages, index),
        BuilderSection::Contact | BuilderSection::Summary => {
            return Err(AppError::Validation(
                "Section does not accept list entries".to_string(),
            ))
        }
    };
    if !removed {
        return Err(AppError::NotFound(format!(
            "No entry at index {index} in section"
        )));
    }
    touch(builder);
    Ok(())
}

fn remove_at<T>(list: &mut Vec<T>, index: usize) -> bool {
    if index < list.len() {
        list.remove(index);
        true
    } else {
        false
    }
}

fn touch(builder: &mut ResumeBuilder) {
    builder.updated_at = Utc::now().to_rfc3339();
}

/// Renders the builder document as plain text, section by section.
pub fn export_to_text(builder: &ResumeBuilder) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(contact) = &builder.contact {
        lines.push(contact.full_name.to_uppercase());
        let mut contact_line = vec![contact.email.clone()];
        if let Some(phone) = &contact.phone {
            contact_line.push(phone.clone());
        }
        if let Some(location) = &contact.location {
            contact_line.push(location.clone());
        }
        lines.push(contact_line.join(" | "));
        if let Some(linkedin) = &contact.linkedin {
            lines.push(format!("LinkedIn: {linkedin}"));
        }
        if let Some(github) = &contact.github {
            lines.push(format!("GitHub: {github}"));
        }
        lines.push(String::new());
    }

    if let Some(summary) = &builder.summary {
        lines.push("PROFESSIONAL SUMMARY".to_string());
        lines.push(summary.summary.clone());
        lines.push(String::new());
    }

    if !builder.experience.is_empty() {
        lines.push("EXPERIENCE".to_string());
        for exp in &builder.experience {
            lines.push(format!("{} at {}", exp.position, exp.company));
            let end = exp.end_date.as_deref().unwrap_or("Present");
            lines.push(format!("{} - {}", exp.start_date, end));
            for item in exp.description.iter().chain(exp.achievements.iter()) {
                lines.push(format!("\u{2022} {item}"));
            }
            lines.push(String::new());
        }
    }

    if !builder.education.is_empty() {
        lines.push("EDUCATION".to_string());
        for edu in &builder.education {
            lines.push(format!("{}, {}", edu.degree, edu.institution));
            if let Some(end) = &edu.end_date {
                lines.push(end.clone());
            }
            lines.push(String::new());
        }
    }

    if !builder.skills.is_empty() {
        lines.push("SKILLS".to_string());
        for category in &builder.skills {
            lines.push(format!(
                "{}: {}",
                category.category,
                category.skills.join(", ")
            ));
        }
        lines.push(String::new());
    }

    if !builder.certifications.is_empty() {
        lines.push("CERTIFICATIONS".to_string());
        for cert in &builder.certifications {
            lines.push(format!("\u{2022} {} - {}", cert.name, cert.issuer));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Read-only `Resume` view of a builder document, for scoring/analysis.
pub fn to_resume(builder: &ResumeBuilder) -> Resume {
    let contact = builder
        .contact
        .as_ref()
        .map(|c| ContactInfo {
            email: (!c.email.is_empty()).then(|| c.email.clone()),
            phone: c.phone.clone(),
            linkedin: c.linkedin.clone(),
            github: c.github.clone(),
            website: c.website.clone(),
            location: c.location.clone(),
        })
        .unwrap_or_default();

    let skills = builder
        .skills
        .iter()
        .flat_map(|category| {
            category.skills.iter().map(|name| {
                let normalized = name.to_lowercase();
                let taxonomy_category = taxonomy::category_for(&normalized).map(ToOwned::to_owned);
                SkillItem {
                    name: name.clone(),
                    category: taxonomy_category.or_else(|| Some(category.category.clone())),
                    normalized_name: normalized,
                }
            })
        })
        .collect();

    Resume {
        name: builder
            .contact
            .as_ref()
            .map(|c| c.full_name.clone())
            .filter(|n| !n.is_empty()),
        contact,
        summary: builder.summary.as_ref().map(|s| s.summary.clone()),
        experience: builder
            .experience
            .iter()
            .map(|exp| ExperienceItem {
                job_title: Some(exp.position.clone()),
                company: Some(exp.company.clone()),
                location: exp.location.clone(),
                start_date: Some(exp.start_date.clone()),
                end_date: exp.end_date.clone(),
                is_current: exp.current,
                bullets: exp
                    .description
                    .iter()
                    .chain(exp.achievements.iter())
                    .cloned()
                    .collect(),
                raw_text: exp.description.join("\n"),
            })
            .collect(),
        education: builder
            .education
            .iter()
            .map(|edu| EducationItem {
                degree: Some(edu.degree.clone()),
                field_of_study: edu.field_of_study.clone(),
                institution: Some(edu.institution.clone()),
                location: edu.location.clone(),
                graduation_year: edu.end_date.clone(),
                gpa: edu.gpa.map(|g| g.to_string()),
                honors: None,
                raw_text: String::new(),
            })
            .collect(),
        skills,
        projects: Vec::new(),
        certifications: builder
            .certifications
            .iter()
            .map(|cert| CertificationItem {
                name: cert.name.clone(),
                issuer: (!cert.issuer.is_empty()).then(|| cert.issuer.clone()),
                date: cert.issue_date.clone(),
                raw_text: String::new(),
            })
            .collect(),
        languages: builder.languages.iter().map(|l| l.language.clone()).collect(),
        raw_text: export_to_text(builder),
    }
}
