//! Static skill -> category taxonomy, loaded once and treated as a read-only
//! lookup table. Lookup is exact on the lowercased skill name; anything not
//! in the table stays uncategorized.

use std::collections::HashMap;

use once_cell::sync::Lazy;

const SKILL_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "programming_languages",
        &[
            "python", "java", "javascript", "typescript", "rust", "go", "c", "c++", "c#",
            "ruby", "php", "swift", "kotlin", "scala", "r", "matlab", "perl", "sql", "bash",
        ],
    ),
    (
        "web_frameworks",
        &[
            "react", "angular", "vue", "svelte", "django", "flask", "fastapi", "rails",
            "spring", "spring boot", "express", "node", "node.js", "next.js", "laravel",
            "asp.net",
        ],
    ),
    (
        "databases",
        &[
            "postgresql", "postgres", "mysql", "mongodb", "redis", "sqlite", "oracle",
            "sql server", "elasticsearch", "cassandra", "dynamodb", "neo4j",
        ],
    ),
    (
        "cloud_devops",
        &[
            "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "terraform",
            "ansible", "jenkins", "ci/cd", "devops", "linux", "nginx", "serverless",
            "cloudformation", "helm",
        ],
    ),
    (
        "data_ml",
        &[
            "machine learning", "deep learning", "data science", "data analysis", "pandas",
            "numpy", "scikit-learn", "tensorflow", "pytorch", "nlp", "computer vision",
            "statistics", "tableau", "power bi", "spark", "hadoop", "etl",
        ],
    ),
    (
        "tools",
        &[
            "git", "github", "gitlab", "jira", "confluence", "excel", "vs code", "intellij",
            "postman", "figma", "salesforce", "sap", "quickbooks", "bloomberg",
        ],
    ),
    (
        "testing",
        &[
            "unit testing", "integration testing", "pytest", "jest", "selenium", "cypress",
            "junit", "tdd", "qa", "quality assurance",
        ],
    ),
    (
        "project_management",
        &[
            "agile", "scrum", "kanban", "project management", "product management",
            "stakeholder management", "roadmapping", "risk management", "budgeting",
        ],
    ),
    (
        "soft_skills",
        &[
            "leadership", "communication", "teamwork", "problem solving", "mentoring",
            "collaboration", "time management", "public speaking", "negotiation",
            "critical thinking", "adaptability",
        ],
    ),
    (
        "design",
        &[
            "ui design", "ux design", "ui/ux", "graphic design", "photoshop", "illustrator",
            "wireframing", "prototyping", "adobe xd", "sketch",
        ],
    ),
];

static SKILL_TO_CATEGORY: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (category, skills) in SKILL_TAXONOMY {
        for skill in *skills {
            map.insert(*skill, *category);
        }
    }
    map
});

/// Category for a skill name, by exact lowercased lookup.
pub fn category_for(skill: &str) -> Option<&'static str> {
    SKILL_TO_CATEGORY.get(skill.to_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_skill_is_categorized() {
        assert_eq!(category_for("Python"), Some("programming_languages"));
        assert_eq!(category_for("kubernetes"), Some("cloud_devops"));
        assert_eq!(category_for("Leadership"), Some("soft_skills"));
    }

    #[test]
    fn test_unknown_skill_is_uncategorized() {
        assert_eq!(category_for("underwater basket weaving"), None);
    }

    #[test]
    fn test_lookup_is_exact_not_substring() {
        // "python 3" is not an entry; only the exact name matches
        assert_eq!(category_for("python 3"), None);
    }

    #[test]
    fn test_taxonomy_has_no_duplicate_skills() {
        let total: usize = SKILL_TAXONOMY.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(total, SKILL_TO_CATEGORY.len());
    }
}
