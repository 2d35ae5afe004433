//! Industry keyword tables used for targeted scoring bonuses. Static,
//! read-only data in the same spirit as the section heading dictionary.

pub struct IndustryProfile {
    pub key: &'static str,
    pub technical_skills: &'static [&'static str],
    pub certifications: &'static [&'static str],
    pub action_verbs: &'static [&'static str],
}

pub const INDUSTRY_PROFILES: &[IndustryProfile] = &[
    IndustryProfile {
        key: "engineering",
        technical_skills: &[
            "cad", "solidworks", "autocad", "matlab", "finite element", "fea", "design",
            "prototype", "testing", "quality assurance", "iso", "lean manufacturing",
            "six sigma", "process improvement", "r&d", "mechanical", "electrical", "civil",
            "chemical", "industrial",
        ],
        certifications: &[
            "pe", "professional engineer", "eit", "pmp", "six sigma", "leed",
            "autocad certification", "solidworks certification",
        ],
        action_verbs: &[
            "designed", "engineered", "optimized", "analyzed", "tested", "prototyped",
            "developed", "improved", "automated",
        ],
    },
    IndustryProfile {
        key: "it-software",
        technical_skills: &[
            "python", "java", "javascript", "react", "node", "angular", "vue", "sql",
            "mongodb", "postgresql", "aws", "azure", "gcp", "docker", "kubernetes", "ci/cd",
            "git", "agile", "scrum", "devops", "machine learning", "ai", "data science",
            "api", "microservices",
        ],
        certifications: &[
            "aws certified", "azure certified", "gcp certified", "cissp", "comptia",
            "certified scrum", "pmp", "ckad", "cka",
        ],
        action_verbs: &[
            "developed", "built", "deployed", "architected", "implemented", "optimized",
            "automated", "integrated", "migrated", "scaled",
        ],
    },
    IndustryProfile {
        key: "finance",
        technical_skills: &[
            "financial modeling", "excel", "bloomberg", "financial analysis", "budgeting",
            "forecasting", "valuation", "risk management", "portfolio management", "gaap",
            "ifrs", "sox", "compliance", "audit", "tax", "accounting", "quickbooks", "sap",
            "oracle",
        ],
        certifications: &[
            "cpa", "cfa", "frm", "cma", "cia", "cfp", "series 7", "series 63", "series 65",
            "prm",
        ],
        action_verbs: &[
            "analyzed", "forecasted", "budgeted", "audited", "reconciled", "managed",
            "optimized", "evaluated", "assessed", "reported",
        ],
    },
    IndustryProfile {
        key: "healthcare",
        technical_skills: &[
            "patient care", "clinical", "diagnosis", "treatment", "emr", "ehr", "epic",
            "cerner", "meditech", "hipaa", "medical coding", "icd-10", "cpt", "nursing",
            "pharmacy", "laboratory", "radiology", "case management", "quality improvement",
            "infection control",
        ],
        certifications: &[
            "rn", "lpn", "md", "do", "np", "pa", "cna", "cma", "rrt", "bls", "acls", "pals",
            "ccrn", "cnor", "rnfa", "cnp",
        ],
        action_verbs: &[
            "treated", "diagnosed", "assessed", "administered", "monitored", "coordinated",
            "educated", "documented", "evaluated", "managed",
        ],
    },
];

pub fn industry_profile(key: &str) -> Option<&'static IndustryProfile> {
    INDUSTRY_PROFILES.iter().find(|p| p.key == key)
}

/// "it-software" -> "It/Software", for user-facing comments.
pub fn display_name(key: &str) -> String {
    key.replace('-', "/")
        .split('/')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
