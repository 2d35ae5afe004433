//! Regex matchers for resume entities. Each matcher tries a fixed-priority
//! pattern list and returns the first valid hit; on no match it returns
//! `None` and the caller degrades gracefully.

use once_cell::sync::Lazy;
use regex::Regex;

// ────────────────────────────────────────────────────────────────────────────
// Email
// ────────────────────────────────────────────────────────────────────────────

static EMAIL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})\b",
        r"(?i)e-?mail\s*:?\s*([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

pub fn extract_email(text: &str) -> Option<String> {
    for pattern in EMAIL_PATTERNS.iter() {
        for cap in pattern.captures_iter(text) {
            let email = cap[1].trim();
            if is_valid_email(email) {
                return Some(email.to_lowercase());
            }
        }
    }
    None
}

fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > 254 || email.contains(' ') {
        return false;
    }
    if email.chars().filter(|c| *c == '@').count() != 1 {
        return false;
    }
    // domain must carry at least one dot
    email.split('@').nth(1).is_some_and(|d| d.contains('.'))
}

// ────────────────────────────────────────────────────────────────────────────
// Phone
// ────────────────────────────────────────────────────────────────────────────

static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // US formats
        r"(\+?1?\s*\(?\d{3}\)?[\s.\-]?\d{3}[\s.\-]?\d{4})",
        r"\b(\d{3}[-.\s]?\d{3}[-.\s]?\d{4})\b",
        r"(\(\d{3}\)\s*\d{3}[-.\s]?\d{4})",
        // International
        r"(\+\d{1,3}\s?\(?\d{1,4}\)?[\s.\-]?\d{1,4}[\s.\-]?\d{1,9})",
        // Labeled
        r"(?i)(?:phone|tel|mobile|cell)\s*:?\s*([\d\s()\-+.]{10,})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Known heuristic limitation, kept deliberately: any 9-15 digit run that one
/// of the patterns shapes into a phone-like string is accepted, so unrelated
/// numeric sequences can be reported as phone numbers.
pub fn extract_phone(text: &str) -> Option<String> {
    for pattern in PHONE_PATTERNS.iter() {
        for cap in pattern.captures_iter(text) {
            let phone = normalize_phone(&cap[1]);
            if is_valid_phone(&phone) {
                return Some(phone);
            }
        }
    }
    None
}

fn normalize_phone(phone: &str) -> String {
    let kept: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+' || *c == ' ')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (9..=15).contains(&digits)
}

// ────────────────────────────────────────────────────────────────────────────
// Profile URLs
// ────────────────────────────────────────────────────────────────────────────

static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/([A-Za-z0-9\-]+)").unwrap());

static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/([A-Za-z0-9\-]+)").unwrap());

static WEBSITE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)[\w.\-]+\.[a-z]{2,}(?:/\S*)?|\b[\w\-]+\.(?:com|io|dev|me|co)\b(?:/\S*)?")
        .unwrap()
});

pub fn extract_linkedin(text: &str) -> Option<String> {
    LINKEDIN
        .captures(text)
        .map(|c| format!("linkedin.com/in/{}", &c[1]))
}

pub fn extract_github(text: &str) -> Option<String> {
    GITHUB.captures(text).map(|c| format!("github.com/{}", &c[1]))
}

/// First generic URL that is not a LinkedIn/GitHub profile or an email.
pub fn extract_website(text: &str) -> Option<String> {
    for m in WEBSITE.find_iter(text) {
        let url = m.as_str();
        let lower = url.to_lowercase();
        if lower.contains("linkedin") || lower.contains("github") || url.contains('@') {
            continue;
        }
        // domain fragment of an email address, not a standalone URL
        if text[..m.start()].ends_with(['@', '.']) {
            continue;
        }
        return Some(url.to_string());
    }
    None
}

// ────────────────────────────────────────────────────────────────────────────
// Location
// ────────────────────────────────────────────────────────────────────────────

const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

static CITY_STATE_ABBR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*),\s*([A-Z]{2})\b").unwrap());

static CITY_STATE_FULL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*),\s*([A-Z][a-z]+)").unwrap());

static REMOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(Remote)\b").unwrap());

pub fn extract_location(text: &str) -> Option<String> {
    if let Some(c) = CITY_STATE_ABBR.captures(text) {
        let (city, state) = (&c[1], c[2].to_uppercase());
        if US_STATES.contains(&state.as_str()) {
            return Some(format!("{city}, {state}"));
        }
        return Some(format!("{city}, {}", &c[2]));
    }
    if let Some(c) = CITY_STATE_FULL.captures(text) {
        return Some(format!("{}, {}", &c[1], &c[2]));
    }
    REMOTE.captures(text).map(|c| c[1].to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Candidate name
// ────────────────────────────────────────────────────────────────────────────

const TITLE_PREFIXES: &[&str] = &["mr", "mrs", "ms", "miss", "dr", "prof", "professor"];
const NAME_SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv", "phd", "md", "esq"];
const CONTACT_MARKERS: &[&str] = &["email", "@", "phone", "linkedin", "github", "http"];

/// Scans the first lines of the document for a prominently placed name:
/// 2-4 title-cased words, mostly alphabetic, not a contact line.
pub fn extract_name(text: &str, max_lines: usize) -> Option<String> {
    for line in text.lines().take(max_lines) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();
        if CONTACT_MARKERS.iter().any(|m| lower.contains(m)) {
            continue;
        }
        if line.split_whitespace().count() > 5 {
            continue;
        }
        if looks_like_name(line) {
            return Some(clean_name(line));
        }
    }
    None
}

fn looks_like_name(text: &str) -> bool {
    let words: Vec<&str> = text.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return false;
    }
    if !words
        .iter()
        .all(|w| w.chars().next().is_some_and(char::is_uppercase))
    {
        return false;
    }
    let total = text.chars().count();
    let alpha = text
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .count();
    total > 0 && alpha as f64 / total as f64 >= 0.8
}

fn clean_name(name: &str) -> String {
    let mut words: Vec<&str> = name.split_whitespace().collect();
    if let Some(first) = words.first() {
        let lowered = first.to_lowercase();
        if TITLE_PREFIXES.contains(&lowered.trim_end_matches('.')) {
            words.remove(0);
        }
    }
    if let Some(last) = words.last() {
        let lowered = last.to_lowercase();
        if NAME_SUFFIXES.contains(&lowered.trim_end_matches('.')) {
            words.pop();
        }
    }
    words.join(" ")
}

// ────────────────────────────────────────────────────────────────────────────
// Date ranges
// ────────────────────────────────────────────────────────────────────────────

const MONTHS: &[(&str, u32)] = &[
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

static RANGE_MONTH_PRESENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([A-Za-z]+)\s+(\d{4})\s*[-–—to]+\s*(present|current)").unwrap()
});
static RANGE_MONTH_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([A-Za-z]+)\s+(\d{4})\s*[-–—to]+\s*([A-Za-z]+)\s+(\d{4})").unwrap()
});
static RANGE_YEAR_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\s*[-–—to]+\s*(\d{4})").unwrap());
static RANGE_YEAR_PRESENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{4})\s*[-–—to]+\s*(present|current)").unwrap());
static SINGLE_MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([A-Za-z]+)\s+(\d{4})").unwrap());
static SINGLE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})\b").unwrap());

pub fn month_number(word: &str) -> Option<u32> {
    let lower = word.to_lowercase();
    MONTHS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, n)| *n)
}

/// "Jan 2020" -> "2020-01"; unknown month words degrade to the bare year.
fn format_date(month: &str, year: &str) -> String {
    match month_number(month) {
        Some(n) => format!("{year}-{n:02}"),
        None => year.to_string(),
    }
}

/// Parses the first date range in a text block.
///
/// Returns `(start, end)` where `end` is `Some("Present")` for open ranges
/// and `None` for single dates. Dates stay free-form strings ("2020-01",
/// "2020"), never validated calendar dates.
pub fn extract_date_range(text: &str) -> Option<(String, Option<String>)> {
    if let Some(c) = RANGE_MONTH_PRESENT.captures(text) {
        return Some((format_date(&c[1], &c[2]), Some("Present".to_string())));
    }
    if let Some(c) = RANGE_MONTH_MONTH.captures(text) {
        return Some((format_date(&c[1], &c[2]), Some(format_date(&c[3], &c[4]))));
    }
    if let Some(c) = RANGE_YEAR_YEAR.captures(text) {
        return Some((c[1].to_string(), Some(c[2].to_string())));
    }
    if let Some(c) = RANGE_YEAR_PRESENT.captures(text) {
        return Some((c[1].to_string(), Some("Present".to_string())));
    }
    if let Some(c) = SINGLE_MONTH_YEAR.captures(text) {
        return Some((format_date(&c[1], &c[2]), None));
    }
    if let Some(c) = SINGLE_YEAR.captures(text) {
        return Some((c[1].to_string(), None));
    }
    None
}

// ────────────────────────────────────────────────────────────────────────────
// Organizations
// ────────────────────────────────────────────────────────────────────────────

static ORG_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(Inc|LLC|Ltd|Corp|Corporation|Company|Technologies|Solutions|Labs|Systems|Group|Consulting|Partners|GmbH|University|College|Institute|School|Academy)\b\.?",
    )
    .unwrap()
});

static HAS_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

/// Picks the most organization-looking line from a block: a line carrying a
/// company/institution suffix wins; otherwise the second line, if it reads
/// like a short title-cased name without dates.
pub fn extract_organization(lines: &[&str]) -> Option<String> {
    for line in lines {
        if ORG_SUFFIX.is_match(line) {
            return Some(clean_org_line(line));
        }
    }
    lines
        .get(1)
        .filter(|line| looks_like_org(line))
        .map(|line| clean_org_line(line))
}

fn looks_like_org(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() || words.len() > 6 {
        return false;
    }
    if HAS_DIGIT.is_match(line) {
        return false;
    }
    words[0].chars().next().is_some_and(char::is_uppercase)
}

/// Keeps the org-bearing segment of a line ("Acme Corp | Austin, TX" ->
/// "Acme Corp") and drops trailing separators.
fn clean_org_line(line: &str) -> String {
    let segment = line
        .split(['|', '•'])
        .find(|seg| ORG_SUFFIX.is_match(seg))
        .unwrap_or_else(|| line.split(['|', '•']).next().unwrap_or(line));
    segment.trim().trim_matches([',', '-', '–']).trim().to_string()
}
