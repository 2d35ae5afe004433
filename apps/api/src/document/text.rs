//! Text cleanup helpers shared by the readers and the field extractor.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static BULLET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\u{2022}\u{00b7}\u{2219}\u{25e6}\u{25aa}\u{25ab}\u{2023}\u{2043}\-\*]\s+").unwrap());

/// Normalizes line endings to `\n`, collapses space/tab runs, trims each
/// line, and caps consecutive blank lines at one.
pub fn normalize_whitespace(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = SPACES.replace_all(&text, " ");
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let joined = lines.join("\n");
    BLANK_RUNS.replace_all(&joined, "\n\n").trim().to_string()
}

/// Pulls out lines that start with a bullet glyph (`•`, `-`, `*`, ...),
/// stripped of the marker. Lines without a marker are not bullets.
pub fn extract_bullet_points(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            BULLET_MARKER.find(line).map(|m| line[m.end()..].trim().to_string())
        })
        .filter(|b| !b.is_empty())
        .collect()
}

/// Whether a short block is likely a bare page number ("3", "Page 2", "- 3 -").
pub fn is_page_number(text: &str) -> bool {
    if text.len() > 10 {
        return false;
    }
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    !digits.is_empty() && digits.len() <= 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_spaces_and_blank_runs() {
        let out = normalize_whitespace("a   b\t c\n\n\n\nnext  line\r\nlast");
        assert_eq!(out, "a b c\n\nnext line\nlast");
    }

    #[test]
    fn test_normalize_trims_line_edges() {
        assert_eq!(normalize_whitespace("  hello  \n  world  "), "hello\nworld");
    }

    #[test]
    fn test_extract_bullets_strips_markers() {
        let text = "Role overview\n• Shipped the thing\n- Cut costs by 10%\n* Third point\nplain line";
        let bullets = extract_bullet_points(text);
        assert_eq!(
            bullets,
            vec!["Shipped the thing", "Cut costs by 10%", "Third point"]
        );
    }

    #[test]
    fn test_extract_bullets_requires_space_after_marker() {
        // "-2020" is a date artifact, not a bullet
        assert!(extract_bullet_points("-2020").is_empty());
    }

    #[test]
    fn test_extract_bullets_empty_input() {
        assert!(extract_bullet_points("").is_empty());
    }

    #[test]
    fn test_page_number_detection() {
        assert!(is_page_number("3"));
        assert!(is_page_number("Page 2"));
        assert!(is_page_number("- 3 -"));
        assert!(!is_page_number("Chapter 3: Introduction"));
        assert!(!is_page_number("Experience"));
    }
}
