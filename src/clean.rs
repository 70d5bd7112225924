use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Sentinel values that carry no real content.
pub const PLACEHOLDERS: [&str; 2] = ["インスピレーション", "Oblique"];

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = PLACEHOLDERS.iter().map(|p| regex::escape(p)).collect();
    Regex::new(&format!(r"^(?:{})\s*$", alternatives.join("|"))).unwrap()
});

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-–—・●◆■]\s*").unwrap());

/// Strip CRs and whitespace, then drop the value if nothing but a placeholder remains.
pub fn clean_db_value(raw: &str) -> Option<String> {
    let stripped = raw.replace('\r', "");
    let stripped = stripped.trim();
    if PLACEHOLDERS.contains(&stripped) {
        return None;
    }
    let reduced = PLACEHOLDER_RE.replace(stripped, "");
    let reduced = reduced.trim();
    (!reduced.is_empty()).then(|| reduced.to_string())
}

/// Collapse the whitespace of a deck field: no CRs, single newlines, single spaces.
pub fn normalize_card_text(raw: &str) -> String {
    static NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());
    static BLANKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\t ]+").unwrap());

    let s = raw.replace('\r', "");
    let s = NEWLINES.replace_all(&s, "\n");
    let s = BLANKS.replace_all(&s, " ");
    s.trim().to_string()
}

/// Remove one leading bullet marker from a deck field.
pub fn clean_card_value(raw: &str) -> Option<String> {
    let s = BULLET_RE.replace(raw, "");
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

pub fn clean_all<F>(candidates: &[String], f: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    candidates.iter().filter_map(|c| f(c.as_str())).collect()
}

/// Keep the first occurrence of each value, preserving order.
pub fn dedupe<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut uniq = Vec::new();
    for v in values {
        if seen.insert(v.clone()) {
            uniq.push(v);
        }
    }
    uniq
}
