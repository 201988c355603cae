//! Cleaning, normalization, and the plausibility predicate.
//!
//! Every scraped match flows through `clean_extracted_email` →
//! `normalize_email` → `is_valid_email` before it can become a candidate.
//! Rejection is silent filtering, not an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::patterns::{
    DENY_PATTERNS, SCORING_TERMS, SUPPORT_KEYWORDS, SUSPICIOUS_WORDS, VALID_EMAIL,
};

static LEADING_JUNK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^A-Za-z0-9]*").expect("leading junk pattern"));
static TRAILING_JUNK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9.@_+-]*$").expect("trailing junk pattern"));
static LABEL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:email|contact|mailto):?").expect("label prefix pattern"));
static WORD_AT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+at\s+").expect("word-at pattern"));
static WORD_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+dot\s+").expect("word-dot pattern"));

/// Strip the junk that rides along with a raw regex match: leading and
/// trailing punctuation, "email:"/"contact:"/"mailto:" labels. When the
/// remainder still holds whitespace, keep the first token that looks
/// addressish (contains both `@` and `.`).
pub fn clean_extracted_email(raw: &str) -> String {
    let cleaned = LEADING_JUNK.replace(raw, "");
    let cleaned = TRAILING_JUNK.replace(&cleaned, "");
    let cleaned = LABEL_PREFIX.replace_all(&cleaned, "");
    let cleaned = cleaned.trim();

    if cleaned.contains(char::is_whitespace) {
        for part in cleaned.split_whitespace() {
            if part.contains('@') && part.contains('.') {
                return part.to_lowercase();
            }
        }
    }

    cleaned.to_lowercase()
}

/// Collapse word-form separators (" at " → `@`, " dot " → `.`), drop
/// remaining whitespace and parentheses, lower-case.
///
/// Idempotent: once the whitespace is gone the word forms can no longer
/// match, so a second pass is a no-op.
pub fn normalize_email(email: &str) -> String {
    let replaced = WORD_AT.replace_all(email, "@");
    let replaced = WORD_DOT.replace_all(&replaced, ".");
    replaced
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
        .collect::<String>()
        .to_lowercase()
}

/// The plausibility predicate. Pure function of its input; all checks
/// must pass.
pub fn is_valid_email(email: &str) -> bool {
    if !VALID_EMAIL.is_match(email) {
        return false;
    }

    if email.len() < 5 || email.len() > 320 {
        return false;
    }

    if DENY_PATTERNS
        .iter()
        .any(|p| p.is_match(email).unwrap_or(false))
    {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    if domain.len() < 3 || domain.len() > 253 {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return false;
    }

    // Last label is the TLD
    let tld = labels[labels.len() - 1];
    if tld.len() < 2 || tld.len() > 6 {
        return false;
    }

    let lower = email.to_lowercase();
    if SUSPICIOUS_WORDS.iter().any(|w| lower.contains(w)) {
        return false;
    }

    true
}

/// Locate `needle` in `text` (case-insensitive) and return ±50 characters
/// around it, trimmed to the text bounds.
///
/// The match runs on the original string, not a lowercased copy, so the
/// window stays put for scripts where lowercasing changes byte length.
pub fn email_context(text: &str, needle: &str) -> String {
    let Ok(pattern) = Regex::new(&format!("(?i){}", regex::escape(needle))) else {
        return String::new();
    };
    let Some(m) = pattern.find(text) else {
        return String::new();
    };

    // The ±50 offsets can still land mid-character; clamp to boundaries.
    let start = floor_boundary(text, m.start().saturating_sub(50));
    let end = ceil_boundary(text, m.end() + 50);
    text[start..end].trim().to_string()
}

/// Base 1, +5 when the surrounding context mentions a support keyword,
/// +3 when the address itself carries a scoring term. Max 9.
pub fn calculate_priority(context: &str, email: &str) -> i32 {
    let mut priority = 1;

    let context_lower = context.to_lowercase();
    if SUPPORT_KEYWORDS.iter().any(|k| context_lower.contains(k)) {
        priority += 5;
    }

    if SCORING_TERMS.iter().any(|t| email.contains(t)) {
        priority += 3;
    }

    priority
}

fn floor_boundary(text: &str, mut i: usize) -> usize {
    if i > text.len() {
        return text.len();
    }
    while i > 0 && !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_boundary(text: &str, mut i: usize) -> usize {
    if i >= text.len() {
        return text.len();
    }
    while i < text.len() && !text.is_char_boundary(i) {
        i += 1;
    }
    i
}
