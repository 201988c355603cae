//! Process-wide constant tables: regex families, selectors, keyword lists.
//!
//! These are immutable configuration, not mutable state. Everything the
//! scanners and the validity predicate consult lives here so the behavior
//! is identical no matter which strategy invokes it.

use fancy_regex::Regex as FancyRegex;
use once_cell::sync::Lazy;
use regex::Regex;

/// The three email pattern families, in match order.
///
/// The index into this slice becomes the `text_pattern_<n>` source tag:
/// 0 = standard, 1 = bracket-obfuscated, 2 = word-obfuscated.
pub static EMAIL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Standard local@domain.tld
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("standard email pattern"),
        // Loose punctuation tolerating (at)/(dot) bracket forms
        Regex::new(r"\b[A-Za-z0-9._%+-]+\s*[@(at)]\s*[A-Za-z0-9.-]+\s*[.(dot)]\s*[A-Za-z]{2,}\b")
            .expect("bracket-obfuscated email pattern"),
        // Fully obfuscated word form: "name at domain dot tld"
        Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+\s+at\s+[A-Za-z0-9.-]+\s+dot\s+[A-Za-z]{2,}\b")
            .expect("word-obfuscated email pattern"),
    ]
});

/// Anchored shape check applied to every cleaned and normalized candidate.
pub static VALID_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("validity pattern")
});

/// Deny rules for implausible or placeholder addresses.
///
/// Any single match rejects the candidate. `fancy-regex` is used because
/// the repeated-character rule needs a backreference.
pub static DENY_PATTERNS: Lazy<Vec<FancyRegex>> = Lazy::new(|| {
    [
        // Placeholder vocabulary as a whole label; hyphenated domains
        // like example-co.io are legitimate and must pass
        r"(?i)(?:^|[@.])example(?:[@.]|$)",
        r"(?i)(?:^|[@.])test(?:[@.]|$)",
        r"(?i)(?:^|[@.])dummy(?:[@.]|$)",
        r"(?i)(?:^|[@.])sample(?:[@.]|$)",
        r"(?i)(?:^|[@.])placeholder(?:[@.]|$)",
        r"(?i)(?:^|[@.])noreply(?:[@.]|$)",
        r"(?i)(?:^|[@.])donotreply(?:[@.]|$)",
        // Boilerplate local parts on a literal "domain." host
        r"(?i)^user@domain\.",
        r"(?i)^email@domain\.",
        r"(?i)^contact@domain\.",
        r"(?i)^admin@domain\.",
        r"(?i)^info@domain\.",
        r"(?i)^support@domain\.",
        r"(?i)^name@domain\.",
        r"(?i)^example@",
        r"(?i)^test@",
        r"(?i)^placeholder@",
        r"(?i)^sample@",
        r"(?i)@domain\.",
        r"(?i)@example\.",
        r"(?i)@test\.",
        // Gibberish shapes
        r"(.)\1{3,}",
        r"[a-z]{20,}",
        r"[0-9]{10,}",
        r"(?i)phone|mobile|tel|call",
        r"(?i)address|location|street",
        // Suspicious combinations
        r"(?i)gmail.*yahoo|yahoo.*gmail",
        r"(?i)com.*org.*net",
        r"(?i)possible\.|\.possible",
        r"(?i)email.*email",
        // Overlong unbroken segments
        r"[a-z]{15,}@",
        r"@[a-z]{20,}\.",
    ]
    .iter()
    .map(|p| FancyRegex::new(p).expect("deny pattern"))
    .collect()
});

/// Keywords that mark contact-bearing context, used for priority boosts
/// and for the DOM selector 8-vs-5 tier split.
pub static SUPPORT_KEYWORDS: &[&str] = &[
    "support",
    "help",
    "contact",
    "reach out",
    "technical",
    "developer",
    "engineering",
    "admin",
    "info",
    "service",
    "assistance",
    "bug",
    "issue",
];

/// Terms in the address itself that earn the +3 priority bonus.
pub static SCORING_TERMS: &[&str] = &["support", "help", "contact", "reach out", "info"];

/// Selectors known to correlate with contact information.
///
/// A selector that fails to parse is skipped with a warning, not fatal.
pub static EMAIL_SELECTORS: &[&str] = &[
    r#"a[href^="mailto:"]"#,
    r#"[class*="contact"]"#,
    r#"[id*="contact"]"#,
    r#"[class*="support"]"#,
    r#"[id*="support"]"#,
    r#"[class*="email"]"#,
    r#"[id*="email"]"#,
    "footer",
    ".footer",
    ".contact-info",
    ".contact-details",
    ".support-info",
    ".help-section",
];

/// `<meta>` tags worth scanning. Attribute matching is a case-sensitive
/// substring test, which CSS attribute selectors give us for free.
pub static META_SELECTORS: &[&str] = &[
    r#"meta[name*="contact"]"#,
    r#"meta[name*="email"]"#,
    r#"meta[property*="contact"]"#,
    r#"meta[property*="email"]"#,
];

/// Words that disqualify an address outright when present anywhere in it.
pub static SUSPICIOUS_WORDS: &[&str] = &[
    "phone", "mobile", "call", "tel", "number", "address", "street", "location", "city",
    "message", "possible", "maybe", "probably",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        assert_eq!(EMAIL_PATTERNS.len(), 3);
        assert!(DENY_PATTERNS.len() >= 25);
        assert!(VALID_EMAIL.is_match("a@b.co"));
    }

    #[test]
    fn standard_pattern_finds_plain_address() {
        let m = EMAIL_PATTERNS[0].find("write to alice@acme.io today");
        assert_eq!(m.map(|m| m.as_str()), Some("alice@acme.io"));
    }

    #[test]
    fn word_pattern_finds_obfuscated_address() {
        let m = EMAIL_PATTERNS[2].find("ping dev at example-co dot io");
        assert_eq!(m.map(|m| m.as_str()), Some("dev at example-co dot io"));
    }

    #[test]
    fn placeholder_rules_are_label_bounded() {
        let hit = |email: &str| {
            DENY_PATTERNS
                .iter()
                .any(|p| p.is_match(email).unwrap_or(false))
        };
        // Whole labels are placeholders
        assert!(hit("example@acme.com"));
        assert!(hit("anyone@example.org"));
        assert!(hit("my.test@acme.com"));
        // Substrings inside a larger label are not
        assert!(!hit("dev@example-co.io"));
        assert!(!hit("latest@acme.com"));
    }

    #[test]
    fn deny_patterns_catch_repeated_runs() {
        let hit = DENY_PATTERNS
            .iter()
            .any(|p| p.is_match("aaaa@real.com").unwrap_or(false));
        assert!(hit);
    }
}
