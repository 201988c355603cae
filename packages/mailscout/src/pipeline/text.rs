//! Text pattern matcher - the three regex families over raw text.

use crate::patterns::EMAIL_PATTERNS;
use crate::types::candidate::{CandidateSource, EmailCandidate};

use super::validate::{
    calculate_priority, clean_extracted_email, email_context, is_valid_email, normalize_email,
};

/// Run all three pattern families over `text` and return every match that
/// survives cleaning, normalization, and validation.
///
/// Families run independently; an address matched by more than one comes
/// back more than once and is collapsed later by dedup, not here.
pub fn extract_from_text(text: &str) -> Vec<EmailCandidate> {
    let mut candidates = Vec::new();

    for (index, pattern) in EMAIL_PATTERNS.iter().enumerate() {
        for m in pattern.find_iter(text) {
            let cleaned = clean_extracted_email(m.as_str());
            let email = normalize_email(&cleaned);

            if !is_valid_email(&email) {
                continue;
            }

            let context = email_context(text, m.as_str());
            let priority = calculate_priority(&context, &email);

            candidates.push(
                EmailCandidate::new(email, CandidateSource::TextPattern(index), priority)
                    .with_context(context)
                    .with_raw(m.as_str()),
            );
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_standard_address_with_keyword_boost() {
        let found = extract_from_text("Questions? Our support team reads dev@acme.io daily.");
        // The bracket family also matches plain addresses; duplicates are
        // collapsed later by dedup, not here.
        assert!(!found.is_empty());
        let cand = &found[0];
        assert_eq!(cand.email, "dev@acme.io");
        assert_eq!(cand.source, CandidateSource::TextPattern(0));
        // +5 for "support" in the context
        assert_eq!(cand.priority, 6);
        assert_eq!(cand.raw.as_deref(), Some("dev@acme.io"));
    }

    #[test]
    fn normalizes_word_obfuscated_address() {
        let found = extract_from_text("Reach our devs at dev at example-co dot io for help");
        let cand = found
            .iter()
            .find(|c| c.source == CandidateSource::TextPattern(2))
            .unwrap();
        assert_eq!(cand.email, "dev@example-co.io");
        // "help" in context earns +5; the address carries no scoring term
        assert_eq!(cand.priority, 6);
    }

    #[test]
    fn deny_rule_drops_placeholder_domain() {
        let found = extract_from_text("mail contact@domain.com for details");
        assert!(found.is_empty());
    }

    #[test]
    fn address_scoring_term_earns_bonus() {
        let found = extract_from_text("x y z support@acme.com q r s");
        assert!(!found.is_empty());
        // context contains the address itself, whose "support" also counts
        // as a keyword hit: 1 + 5 + 3
        assert!(found.iter().all(|c| c.priority == 9));
    }

    #[test]
    fn multiple_families_emit_independent_matches() {
        let found = extract_from_text("a@b.com or a at b dot com");
        let families: Vec<_> = found.iter().map(|c| c.source.clone()).collect();
        assert!(families.contains(&CandidateSource::TextPattern(0)));
        assert!(families.contains(&CandidateSource::TextPattern(2)));
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(extract_from_text("").is_empty());
    }
}
