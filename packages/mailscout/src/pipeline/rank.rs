//! Ranking and deduplication of the merged candidate pool.

use indexmap::IndexMap;

use crate::types::candidate::EmailCandidate;

/// How many candidates survive the final cut.
pub const MAX_RESULTS: usize = 5;

/// Collapse the pool by normalized address, keep the highest-priority
/// instance of each (first-seen wins ties), sort descending, and cap at
/// [`MAX_RESULTS`].
///
/// Entries with an empty address are dropped defensively before grouping.
pub fn deduplicate_candidates(candidates: Vec<EmailCandidate>) -> Vec<EmailCandidate> {
    let mut best: IndexMap<String, EmailCandidate> = IndexMap::new();

    for cand in candidates {
        if cand.email.is_empty() {
            continue;
        }

        let key = cand.email.to_lowercase();
        match best.get_mut(&key) {
            Some(existing) => {
                if cand.priority > existing.priority {
                    *existing = cand;
                }
            }
            None => {
                best.insert(key, cand);
            }
        }
    }

    let mut ranked: Vec<EmailCandidate> = best.into_values().collect();
    // Stable sort keeps first-seen order within equal priorities
    ranked.sort_by(|a, b| b.priority.cmp(&a.priority));
    ranked.truncate(MAX_RESULTS);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::candidate::CandidateSource;

    fn cand(email: &str, priority: i32) -> EmailCandidate {
        EmailCandidate::new(email, CandidateSource::TextPattern(0), priority)
    }

    #[test]
    fn keeps_highest_priority_instance() {
        let out = deduplicate_candidates(vec![
            EmailCandidate::new("alice@foo.com", CandidateSource::TextPattern(0), 1),
            EmailCandidate::new("alice@foo.com", CandidateSource::Metadata, 7),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].priority, 7);
        assert_eq!(out[0].source, CandidateSource::Metadata);
    }

    #[test]
    fn ties_keep_first_seen() {
        let first = cand("a@b.com", 5).with_context("first");
        let second = cand("a@b.com", 5).with_context("second");
        let out = deduplicate_candidates(vec![first, second]);
        assert_eq!(out[0].context, "first");
    }

    #[test]
    fn sorts_descending_and_caps_at_five() {
        let pool: Vec<_> = (0..8).map(|i| cand(&format!("u{i}@x.com"), i)).collect();
        let out = deduplicate_candidates(pool);
        assert_eq!(out.len(), MAX_RESULTS);
        assert!(out.windows(2).all(|w| w[0].priority >= w[1].priority));
        assert_eq!(out[0].priority, 7);
    }

    #[test]
    fn empty_addresses_are_dropped() {
        let out = deduplicate_candidates(vec![cand("", 9), cand("a@b.com", 1)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].email, "a@b.com");
    }

    #[test]
    fn empty_pool_is_fine() {
        assert!(deduplicate_candidates(vec![]).is_empty());
    }

    #[test]
    fn tier_ordering_is_respected_across_sources() {
        let out = deduplicate_candidates(vec![
            cand("weak@x.com", 1),
            EmailCandidate::new("meta@x.com", CandidateSource::Metadata, 7),
            EmailCandidate::new("link@x.com", CandidateSource::MailtoLink, 10),
            EmailCandidate::new("domhit@x.com", CandidateSource::Dom("footer".into()), 8),
        ]);
        let emails: Vec<_> = out.iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails, vec!["link@x.com", "domhit@x.com", "meta@x.com", "weak@x.com"]);
    }
}
