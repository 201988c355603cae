//! Metadata scanner - `<meta>` tags whose name/property mentions contact
//! or email.

use scraper::{Html, Selector};
use tracing::warn;

use crate::patterns::META_SELECTORS;
use crate::types::candidate::{CandidateSource, EmailCandidate};

use super::text::extract_from_text;

/// Scan `<meta>` tags and run each `content` attribute through the text
/// pattern matcher. Every surviving candidate is re-tagged `metadata` at
/// the fixed priority 7, overriding whatever the matcher computed.
pub fn extract_from_metadata(html: &str) -> Vec<EmailCandidate> {
    let doc = Html::parse_document(html);
    let mut candidates = Vec::new();

    for raw_selector in META_SELECTORS {
        let selector = match Selector::parse(raw_selector) {
            Ok(selector) => selector,
            Err(e) => {
                warn!(selector = raw_selector, error = ?e, "skipping unparsable meta selector");
                continue;
            }
        };

        for meta in doc.select(&selector) {
            let content = meta.value().attr("content").unwrap_or_default();
            for mut cand in extract_from_text(content) {
                cand.source = CandidateSource::Metadata;
                cand.priority = 7;
                candidates.push(cand);
            }
        }
    }

    candidates
}
