//! DOM scanner - mailto anchors and contact-bearing containers.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::patterns::{EMAIL_SELECTORS, SUPPORT_KEYWORDS};
use crate::types::candidate::{CandidateSource, EmailCandidate};

use super::text::extract_from_text;

static MAILTO: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[href^="mailto:"]"#).expect("mailto selector"));

/// Scan an HTML document for email candidates.
///
/// `mailto:` anchors come first at the fixed top tier (priority 10) —
/// an explicit link is the strongest possible signal and bypasses the
/// text heuristics (still lower-cased). The contact selector sweep then
/// feeds each container's text through the pattern matcher at priority
/// 8 (support keyword present) or 5.
pub fn extract_from_dom(html: &str) -> Vec<EmailCandidate> {
    let doc = Html::parse_document(html);
    let mut candidates = Vec::new();

    for link in doc.select(&MAILTO) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let address = href.trim_start_matches("mailto:");
        let address = address.split('?').next().unwrap_or(address);
        if address.is_empty() {
            continue;
        }

        candidates.push(
            EmailCandidate::new(address.to_lowercase(), CandidateSource::MailtoLink, 10)
                .with_context(mailto_context(link))
                .with_element(link.html()),
        );
    }

    for raw_selector in EMAIL_SELECTORS {
        let selector = match Selector::parse(raw_selector) {
            Ok(selector) => selector,
            Err(e) => {
                warn!(selector = raw_selector, error = ?e, "skipping unparsable selector");
                continue;
            }
        };

        for element in doc.select(&selector) {
            let text: String = element.text().collect();
            let text_lower = text.to_lowercase();
            let keyword_hit = SUPPORT_KEYWORDS.iter().any(|k| text_lower.contains(k));

            for mut cand in extract_from_text(&text) {
                cand.source = CandidateSource::Dom((*raw_selector).to_string());
                cand.priority = if keyword_hit { 8 } else { 5 };
                cand.element = Some(truncate_chars(&element.html(), 200));
                candidates.push(cand);
            }
        }
    }

    candidates
}

/// Context for a mailto link: its own text, else the first 100 chars of
/// the nearest enclosing block-level ancestor's text.
fn mailto_context(link: ElementRef<'_>) -> String {
    let own: String = link.text().collect::<String>().trim().to_string();
    if !own.is_empty() {
        return own;
    }

    for ancestor in link.ancestors() {
        let Some(element) = ElementRef::wrap(ancestor) else {
            continue;
        };
        let name = element.value().name();
        if name == "p" || name == "div" || name == "section" {
            let text: String = element.text().collect();
            return truncate_chars(text.trim(), 100);
        }
    }

    String::new()
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
