//! Extraction pipeline - the core of the engine.
//!
//! Four deterministic strategies feed one ranking stage, with a model
//! fallback reached only when they all come up empty:
//! - DOM scan (mailto anchors, contact containers)
//! - Text pattern matching (standard + two obfuscated families)
//! - Metadata scan
//! - Ranking and dedup (top 5)
//! - Model fallback (single prompt, parsed defensively)

pub mod dom;
pub mod fallback;
pub mod metadata;
pub mod prompts;
pub mod rank;
pub mod text;
pub mod validate;

use tracing::{debug, info, warn};

use crate::traits::model::ModelClient;
use crate::types::candidate::EmailCandidate;
use crate::types::page::PageData;

pub use dom::extract_from_dom;
pub use fallback::{candidates_from_reply, parse_model_reply, ModelEmailEntry, ModelReply};
pub use metadata::extract_from_metadata;
pub use prompts::{format_email_lookup_prompt, EMAIL_LOOKUP_PROMPT};
pub use rank::{deduplicate_candidates, MAX_RESULTS};
pub use text::extract_from_text;
pub use validate::{
    calculate_priority, clean_extracted_email, email_context, is_valid_email, normalize_email,
};

/// The email-candidate extraction engine.
///
/// Runs every deterministic scanner over the supplied page data, ranks
/// and dedups, and escalates to the model client only when the result
/// set is fully empty — never merely because confidence is low.
pub struct EmailExtractor<M> {
    model: M,
}

impl<M: ModelClient> EmailExtractor<M> {
    /// Create an extractor around a model client.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Extract ranked email candidates for a captured page.
    ///
    /// Never fails: scanner and model errors are absorbed, and an empty
    /// list means "no confident candidate found".
    pub async fn extract_emails(&self, page_data: &PageData) -> Vec<EmailCandidate> {
        self.extract_emails_with_documents(page_data, &[]).await
    }

    /// Like [`extract_emails`](Self::extract_emails), with pre-extracted
    /// document texts (PDF/DOCX bodies) as additional opaque inputs.
    pub async fn extract_emails_with_documents(
        &self,
        page_data: &PageData,
        doc_texts: &[String],
    ) -> Vec<EmailCandidate> {
        let mut pool = Vec::new();

        debug!(url = %page_data.current_page.url, "scanning current page");
        pool.extend(extract_from_dom(&page_data.current_page.html));
        pool.extend(extract_from_text(&page_data.current_page.text));
        pool.extend(extract_from_metadata(&page_data.current_page.html));

        if page_data.has_homepage_content() {
            debug!(url = %page_data.homepage.url, "scanning homepage");
            pool.extend(extract_from_text(&page_data.homepage.text));
            pool.extend(extract_from_dom(&page_data.homepage.html));
        }

        for text in doc_texts {
            pool.extend(extract_from_text(text));
        }

        let ranked = deduplicate_candidates(pool);
        if !ranked.is_empty() {
            // Deterministic hits win even at priority 1
            info!(
                count = ranked.len(),
                top_priority = ranked[0].priority,
                "deterministic candidates found, skipping model fallback"
            );
            return ranked;
        }

        info!("no deterministic candidates, escalating to model fallback");
        let model_candidates = self.extract_with_model(page_data, doc_texts).await;
        deduplicate_candidates(model_candidates)
    }

    /// The fallback path: one prompt, one reply, parsed defensively.
    async fn extract_with_model(
        &self,
        page_data: &PageData,
        doc_texts: &[String],
    ) -> Vec<EmailCandidate> {
        let prompt = format_email_lookup_prompt(page_data, doc_texts);

        let raw = match self.model.send_prompt(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "model fallback failed, treating as zero candidates");
                return Vec::new();
            }
        };

        candidates_from_reply(parse_model_reply(&raw), &raw)
    }
}
