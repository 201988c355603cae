//! Email Candidate Extraction Engine
//!
//! Finds the best contact/support email addresses on a captured web page
//! using layered deterministic scanners, with a generative-model fallback
//! reserved for pages where every scanner comes up empty.
//!
//! # Design Philosophy
//!
//! **"Deterministic first, model last"**
//!
//! - DOM structure, text patterns, and metadata are scanned before any
//!   model is consulted
//! - The model fallback fires only on a fully empty result set, never
//!   because deterministic confidence is low
//! - Model replies are untrusted input: fenced, labelled, malformed and
//!   refusal replies are all handled without erroring
//! - Extraction never fails; an empty list means "nothing confident"
//!
//! # Usage
//!
//! ```rust,ignore
//! use mailscout::{EmailExtractor, PageData, PageSnapshot};
//! use mailscout::model::Gemini;
//!
//! let page = PageSnapshot::new("https://example.com/contact", text, html);
//! let data = PageData::new(page);
//!
//! let extractor = EmailExtractor::new(Gemini::from_env()?);
//! let candidates = extractor.extract_emails(&data).await;
//! for c in &candidates {
//!     println!("{} (priority {}, via {})", c.email, c.priority, c.source);
//! }
//! ```
//!
//! # Modules
//!
//! - [`types`] - Page snapshots and email candidates
//! - [`pipeline`] - Scanners, validation, ranking, model fallback
//! - [`patterns`] - Static regex families, selectors, and deny lists
//! - [`traits`] - The model client seam
//! - [`model`] - Reference Gemini client
//! - [`testing`] - Scripted mock model for tests

pub mod error;
pub mod model;
pub mod patterns;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractError, Result};
pub use traits::model::ModelClient;
pub use types::{
    candidate::{CandidateSource, EmailCandidate},
    page::{PageData, PageSnapshot, HOMEPAGE_FETCH_FAILED},
};

// Re-export the extractor and pipeline components
pub use pipeline::{
    EmailExtractor,
    // Scanners
    extract_from_dom, extract_from_metadata, extract_from_text,
    // Validation and scoring
    calculate_priority, clean_extracted_email, email_context, is_valid_email, normalize_email,
    // Ranking
    deduplicate_candidates, MAX_RESULTS,
    // Model fallback parsing
    candidates_from_reply, parse_model_reply, ModelEmailEntry, ModelReply,
    // Prompt assembly
    format_email_lookup_prompt, EMAIL_LOOKUP_PROMPT,
};

// Re-export the reference model client
pub use model::Gemini;

// Re-export testing utilities
pub use testing::MockModel;
