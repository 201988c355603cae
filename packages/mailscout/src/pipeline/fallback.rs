//! Model reply handling for the fallback path.
//!
//! The reply is untrusted text. Handling degrades in order: explicit
//! "no email found" phrases, fenced/labeled JSON in the documented shape,
//! then a plain regex scan of the raw reply. Entries are only accepted
//! when they pass the same validity predicate as every scraped match.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::patterns::EMAIL_PATTERNS;
use crate::types::candidate::{CandidateSource, EmailCandidate};

use super::validate::is_valid_email;

static LEADING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```(?:json)?\s*").expect("leading fence pattern"));
static TRAILING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*```$").expect("trailing fence pattern"));
static JSON_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^JSON:\s*").expect("label pattern"));

/// One email entry from the model's structured reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelEmailEntry {
    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Context", default)]
    pub context: Option<String>,

    #[serde(rename = "Label", default)]
    pub label: Option<String>,
}

/// A model reply after sanitization, as a tagged variant rather than
/// duck-typed field probing.
#[derive(Debug)]
pub enum ModelReply {
    /// Parsed entries from `Result.Emails` (or a singular `Result.Email`)
    Structured(Vec<ModelEmailEntry>),
    /// The model explicitly reported finding nothing
    NoneFound,
    /// The reply was not parseable as JSON
    Unparseable,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "Result", default)]
    result: Option<EnvelopeResult>,
}

#[derive(Deserialize)]
struct EnvelopeResult {
    #[serde(rename = "Emails", default)]
    emails: Option<Value>,

    #[serde(rename = "Email", default)]
    email: Option<Value>,
}

/// Strip Markdown code fencing and an optional leading `JSON:` label.
fn sanitize_reply(raw: &str) -> String {
    let trimmed = raw.trim();
    let no_lead = LEADING_FENCE.replace(trimmed, "");
    let no_tail = TRAILING_FENCE.replace(&no_lead, "");
    JSON_LABEL.replace(&no_tail, "").into_owned()
}

/// Classify a raw model reply.
pub fn parse_model_reply(raw: &str) -> ModelReply {
    let lower = raw.to_lowercase();
    if lower.contains("no relevant email found") || lower.contains("no email found") {
        return ModelReply::NoneFound;
    }

    let sanitized = sanitize_reply(raw);
    let envelope: Envelope = match serde_json::from_str(&sanitized) {
        Ok(envelope) => envelope,
        Err(e) => {
            debug!(error = %e, "model reply is not JSON");
            return ModelReply::Unparseable;
        }
    };

    let value = envelope
        .result
        .and_then(|r| r.emails.or(r.email))
        .unwrap_or(Value::Null);

    let entries = match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<ModelEmailEntry>(item).ok())
            .collect(),
        // Tolerate a single entry under the singular key
        Value::Object(_) => serde_json::from_value::<ModelEmailEntry>(value)
            .map(|entry| vec![entry])
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    ModelReply::Structured(entries)
}

/// Turn a classified reply into candidates.
///
/// Structured entries arrive at priority 3; the raw-text regex rescue
/// path at priority 1. Either way the validity predicate gates entry.
pub fn candidates_from_reply(reply: ModelReply, raw: &str) -> Vec<EmailCandidate> {
    match reply {
        ModelReply::NoneFound => Vec::new(),
        ModelReply::Structured(entries) => entries
            .into_iter()
            .filter(|entry| is_valid_email(&entry.email.to_lowercase()))
            .map(|entry| {
                EmailCandidate::new(entry.email.to_lowercase(), CandidateSource::AiStructured, 3)
                    .with_context(entry.context.unwrap_or_else(|| "Found by AI".to_string()))
                    .with_label(entry.label.unwrap_or_else(|| "Email".to_string()))
            })
            .collect(),
        ModelReply::Unparseable => {
            debug!("scanning raw model reply with the standard pattern");
            EMAIL_PATTERNS[0]
                .find_iter(raw)
                .map(|m| m.as_str().to_lowercase())
                .filter(|email| is_valid_email(email))
                .map(|email| {
                    EmailCandidate::new(email, CandidateSource::AiExtraction, 1)
                        .with_context("Found by AI in response")
                        .with_label("Email")
                })
                .collect()
        }
    }
}
