//! The engine's central output unit: a validated email plus provenance.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Which strategy produced a candidate.
///
/// Serialized as the wire tag the presentation layer shows
/// (`mailto_link`, `dom_<selector>`, `text_pattern_<n>`, `metadata`,
/// `ai_structured`, `ai_extraction`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    /// An explicit `mailto:` anchor — the strongest signal
    MailtoLink,
    /// A contact-bearing container matched by the given selector
    Dom(String),
    /// One of the three text pattern families, by index
    TextPattern(usize),
    /// A `<meta>` tag content attribute
    Metadata,
    /// Parsed from the model's structured JSON reply
    AiStructured,
    /// Regex-scanned out of an unparseable model reply
    AiExtraction,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MailtoLink => write!(f, "mailto_link"),
            Self::Dom(selector) => write!(f, "dom_{selector}"),
            Self::TextPattern(index) => write!(f, "text_pattern_{index}"),
            Self::Metadata => write!(f, "metadata"),
            Self::AiStructured => write!(f, "ai_structured"),
            Self::AiExtraction => write!(f, "ai_extraction"),
        }
    }
}

impl FromStr for CandidateSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mailto_link" => Ok(Self::MailtoLink),
            "metadata" => Ok(Self::Metadata),
            "ai_structured" => Ok(Self::AiStructured),
            "ai_extraction" => Ok(Self::AiExtraction),
            other => {
                if let Some(selector) = other.strip_prefix("dom_") {
                    Ok(Self::Dom(selector.to_string()))
                } else if let Some(index) = other.strip_prefix("text_pattern_") {
                    index
                        .parse()
                        .map(Self::TextPattern)
                        .map_err(|_| format!("bad pattern index in source tag: {other}"))
                } else {
                    Err(format!("unknown candidate source: {other}"))
                }
            }
        }
    }
}

impl Serialize for CandidateSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CandidateSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// An extracted, validated email address with supporting context.
///
/// Invariant: `email` is normalized and lower-cased, and has passed the
/// validity predicate before entering any candidate pool (mailto links
/// bypass the heuristics but are still lower-cased).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailCandidate {
    /// Normalized, lower-cased address; the dedup key
    pub email: String,

    /// Surrounding snippet for human verification
    pub context: String,

    /// Which strategy produced this candidate
    pub source: CandidateSource,

    /// Relevance score; higher = more likely correct
    pub priority: i32,

    /// Truncated markup of the originating DOM node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    /// The unmodified matched substring before cleaning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    /// Free-text category supplied by the model fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl EmailCandidate {
    /// Create a candidate with an empty context.
    pub fn new(email: impl Into<String>, source: CandidateSource, priority: i32) -> Self {
        Self {
            email: email.into(),
            context: String::new(),
            source,
            priority,
            element: None,
            raw: None,
            label: None,
        }
    }

    /// Set the context snippet.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Set the originating element markup.
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    /// Set the raw matched substring.
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// Set the model-supplied label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
