//! Page types - captured snapshots and the engine's unit of work.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel the capture layer writes into `homepage.text` when the
/// homepage fetch failed. Distinct from the all-empty "current page is
/// the homepage" state, but both mean "nothing to scan."
pub const HOMEPAGE_FETCH_FAILED: &str = "Homepage could not be fetched";

/// A captured page, immutable once built.
///
/// `html` may be empty — a page extracted from a PDF has no DOM, only text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// URL the snapshot was taken from
    pub url: String,

    /// Rendered text content
    pub text: String,

    /// Raw HTML, empty when the source had no DOM
    pub html: String,

    /// Page title if the capture layer had one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// When the snapshot was captured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,
}

impl PageSnapshot {
    /// Create a snapshot from captured content.
    pub fn new(url: impl Into<String>, text: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
            html: html.into(),
            title: None,
            captured_at: None,
        }
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the capture timestamp.
    pub fn with_captured_at(mut self, captured_at: DateTime<Utc>) -> Self {
        self.captured_at = Some(captured_at);
        self
    }

    /// True when there is neither text nor markup to scan.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.html.is_empty()
    }
}

/// The engine's unit of work: the active page plus an opportunistic
/// homepage snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageData {
    /// The page the user is looking at
    pub current_page: PageSnapshot,

    /// The site homepage; all-empty when the current page *is* the
    /// homepage, or carrying [`HOMEPAGE_FETCH_FAILED`] when the fetch
    /// failed
    pub homepage: PageSnapshot,
}

impl PageData {
    /// Create page data with no homepage content.
    pub fn new(current_page: PageSnapshot) -> Self {
        Self {
            current_page,
            homepage: PageSnapshot::default(),
        }
    }

    /// Attach a homepage snapshot.
    pub fn with_homepage(mut self, homepage: PageSnapshot) -> Self {
        self.homepage = homepage;
        self
    }

    /// Whether the homepage snapshot has anything worth scanning.
    ///
    /// Empty text and the fetch-failure sentinel are both "no."
    pub fn has_homepage_content(&self) -> bool {
        !self.homepage.text.is_empty() && self.homepage.text != HOMEPAGE_FETCH_FAILED
    }
}
