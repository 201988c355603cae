//! The model-fallback prompt.
//!
//! One prompt, sent once, only when every deterministic strategy came up
//! empty. It spells out the search order and the exact JSON contract so
//! the reply can be parsed by `fallback::parse_model_reply`.

use crate::types::page::PageData;

/// Prompt template for the email lookup fallback.
pub const EMAIL_LOOKUP_PROMPT: &str = r#"You have two sources:

1. Provided Page
  - URL: {current_url}
  - Text: {current_text}
  - HTML/DOM: {current_html}

2. Base Domain Homepage
  - URL: {homepage_url}
  - Text: {homepage_text}
  - HTML/DOM: {homepage_html}

And the extracted document texts:
  {documents}

Steps:
  1. Search visible text of Source 1 for developer/technical-support emails with labels like "support", "developer", "engineering", "technical", "contact", "help", "reach out".
      - If found -> stop & return those emails.
  2. If none in text, search DOM/HTML of Source 1 for emails.
      - If found -> stop & return those emails.
  3. If no emails found in Source 1, repeat steps 1-2 on Source 2 (homepage).
      - If found -> stop & return those emails.
  4. If still no emails found, search each extracted document.

  For each email found, provide in this exact JSON format:
  {
    "Result": {
      "Emails": [
        {
          "Email": "support@example.com",
          "Context": "Contact support team for help",
          "Source": "Current Page",
          "Label": "support"
        }
      ]
    }
  }

  If no relevant email found anywhere, output exactly:
  {
    "Result": {
      "Email": "No relevant email found"
    }
  }

  CRITICAL: Output ONLY valid JSON. No markdown, no explanations, no additional text.
  Start your response with { and end with }."#;

/// Fill the lookup prompt with both snapshots and any document texts.
pub fn format_email_lookup_prompt(page_data: &PageData, doc_texts: &[String]) -> String {
    EMAIL_LOOKUP_PROMPT
        .replace("{current_url}", &page_data.current_page.url)
        .replace("{current_text}", &page_data.current_page.text)
        .replace("{current_html}", &page_data.current_page.html)
        .replace("{homepage_url}", &page_data.homepage.url)
        .replace("{homepage_text}", &page_data.homepage.text)
        .replace("{homepage_html}", &page_data.homepage.html)
        .replace("{documents}", &doc_texts.join("\n\n"))
}
