//! End-to-end extraction tests against the scripted mock model.

use mailscout::testing::MockModel;
use mailscout::{
    CandidateSource, EmailExtractor, PageData, PageSnapshot, HOMEPAGE_FETCH_FAILED,
};

fn empty_page() -> PageData {
    PageData::new(PageSnapshot::new("https://acme.com/about", "", ""))
        .with_homepage(PageSnapshot::new("https://acme.com", HOMEPAGE_FETCH_FAILED, ""))
}

#[tokio::test]
async fn mailto_anchor_wins_at_top_priority_without_model_call() {
    let html = r#"<html><body>
        <a href="mailto:support@acme.com">Support</a>
    </body></html>"#;
    let data = PageData::new(PageSnapshot::new("https://acme.com/contact", "", html));

    let mock = MockModel::replying("should never be sent");
    let extractor = EmailExtractor::new(mock.clone());
    let found = extractor.extract_emails(&data).await;

    assert_eq!(found[0].email, "support@acme.com");
    assert_eq!(found[0].source, CandidateSource::MailtoLink);
    assert_eq!(found[0].priority, 10);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn dom_tiers_rank_below_mailto() {
    let html = r#"<html><body>
        <a href="mailto:support@acme.com">Support</a>
        <div class="contact-info">For support write sales@acme.com</div>
    </body></html>"#;
    let data = PageData::new(PageSnapshot::new("https://acme.com/contact", "", html));

    let extractor = EmailExtractor::new(MockModel::replying("unused"));
    let found = extractor.extract_emails(&data).await;

    assert_eq!(found[0].email, "support@acme.com");
    assert_eq!(found[0].priority, 10);
    let sales = found.iter().find(|c| c.email == "sales@acme.com").unwrap();
    assert_eq!(sales.priority, 8);
}

#[tokio::test]
async fn duplicate_across_strategies_keeps_highest_priority() {
    let html = r#"<html><head>
        <meta name="contact" content="alice@foo.com">
    </head><body></body></html>"#;
    let text = "You can find alice@foo.com in the roster.";
    let data = PageData::new(PageSnapshot::new("https://foo.com", text, html));

    let extractor = EmailExtractor::new(MockModel::replying("unused"));
    let found = extractor.extract_emails(&data).await;

    let alice: Vec<_> = found.iter().filter(|c| c.email == "alice@foo.com").collect();
    assert_eq!(alice.len(), 1);
    assert_eq!(alice[0].priority, 7);
    assert_eq!(alice[0].source, CandidateSource::Metadata);
}

#[tokio::test]
async fn low_priority_deterministic_hit_still_suppresses_model() {
    let text = "Routing logs mention relay@zenmail.org in the archive.";
    let data = PageData::new(PageSnapshot::new("https://zenmail.org/logs", text, ""));

    let mock = MockModel::replying("should never be sent");
    let extractor = EmailExtractor::new(mock.clone());
    let found = extractor.extract_emails(&data).await;

    assert_eq!(found[0].email, "relay@zenmail.org");
    assert_eq!(found[0].priority, 1);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn empty_page_and_refusal_reply_yield_nothing() {
    let mock = MockModel::replying("no relevant email found anywhere");
    let extractor = EmailExtractor::new(mock.clone());
    let found = extractor.extract_emails(&empty_page()).await;

    assert!(found.is_empty());
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn fenced_structured_reply_becomes_priority_three_candidate() {
    let reply = "```json\n{\"Result\":{\"Emails\":[{\"Email\":\"HELP@Biz.COM\",\"Context\":\"c\"}]}}\n```";
    let mock = MockModel::replying(reply);
    let extractor = EmailExtractor::new(mock.clone());
    let found = extractor.extract_emails(&empty_page()).await;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].email, "help@biz.com");
    assert_eq!(found[0].source, CandidateSource::AiStructured);
    assert_eq!(found[0].priority, 3);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn prose_reply_is_rescued_by_regex_scan() {
    let mock = MockModel::replying("Try writing to ops@acme.io, that should work.");
    let extractor = EmailExtractor::new(mock);
    let found = extractor.extract_emails(&empty_page()).await;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].email, "ops@acme.io");
    assert_eq!(found[0].source, CandidateSource::AiExtraction);
    assert_eq!(found[0].priority, 1);
}

#[tokio::test]
async fn model_transport_failure_is_absorbed() {
    let mock = MockModel::failing();
    let extractor = EmailExtractor::new(mock.clone());
    let found = extractor.extract_emails(&empty_page()).await;

    assert!(found.is_empty());
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn homepage_is_scanned_when_current_page_is_bare() {
    let homepage_html = r#"<a href="mailto:desk@bar.org">Front desk</a>"#;
    let data = PageData::new(PageSnapshot::new("https://bar.org/pricing", "", ""))
        .with_homepage(PageSnapshot::new("https://bar.org", "Front desk", homepage_html));

    let mock = MockModel::replying("unused");
    let extractor = EmailExtractor::new(mock.clone());
    let found = extractor.extract_emails(&data).await;

    assert_eq!(found[0].email, "desk@bar.org");
    assert_eq!(found[0].priority, 10);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn document_texts_are_scanned_as_plain_text() {
    let docs = vec!["Billing questions go to billing@barco.net per page 3.".to_string()];
    let data = PageData::new(PageSnapshot::new("https://barco.net/doc", "", ""));

    let mock = MockModel::replying("unused");
    let extractor = EmailExtractor::new(mock.clone());
    let found = extractor.extract_emails_with_documents(&data, &docs).await;

    assert_eq!(found[0].email, "billing@barco.net");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn fallback_prompt_carries_page_urls() {
    let mock = MockModel::replying("no email found");
    let extractor = EmailExtractor::new(mock.clone());
    extractor.extract_emails(&empty_page()).await;

    let prompts = mock.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("https://acme.com/about"));
}

#[tokio::test]
async fn result_set_is_capped_at_five() {
    let text = "\
        Alpha alpha@niceco.org, beta beta@niceco.org, gamma gamma@niceco.org, \
        delta delta@niceco.org, echo echo@niceco.org, zulu zulu@niceco.org.";
    let data = PageData::new(PageSnapshot::new("https://niceco.org", text, ""));

    let extractor = EmailExtractor::new(MockModel::replying("unused"));
    let found = extractor.extract_emails(&data).await;

    assert_eq!(found.len(), 5);
}
