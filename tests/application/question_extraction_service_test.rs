use std::sync::Arc;

use docquest::application::ports::LlmClientError;
use docquest::application::services::{ErrorKind, QuestionExtractionService};
use docquest::domain::QuestionGroup;

use crate::common::RecordingLlmClient;

const BUDGET: u32 = 4096;

#[tokio::test]
async fn given_fenced_model_reply_when_extracting_then_groups_are_normalized() {
    let reply = "```json\n[\
        {\"precursor\": \"The water cycle\", \"questions\": [\"What is evaporation?\"]},\
        {\"precursor\": \"The water cycle\", \"questions\": [\"What is condensation?\"]},\
        {\"precursor\": null, \"questions\": [\"Name a planet.\"]}\
    ]\n```";
    let llm = Arc::new(RecordingLlmClient::replying(reply));
    let service = QuestionExtractionService::new(llm.clone(), BUDGET);

    let groups = service
        .extract_questions("The water cycle...\n1. What is evaporation?")
        .await
        .unwrap();

    assert_eq!(
        groups,
        vec![
            QuestionGroup::with_questions(
                Some("The water cycle"),
                ["What is evaporation?", "What is condensation?"]
            ),
            QuestionGroup::with_questions(None, ["Name a planet."]),
        ]
    );

    let call = &llm.calls()[0];
    assert_eq!(call.max_tokens, BUDGET);
    assert_eq!(call.messages.len(), 1);
    assert!(call.messages[0].content.contains("1. What is evaporation?"));
}

#[tokio::test]
async fn given_unparseable_reply_when_extracting_then_malformed_response_error() {
    let llm = Arc::new(RecordingLlmClient::replying("Sorry, I can't help with that."));
    let service = QuestionExtractionService::new(llm, BUDGET);

    let err = service.extract_questions("Some text").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn given_upstream_failure_when_extracting_then_upstream_error() {
    let llm = Arc::new(RecordingLlmClient::with_replies(
        "[]",
        vec![Err(LlmClientError::ApiRequestFailed("HTTP 500".to_string()))],
    ));
    let service = QuestionExtractionService::new(llm, BUDGET);

    let err = service.extract_questions("Some text").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream);
}

#[tokio::test]
async fn given_blank_document_when_extracting_then_validation_error_without_upstream_call() {
    let llm = Arc::new(RecordingLlmClient::replying("[]"));
    let service = QuestionExtractionService::new(llm.clone(), BUDGET);

    let err = service.extract_questions(" \n\t ").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(llm.call_count(), 0);
}
