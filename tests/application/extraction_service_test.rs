use std::sync::Arc;

use tempfile::TempDir;

use docquest::application::services::{ErrorKind, ExtractionService};
use docquest::domain::{ExtractedContent, OutputFormat};
use docquest::infrastructure::storage::LocalOutputStore;

use crate::common::StubExtractor;

struct Fixture {
    service: ExtractionService,
    extractor: Arc<StubExtractor>,
    uploads: TempDir,
    outputs: TempDir,
}

fn fixture() -> Fixture {
    let uploads = TempDir::new().unwrap();
    let outputs = TempDir::new().unwrap();
    let extractor = Arc::new(StubExtractor::new("# Worksheet\n\n1. What is 2 + 2?"));
    let store = Arc::new(LocalOutputStore::new(outputs.path().to_path_buf()).unwrap());

    let service =
        ExtractionService::new(extractor.clone(), store, uploads.path().to_path_buf()).unwrap();

    Fixture {
        service,
        extractor,
        uploads,
        outputs,
    }
}

#[tokio::test]
async fn given_disallowed_extension_when_processing_then_rejected_before_extraction() {
    let fx = fixture();

    let err = fx
        .service
        .process_upload("notes.txt", b"plain text", OutputFormat::Markdown)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(
        err.to_string(),
        "File type not allowed. Allowed types: .pdf, .docx, .doc"
    );
    assert_eq!(fx.extractor.call_count(), 0);
}

#[tokio::test]
async fn given_empty_upload_when_processing_then_validation_error() {
    let fx = fixture();

    let err = fx
        .service
        .process_upload("worksheet.pdf", b"", OutputFormat::Markdown)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(fx.extractor.call_count(), 0);
}

#[tokio::test]
async fn given_pdf_upload_when_processing_then_output_is_saved_and_upload_is_removed() {
    let fx = fixture();

    let processed = fx
        .service
        .process_upload("Worksheet.PDF", b"%PDF-1.7 fake", OutputFormat::Markdown)
        .await
        .unwrap();

    assert_eq!(processed.original_filename, "Worksheet.PDF");
    let output_name = processed.output_filename.to_string();
    assert!(output_name.ends_with("_Worksheet_extracted.md"));
    assert_eq!(processed.result.metadata.page_count, 1);

    let saved = std::fs::read_to_string(fx.outputs.path().join(&output_name)).unwrap();
    assert_eq!(saved, "# Worksheet\n\n1. What is 2 + 2?");

    let staged = fx.extractor.last_path().unwrap();
    assert!(staged.starts_with(fx.uploads.path()));
    assert!(!staged.exists());
    assert_eq!(std::fs::read_dir(fx.uploads.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn given_json_format_when_processing_then_pretty_json_file_is_written() {
    let fx = fixture();

    let processed = fx
        .service
        .process_upload("quiz.docx", b"PK fake docx", OutputFormat::Json)
        .await
        .unwrap();

    assert!(processed.output_filename.as_str().ends_with("_quiz_extracted.json"));
    assert!(matches!(processed.result.content, ExtractedContent::Structured(_)));

    let saved = std::fs::read_to_string(
        fx.outputs.path().join(processed.output_filename.as_str()),
    )
    .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(parsed["name"], "quiz.docx");
    assert!(saved.contains('\n'));
}

#[tokio::test]
async fn given_processed_document_when_fetching_and_listing_then_output_is_available() {
    let fx = fixture();
    let processed = fx
        .service
        .process_upload("worksheet.doc", b"legacy doc", OutputFormat::Text)
        .await
        .unwrap();

    let (name, bytes) = fx
        .service
        .fetch_output(processed.output_filename.as_str())
        .await
        .unwrap();
    let listed = fx.service.list_outputs().await.unwrap();

    assert_eq!(name, processed.output_filename);
    assert_eq!(bytes, b"# Worksheet\n\n1. What is 2 + 2?");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].download_url, processed.output_filename.download_url());
}

#[tokio::test]
async fn given_traversal_name_when_fetching_then_validation_error() {
    let fx = fixture();

    let err = fx.service.fetch_output("../secret.md").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn given_unknown_name_when_fetching_then_not_found() {
    let fx = fixture();

    let err = fx.service.fetch_output("missing.md").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}
