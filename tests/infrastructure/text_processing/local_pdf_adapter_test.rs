use std::path::Path;

use docquest::application::ports::{DocumentExtractor, ExtractorError};
use docquest::domain::{Document, DocumentKind, OutputFormat};
use docquest::infrastructure::text_processing::LocalPdfAdapter;

#[tokio::test]
async fn given_docx_document_when_extracting_then_rejected_before_reading() {
    let adapter = LocalPdfAdapter::new();
    let document = Document::new("quiz.docx".to_string(), DocumentKind::Docx, 10);

    let result = adapter
        .extract(Path::new("/nonexistent/quiz.docx"), &document, OutputFormat::Markdown)
        .await;

    assert!(matches!(result, Err(ExtractorError::UnsupportedDocument(_))));
}

#[tokio::test]
async fn given_bytes_that_are_not_a_pdf_when_extracting_then_extraction_fails() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"plain text, no pdf header").unwrap();
    let adapter = LocalPdfAdapter::new();
    let document = Document::new("quiz.pdf".to_string(), DocumentKind::Pdf, 25);

    let result = adapter
        .extract(file.path(), &document, OutputFormat::Text)
        .await;

    match result {
        Err(ExtractorError::ExtractionFailed(message)) => {
            assert!(message.contains("failed to parse PDF"));
        }
        other => panic!("expected ExtractionFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn given_missing_pdf_file_when_extracting_then_io_error() {
    let adapter = LocalPdfAdapter::new();
    let document = Document::new("gone.pdf".to_string(), DocumentKind::Pdf, 1);

    let result = adapter
        .extract(Path::new("/nonexistent/gone.pdf"), &document, OutputFormat::Markdown)
        .await;

    assert!(matches!(result, Err(ExtractorError::Io(_))));
}
