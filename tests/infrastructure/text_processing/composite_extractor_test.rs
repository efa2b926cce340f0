use std::path::Path;
use std::sync::Arc;

use docquest::application::ports::{DocumentExtractor, ExtractorError};
use docquest::domain::{Document, DocumentKind, ExtractedContent, OutputFormat};
use docquest::infrastructure::text_processing::CompositeExtractor;

use crate::common::StubExtractor;

#[tokio::test]
async fn given_registered_kind_when_extracting_then_routes_to_its_adapter() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"%PDF-1.4").unwrap();
    let pdf = Arc::new(StubExtractor::new("# From PDF route"));
    let composite = CompositeExtractor::new(vec![(
        DocumentKind::Pdf,
        pdf.clone() as Arc<dyn DocumentExtractor>,
    )]);
    let document = Document::new("quiz.pdf".to_string(), DocumentKind::Pdf, 8);

    let result = composite
        .extract(file.path(), &document, OutputFormat::Markdown)
        .await
        .unwrap();

    assert_eq!(pdf.call_count(), 1);
    assert_eq!(pdf.last_path().as_deref(), Some(file.path()));
    assert!(matches!(result.content, ExtractedContent::Text(ref t) if t == "# From PDF route"));
}

#[tokio::test]
async fn given_kinds_with_separate_adapters_when_extracting_then_only_matching_adapter_runs() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"docx bytes").unwrap();
    let pdf = Arc::new(StubExtractor::new("pdf"));
    let docx = Arc::new(StubExtractor::new("docx"));
    let composite = CompositeExtractor::new(vec![
        (DocumentKind::Pdf, pdf.clone() as Arc<dyn DocumentExtractor>),
        (DocumentKind::Docx, docx.clone() as Arc<dyn DocumentExtractor>),
    ]);
    let document = Document::new("quiz.docx".to_string(), DocumentKind::Docx, 10);

    composite
        .extract(file.path(), &document, OutputFormat::Text)
        .await
        .unwrap();

    assert_eq!(pdf.call_count(), 0);
    assert_eq!(docx.call_count(), 1);
}

#[tokio::test]
async fn given_kind_without_adapter_when_extracting_then_unsupported_document() {
    let pdf = Arc::new(StubExtractor::new("pdf"));
    let composite = CompositeExtractor::new(vec![(
        DocumentKind::Pdf,
        pdf.clone() as Arc<dyn DocumentExtractor>,
    )]);
    let document = Document::new("legacy.doc".to_string(), DocumentKind::Doc, 10);

    let result = composite
        .extract(Path::new("/nonexistent/legacy.doc"), &document, OutputFormat::Markdown)
        .await;

    assert!(matches!(result, Err(ExtractorError::UnsupportedDocument(_))));
    assert_eq!(pdf.call_count(), 0);
}
