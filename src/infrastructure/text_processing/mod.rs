mod composite_extractor;
mod docling_serve_adapter;
mod extractor_factory;
mod local_pdf_adapter;
mod text_sanitizer;

pub use composite_extractor::CompositeExtractor;
pub use docling_serve_adapter::{ConvertResponse, ConvertedDocument, DoclingServeAdapter};
pub use extractor_factory::{ExtractorFactory, ExtractorFactoryError};
pub use local_pdf_adapter::LocalPdfAdapter;
pub use text_sanitizer::sanitize_page_text;
