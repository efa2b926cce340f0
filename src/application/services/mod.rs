mod chat_service;
mod extraction_service;
mod modification_service;
pub mod prompts;
mod question_extraction_service;
pub mod response_normalizer;
mod service_error;

pub use chat_service::ChatService;
pub use extraction_service::{ExtractionService, ProcessedDocument};
pub use modification_service::ModificationService;
pub use prompts::{ModificationRequest, build_modification_request, question_extraction_prompt};
pub use question_extraction_service::QuestionExtractionService;
pub use response_normalizer::{NormalizeError, normalize_question_groups, strip_code_fence};
pub use service_error::{ErrorKind, ServiceError};
