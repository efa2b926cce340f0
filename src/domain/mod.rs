mod conversation;
mod document;
mod extraction;
mod message;
mod message_role;
mod modification_tag;
mod output_file;
mod question_group;

pub use conversation::Conversation;
pub use document::{ALLOWED_EXTENSIONS, Document, DocumentId, DocumentKind};
pub use extraction::{ExtractedContent, ExtractionMetadata, ExtractionResult, OutputFormat};
pub use message::Message;
pub use message_role::MessageRole;
pub use modification_tag::{ContentKind, ModificationTag, TagCatalog, TagCatalogError};
pub use output_file::{OutputFile, OutputFileName, OutputFileNameError};
pub use question_group::QuestionGroup;
