mod documents;
mod health;
mod llm;
mod questions;

pub use documents::{download_handler, extract_handler, list_files_handler};
pub use health::health_handler;
pub use llm::{
    history_handler, message_handler, modify_handler, reset_handler, tags_handler,
    test_connection_handler,
};
pub use questions::extract_questions_handler;
