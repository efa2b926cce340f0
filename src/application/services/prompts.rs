use crate::domain::{ContentKind, ModificationTag, TagCatalog};

/// Connectivity check sent by the test endpoint.
pub const ACK_PROMPT: &str = "Reply with just 'ack' to confirm you received this message.";

const QUESTION_EXTRACTION_TEMPLATE: &str = r#"You are analysing a document that was converted to text. Extract every question in it together with its precursor.

A precursor is the passage, story, table, figure description or other context that a question directly depends on and that appears before it. Questions that stand on their own have no precursor.

Rules:
- Group questions that share the same precursor into one entry, in document order.
- Copy the precursor and the question text exactly as written. Keep answer options (A, B, C...) with their question.
- Ignore everything that is not a question or a precursor: titles, headers, footers, page numbers, general instructions, answer keys and mark schemes.
- Use null for the precursor of standalone questions.

Respond with ONLY a JSON array, no explanations and no surrounding prose, in exactly this shape:
[
  {"precursor": "context text or null", "questions": ["first question", "second question"]}
]

Document:
{document}"#;

/// Instruction asking the model to extract and group questions from `document_text`.
pub fn question_extraction_prompt(document_text: &str) -> String {
    QUESTION_EXTRACTION_TEMPLATE.replace("{document}", document_text)
}

/// What to do with a modification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModificationRequest {
    /// No tags selected: the text is returned as is and no model call is made.
    Unchanged(String),
    Prompt(String),
}

pub fn build_modification_request(
    original_text: &str,
    tag_ids: &[String],
    catalog: &TagCatalog,
    kind: ContentKind,
) -> ModificationRequest {
    if tag_ids.is_empty() {
        return ModificationRequest::Unchanged(original_text.to_string());
    }

    let tags = catalog.resolve(tag_ids);
    ModificationRequest::Prompt(modification_prompt(original_text, &tags, kind))
}

fn modification_prompt(original_text: &str, tags: &[&ModificationTag], kind: ContentKind) -> String {
    let tag_instructions = tags
        .iter()
        .map(|tag| {
            format!(
                "- {}: {}\n  Purpose: {}",
                tag.name, tag.description, tag.purpose
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let label = kind.as_str();
    let title = capitalize(label);

    format!(
        "Modify the following {label} according to these tags:\n\n\
         {tag_instructions}\n\n\
         Original {title}:\n\
         {original_text}\n\n\
         Important: {note}\n\
         Return ONLY the modified text, nothing else.",
        note = kind.preserve_note(),
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
