//! Turns raw completion output into [`QuestionGroup`]s.
//!
//! Models are asked for a bare JSON array but routinely wrap it in a markdown
//! fence or split one passage across several entries. This module strips the
//! fence, parses the array and merges entries that share a precursor.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::QuestionGroup;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON array of question groups, got {0}")]
    NotAnArray(&'static str),
}

/// Returns the payload inside the first code fence, if any.
///
/// A fence labelled `json` wins over any other fence. Otherwise the first
/// generic fence is used and its language tag, if present, is dropped. Text
/// without fences is returned as is. An unterminated fence runs to the end.
pub fn strip_code_fence(text: &str) -> &str {
    if let Some(body) = json_fence_body(text) {
        return until_closing_fence(body).trim();
    }

    if let Some(start) = text.find(FENCE) {
        let body = skip_language_tag(&text[start + FENCE.len()..]);
        return until_closing_fence(body).trim();
    }

    text
}

/// Text after the first opener labelled exactly `json`. Labels such as
/// `jsonc` or `jsonl` are left to the generic fence path.
fn json_fence_body(text: &str) -> Option<&str> {
    text.match_indices(JSON_FENCE).find_map(|(start, _)| {
        let body = &text[start + JSON_FENCE.len()..];
        match body.chars().next() {
            None => Some(body),
            Some(c) if c.is_whitespace() => Some(body),
            Some(_) => None,
        }
    })
}

fn until_closing_fence(body: &str) -> &str {
    match body.find(FENCE) {
        Some(end) => &body[..end],
        None => body,
    }
}

fn skip_language_tag(after_opener: &str) -> &str {
    match after_opener.split_once('\n') {
        Some((first_line, rest)) if is_language_tag(first_line.trim()) => rest,
        _ => after_opener,
    }
}

fn is_language_tag(candidate: &str) -> bool {
    candidate
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
}

/// Parses model output and merges entries by precursor, keeping first-seen order.
///
/// A missing, `null` or empty precursor is one key: every standalone question
/// in the response lands in a single group with `precursor: None`, wherever it
/// appeared. Entries whose `questions` is not an array add nothing.
pub fn normalize_question_groups(raw: &str) -> Result<Vec<QuestionGroup>, NormalizeError> {
    let payload = strip_code_fence(raw);
    let parsed: Value = serde_json::from_str(payload)?;

    let entries = match parsed {
        Value::Array(entries) => entries,
        other => return Err(NormalizeError::NotAnArray(json_kind(&other))),
    };

    let mut groups: Vec<QuestionGroup> = Vec::new();
    let mut index_by_key: HashMap<Option<String>, usize> = HashMap::new();

    for entry in entries {
        let Value::Object(mut fields) = entry else {
            continue;
        };

        let key = match fields.remove("precursor") {
            Some(Value::String(text)) if !text.is_empty() => Some(text),
            _ => None,
        };

        let index = *index_by_key.entry(key.clone()).or_insert_with(|| {
            groups.push(QuestionGroup::new(key));
            groups.len() - 1
        });

        if let Some(Value::Array(questions)) = fields.remove("questions") {
            groups[index]
                .questions
                .extend(questions.into_iter().filter_map(question_text));
        }
    }

    Ok(groups)
}

fn question_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
