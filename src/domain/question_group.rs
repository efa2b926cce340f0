use serde::{Deserialize, Serialize};

/// Questions that share the same precursor (passage, story, figure caption).
///
/// `precursor` is never `Some("")`; standalone questions carry `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionGroup {
    pub precursor: Option<String>,
    pub questions: Vec<String>,
}

impl QuestionGroup {
    pub fn new(precursor: Option<String>) -> Self {
        Self {
            precursor: precursor.filter(|p| !p.is_empty()),
            questions: Vec::new(),
        }
    }

    pub fn with_questions<I, S>(precursor: Option<&str>, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut group = Self::new(precursor.map(str::to_string));
        group.questions.extend(questions.into_iter().map(Into::into));
        group
    }
}
