use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A rewrite instruction that can be applied to a question or precursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationTag {
    pub id: String,
    pub name: String,
    pub description: String,
    pub purpose: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub conflicts: Vec<String>,
}

/// What the text being modified is; changes the preservation instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Question,
    Precursor,
}

impl ContentKind {
    pub fn from_is_precursor(is_precursor: bool) -> Self {
        if is_precursor {
            Self::Precursor
        } else {
            Self::Question
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Precursor => "precursor",
        }
    }

    pub fn preserve_note(&self) -> &'static str {
        match self {
            Self::Precursor => {
                "Keep all critical information intact. Preserve the core meaning and context."
            }
            Self::Question => "Preserve the core meaning and educational value.",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TagCatalogError {
    #[error("failed to read tag catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tag catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct CatalogFile {
    tags: HashMap<String, ModificationTag>,
}

/// Tag definitions keyed by id.
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    tags: HashMap<String, ModificationTag>,
}

impl TagCatalog {
    pub fn new(tags: impl IntoIterator<Item = ModificationTag>) -> Self {
        Self {
            tags: tags.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    /// Parses `{"tags": {"<id>": {...}}}`, the layout the front end ships.
    pub fn from_json(json: &str) -> Result<Self, TagCatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self { tags: file.tags })
    }

    pub fn load(path: &Path) -> Result<Self, TagCatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn get(&self, id: &str) -> Option<&ModificationTag> {
        self.tags.get(id)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags sorted by id for stable listings.
    pub fn all(&self) -> Vec<&ModificationTag> {
        let mut tags: Vec<_> = self.tags.values().collect();
        tags.sort_by(|a, b| a.id.cmp(&b.id));
        tags
    }

    /// Known tags among `ids`, in the order given. Unknown ids are dropped.
    pub fn resolve<'a>(&'a self, ids: &[String]) -> Vec<&'a ModificationTag> {
        ids.iter().filter_map(|id| self.tags.get(id)).collect()
    }

    /// Pairs of selected ids where either side lists the other as a conflict.
    pub fn conflicts_in(&self, ids: &[String]) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (i, first) in ids.iter().enumerate() {
            for second in &ids[i + 1..] {
                let clash = |a: &str, b: &str| {
                    self.tags
                        .get(a)
                        .is_some_and(|t| t.conflicts.iter().any(|c| c == b))
                };
                if clash(first, second) || clash(second, first) {
                    pairs.push((first.clone(), second.clone()));
                }
            }
        }
        pairs
    }
}
