// Knowledge store - the read-only FAQ corpus.
//
// Built once at startup from a KnowledgeSource, then shared behind an Arc.
// There is no writer after construction, so readers never lock.

use super::faq_models::{KnowledgeEntry, RawEntry};
use async_trait::async_trait;
use thiserror::Error;

/// Partial input shorter than this (in characters) gets no suggestions.
pub const MIN_SUGGESTION_CHARS: usize = 3;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge base: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse knowledge base: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Entry {index} ({question:?}) has an empty answer")]
    MissingAnswer { index: usize, question: String },
}

// ============================================================================
// SOURCE TRAIT (PORT)
// ============================================================================

/// Where the static knowledge-base dataset comes from.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// Load every entry in dataset order, unvalidated.
    async fn load_entries(&self) -> Result<Vec<RawEntry>, KnowledgeError>;
}

// ============================================================================
// STORE
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct KnowledgeStore {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeStore {
    /// Load and validate the dataset from a source.
    pub async fn load<S: KnowledgeSource + ?Sized>(source: &S) -> Result<Self, KnowledgeError> {
        let raw = source.load_entries().await?;
        Self::from_raw_entries(raw)
    }

    /// Validate raw entries into a store, keeping dataset order.
    ///
    /// Empty keywords are dropped; an entry left without keywords can never
    /// match, so it is skipped with a warning. A blank answer is an error.
    pub fn from_raw_entries(raw: Vec<RawEntry>) -> Result<Self, KnowledgeError> {
        let mut entries = Vec::with_capacity(raw.len());

        for (index, entry) in raw.into_iter().enumerate() {
            if entry.answer.trim().is_empty() {
                return Err(KnowledgeError::MissingAnswer {
                    index,
                    question: entry.question,
                });
            }

            let keywords: Vec<String> = entry
                .keywords
                .iter()
                .filter(|k| !k.is_empty())
                .map(|k| k.to_lowercase())
                .collect();

            if keywords.is_empty() {
                tracing::warn!(
                    index,
                    question = %entry.question,
                    "Skipping knowledge entry without keywords"
                );
                continue;
            }

            let category = entry.category.filter(|c| !c.trim().is_empty());
            entries.push(KnowledgeEntry::new(
                keywords,
                entry.question,
                entry.answer,
                category,
            ));
        }

        Ok(Self { entries })
    }

    /// Every entry, in dataset order.
    pub fn all_entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Question labels for autocomplete.
    ///
    /// Returns up to `limit` distinct labels of entries with a keyword that
    /// contains, or is contained by, `partial_input` (case-insensitive), in
    /// store order. Input under three characters yields nothing.
    pub fn suggest_questions(&self, partial_input: &str, limit: usize) -> Vec<String> {
        if limit == 0 || partial_input.chars().count() < MIN_SUGGESTION_CHARS {
            return Vec::new();
        }

        let needle = partial_input.to_lowercase();
        let mut suggestions: Vec<String> = Vec::new();

        for entry in &self.entries {
            if suggestions.len() >= limit {
                break;
            }

            let hit = entry
                .keywords()
                .iter()
                .any(|keyword| keyword.contains(&needle) || needle.contains(keyword.as_str()));

            if hit && !suggestions.iter().any(|q| q == entry.question()) {
                suggestions.push(entry.question().to_string());
            }
        }

        suggestions
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for category in self.entries.iter().filter_map(|e| e.category()) {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }
}
