// FAQ domain models - knowledge entries, match outcomes and replies.
//
// These are pure domain types with no Discord dependencies.

use serde::{Deserialize, Serialize};

/// Fallback replies used when nothing in the knowledge base matches.
pub const DEFAULT_FALLBACK_RESPONSES: [&str; 3] = [
    "I'm not sure I understand. Could you please rephrase your question?",
    "I don't have specific information about that. Could you try asking something else?",
    "I'm still learning. Could you try asking about a different topic?",
];

/// Maximum number of autocomplete suggestions shown to the user.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// An entry as it appears in the knowledge-base dataset, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub keywords: Vec<String>,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
impl RawEntry {
    pub fn new(keywords: &[&str], question: &str, answer: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            question: question.to_string(),
            answer: answer.to_string(),
            category: None,
        }
    }

    /// Set the grouping category.
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

/// One validated FAQ unit.
///
/// Only `KnowledgeStore` builds these, so every entry it hands out has at
/// least one non-empty, lowercased keyword and a non-blank answer.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeEntry {
    keywords: Vec<String>,
    question: String,
    answer: String,
    category: Option<String>,
}

impl KnowledgeEntry {
    pub(crate) fn new(
        keywords: Vec<String>,
        question: String,
        answer: String,
        category: Option<String>,
    ) -> Self {
        Self {
            keywords,
            question,
            answer,
            category,
        }
    }

    /// Trigger keywords, lowercased.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Display label, never used for matching.
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Result of matching free text against the knowledge store.
///
/// `Matched` borrows the winning entry straight out of the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchOutcome<'a> {
    Matched {
        entry: &'a KnowledgeEntry,
        score: usize,
    },
    NoMatch,
}

impl<'a> MatchOutcome<'a> {
    /// The winning entry, if any.
    pub fn entry(&self) -> Option<&'a KnowledgeEntry> {
        match self {
            MatchOutcome::Matched { entry, .. } => Some(entry),
            MatchOutcome::NoMatch => None,
        }
    }

    /// Score of the winner; zero for no-match.
    pub fn score(&self) -> usize {
        match self {
            MatchOutcome::Matched { score, .. } => *score,
            MatchOutcome::NoMatch => 0,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }
}

/// What the bot should say back to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum FaqReply {
    /// A knowledge-base answer.
    Answer {
        question: String,
        answer: String,
        score: usize,
    },
    /// Generic response when nothing matched.
    Fallback { text: String },
}

impl FaqReply {
    /// The text shown to the user.
    pub fn text(&self) -> &str {
        match self {
            FaqReply::Answer { answer, .. } => answer,
            FaqReply::Fallback { text } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FaqReply::Fallback { .. })
    }
}

/// Tunables for the FAQ service.
#[derive(Debug, Clone)]
pub struct FaqConfig {
    /// How many questions autocomplete offers at most.
    pub suggestion_limit: usize,
    /// Replies picked at random on no-match.
    pub fallback_responses: Vec<String>,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            fallback_responses: DEFAULT_FALLBACK_RESPONSES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_entry_category_is_optional() {
        let json = r#"{"keywords": ["hi"], "question": "Greeting", "answer": "Hello!"}"#;
        let entry: RawEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry, RawEntry::new(&["hi"], "Greeting", "Hello!"));
        assert_eq!(entry.category, None);
    }

    #[test]
    fn test_match_outcome_accessors() {
        let entry = KnowledgeEntry::new(
            vec!["hi".to_string()],
            "Greeting".to_string(),
            "Hello!".to_string(),
            None,
        );
        let matched = MatchOutcome::Matched {
            entry: &entry,
            score: 2,
        };
        assert!(matched.is_match());
        assert_eq!(matched.score(), 2);
        assert_eq!(matched.entry().map(|e| e.answer()), Some("Hello!"));

        assert!(!MatchOutcome::NoMatch.is_match());
        assert_eq!(MatchOutcome::NoMatch.score(), 0);
        assert!(MatchOutcome::NoMatch.entry().is_none());
    }

    #[test]
    fn test_reply_text() {
        let answer = FaqReply::Answer {
            question: "Greeting".to_string(),
            answer: "Hello!".to_string(),
            score: 1,
        };
        assert_eq!(answer.text(), "Hello!");
        assert!(!answer.is_fallback());

        let fallback = FaqReply::Fallback {
            text: "Say again?".to_string(),
        };
        assert_eq!(fallback.text(), "Say again?");
        assert!(fallback.is_fallback());
    }

    #[test]
    fn test_default_config() {
        let config = FaqConfig::default();
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.fallback_responses.len(), 3);
    }
}
