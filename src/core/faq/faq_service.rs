// FAQ service - the entry point the chat surface talks to.
//
// Wraps the knowledge store and matcher, and decides what to say when
// nothing matches. NO Discord dependencies here.

use super::faq_models::{FaqConfig, FaqReply, MatchOutcome, DEFAULT_FALLBACK_RESPONSES};
use super::knowledge_store::KnowledgeStore;
use super::matcher;
use rand::seq::SliceRandom;

/// Group label for entries without a category.
pub const UNCATEGORIZED: &str = "General";

pub struct FaqService {
    store: KnowledgeStore,
    config: FaqConfig,
}

impl FaqService {
    pub fn new_with_config(store: KnowledgeStore, config: FaqConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Best entry for the input, or no-match.
    pub fn match_input(&self, input: &str) -> MatchOutcome<'_> {
        matcher::find_best_match(input, &self.store)
    }

    /// Autocomplete suggestions using the configured limit.
    pub fn suggest(&self, partial_input: &str) -> Vec<String> {
        self.suggest_with_limit(partial_input, self.config.suggestion_limit)
    }

    pub fn suggest_with_limit(&self, partial_input: &str, limit: usize) -> Vec<String> {
        self.store.suggest_questions(partial_input, limit)
    }

    /// Answer the input, or pick a fallback response when nothing matches.
    pub fn reply(&self, input: &str) -> FaqReply {
        let outcome = self.match_input(input);
        tracing::debug!(
            matched = outcome.is_match(),
            score = outcome.score(),
            "FAQ lookup"
        );

        match outcome.entry() {
            Some(entry) => FaqReply::Answer {
                question: entry.question().to_string(),
                answer: entry.answer().to_string(),
                score: outcome.score(),
            },
            None => FaqReply::Fallback {
                text: self.pick_fallback().to_string(),
            },
        }
    }

    fn pick_fallback(&self) -> &str {
        self.config
            .fallback_responses
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(DEFAULT_FALLBACK_RESPONSES[0])
    }

    /// Introductory message naming the topics the bot can help with.
    pub fn greeting(&self) -> String {
        let categories = self.store.categories();
        if categories.is_empty() {
            return "Hello! I'm your AI assistant. What would you like to know?".to_string();
        }

        format!(
            "Hello! I'm your AI assistant. I can help you with {}. What would you like to know?",
            categories.join(", ")
        )
    }

    /// Question labels grouped by category, both in store order.
    pub fn topics(&self) -> Vec<(String, Vec<String>)> {
        let mut groups: Vec<(String, Vec<String>)> = Vec::new();

        for entry in self.store.all_entries() {
            let category = entry.category().unwrap_or(UNCATEGORIZED);
            let position = match groups.iter().position(|(name, _)| name == category) {
                Some(position) => position,
                None => {
                    groups.push((category.to_string(), Vec::new()));
                    groups.len() - 1
                }
            };

            let questions = &mut groups[position].1;
            if !questions.iter().any(|q| q == entry.question()) {
                questions.push(entry.question().to_string());
            }
        }

        groups
    }
}
