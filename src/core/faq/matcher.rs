// FAQ matcher - scores knowledge entries against free text.
//
// Scoring rules:
// - input is lowercased and split on runs of whitespace into tokens
// - a token scores 1 for an entry when any keyword equals it, is inside it,
//   or contains it
// - each token counts at most once per entry, but repeated tokens all count
// - highest score wins, ties go to the entry earliest in the store
//
// The permissive substring rule is intentional: "i" hits every keyword with
// an "i" in it, and phrase keywords like "best college" only match tokens
// that happen to be substrings of them.

use super::faq_models::{KnowledgeEntry, MatchOutcome};
use super::knowledge_store::KnowledgeStore;

/// Lowercase the input and split it on whitespace.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

fn keyword_matches(keyword: &str, token: &str) -> bool {
    keyword == token || token.contains(keyword) || keyword.contains(token)
}

/// Number of tokens that hit at least one of the entry's keywords.
pub fn score_entry<T: AsRef<str>>(tokens: &[T], entry: &KnowledgeEntry) -> usize {
    tokens
        .iter()
        .filter(|token| {
            entry
                .keywords()
                .iter()
                .any(|keyword| keyword_matches(keyword, token.as_ref()))
        })
        .count()
}

/// Pick the single best entry for `input`.
///
/// Linear scan keeping the running best; a later entry only takes over on a
/// strictly higher score, so the first entry reaching the maximum wins.
pub fn find_best_match<'a>(input: &str, store: &'a KnowledgeStore) -> MatchOutcome<'a> {
    if input.trim().is_empty() || store.is_empty() {
        return MatchOutcome::NoMatch;
    }

    let tokens = tokenize(input);
    let mut best: Option<(&'a KnowledgeEntry, usize)> = None;

    for entry in store.all_entries() {
        let score = score_entry(&tokens, entry);
        if score == 0 {
            continue;
        }

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((entry, score)),
        }
    }

    match best {
        Some((entry, score)) => MatchOutcome::Matched { entry, score },
        None => MatchOutcome::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::faq::faq_models::RawEntry;

    fn store(entries: Vec<RawEntry>) -> KnowledgeStore {
        KnowledgeStore::from_raw_entries(entries).unwrap()
    }

    fn matched_question<'a>(outcome: MatchOutcome<'a>) -> Option<&'a str> {
        outcome.entry().map(|e| e.question())
    }

    fn kmit_store() -> KnowledgeStore {
        store(vec![
            RawEntry::new(&["hello", "hey"], "Greeting", "Hello!"),
            RawEntry::new(
                &["kmit", "engineering college", "best college"],
                "About KMIT",
                "KMIT was established in 2007.",
            ),
            RawEntry::new(&["placements", "jobs"], "Placements", "Top companies recruit."),
        ])
    }

    #[test]
    fn test_tokenize_splits_on_any_whitespace() {
        assert_eq!(
            tokenize("  Hello\tWORLD\n\nagain  "),
            vec!["hello", "world", "again"]
        );
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_empty_or_whitespace_input_is_no_match() {
        let store = kmit_store();
        for input in ["", " ", "\t\n", "   \r\n  "] {
            assert_eq!(find_best_match(input, &store), MatchOutcome::NoMatch);
        }
        assert_eq!(
            find_best_match("  ", &KnowledgeStore::default()),
            MatchOutcome::NoMatch
        );
    }

    #[test]
    fn test_empty_store_is_no_match() {
        let store = KnowledgeStore::default();
        for input in ["hello", "kmit", "a", "anything at all"] {
            assert_eq!(find_best_match(input, &store), MatchOutcome::NoMatch);
        }
    }

    #[test]
    fn test_single_entry_scenario() {
        let store = store(vec![RawEntry::new(&["hi"], "Greeting", "Hello!")]);

        let outcome = find_best_match("hi", &store);
        assert_eq!(outcome.entry().map(|e| e.answer()), Some("Hello!"));
        assert_eq!(outcome.score(), 1);

        assert_eq!(find_best_match("bye", &store), MatchOutcome::NoMatch);
    }

    #[test]
    fn test_case_insensitive() {
        let store = kmit_store();
        let upper = find_best_match("HELLO", &store);
        let lower = find_best_match("hello", &store);
        assert_eq!(matched_question(upper), Some("Greeting"));
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_keyword_case_is_ignored() {
        let store = store(vec![RawEntry::new(&["KMIT"], "About KMIT", "A college.")]);
        assert_eq!(matched_question(find_best_match("kmit", &store)), Some("About KMIT"));
    }

    #[test]
    fn test_deterministic_reference() {
        let store = kmit_store();
        let first = find_best_match("tell me about kmit", &store).entry().unwrap();
        let second = find_best_match("tell me about kmit", &store).entry().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, &store.all_entries()[1]));
    }

    #[test]
    fn test_exact_token_match() {
        let store = kmit_store();
        let outcome = find_best_match("tell me about kmit please", &store);
        assert_eq!(matched_question(outcome), Some("About KMIT"));
    }

    #[test]
    fn test_token_containing_keyword_matches() {
        let store = kmit_store();
        assert_eq!(
            matched_question(find_best_match("kmits", &store)),
            Some("About KMIT")
        );
    }

    #[test]
    fn test_keyword_containing_token_matches() {
        let store = kmit_store();
        // "place" is inside "placements"
        assert_eq!(
            matched_question(find_best_match("place", &store)),
            Some("Placements")
        );
    }

    #[test]
    fn test_phrase_keyword_only_matches_substrings() {
        let store = store(vec![RawEntry::new(
            &["best college"],
            "Rankings",
            "We rank well.",
        )]);

        // The whole phrase never arrives as a single token
        assert_eq!(
            find_best_match("which is the bestcollege around", &store),
            MatchOutcome::NoMatch
        );
        assert_eq!(find_best_match("greatest", &store), MatchOutcome::NoMatch);

        // But a token that is a raw substring of the phrase still hits it
        let outcome = find_best_match("college", &store);
        assert_eq!(matched_question(outcome), Some("Rankings"));
        assert_eq!(outcome.score(), 1);
    }

    #[test]
    fn test_single_character_token_is_permissive() {
        let store = store(vec![RawEntry::new(&["kmit"], "About KMIT", "A college.")]);
        let outcome = find_best_match("i", &store);
        assert_eq!(matched_question(outcome), Some("About KMIT"));
    }

    #[test]
    fn test_tie_goes_to_earlier_entry() {
        let store = store(vec![
            RawEntry::new(&["help"], "Help", "Helping."),
            RawEntry::new(&["assist"], "Assist", "Assisting."),
        ]);
        let outcome = find_best_match("help assist", &store);
        assert_eq!(matched_question(outcome), Some("Help"));
        assert_eq!(outcome.score(), 1);

        let reversed = store_reversed();
        assert_eq!(
            matched_question(find_best_match("help assist", &reversed)),
            Some("Assist")
        );
    }

    fn store_reversed() -> KnowledgeStore {
        store(vec![
            RawEntry::new(&["assist"], "Assist", "Assisting."),
            RawEntry::new(&["help"], "Help", "Helping."),
        ])
    }

    #[test]
    fn test_tie_among_many_keeps_first_max() {
        let store = store(vec![
            RawEntry::new(&["zzz"], "Never", "No."),
            RawEntry::new(&["fees"], "Fees A", "First."),
            RawEntry::new(&["fees"], "Fees B", "Second."),
            RawEntry::new(&["fees"], "Fees C", "Third."),
        ]);
        assert_eq!(
            matched_question(find_best_match("fees", &store)),
            Some("Fees A")
        );
    }

    #[test]
    fn test_higher_score_beats_earlier_entry() {
        let store = store(vec![
            RawEntry::new(&["fees"], "Fees", "Money."),
            RawEntry::new(&["fees", "tuition"], "Tuition", "More money."),
        ]);
        let outcome = find_best_match("tuition fees", &store);
        assert_eq!(matched_question(outcome), Some("Tuition"));
        assert_eq!(outcome.score(), 2);
    }

    #[test]
    fn test_token_counts_once_per_entry() {
        let store = store(vec![RawEntry::new(
            &["fee", "fees", "feesheet"],
            "Fees",
            "Money.",
        )]);
        let entry = &store.all_entries()[0];
        assert_eq!(score_entry(&tokenize("fees"), entry), 1);
    }

    #[test]
    fn test_repeated_tokens_inflate_score() {
        let store = store(vec![
            RawEntry::new(&["admission"], "Admission", "Apply now."),
            RawEntry::new(&["help"], "Help", "Helping."),
        ]);
        let help = &store.all_entries()[1];
        assert_eq!(score_entry(&tokenize("help help help"), help), 3);

        let outcome = find_best_match("admission help help help", &store);
        assert_eq!(matched_question(outcome), Some("Help"));
        assert_eq!(outcome.score(), 3);
    }

    #[test]
    fn test_non_alphabetic_and_long_input() {
        let store = kmit_store();
        assert_eq!(find_best_match("!!! ??? 123", &store), MatchOutcome::NoMatch);

        let long_input = "zzzz ".repeat(10_000);
        assert_eq!(find_best_match(&long_input, &store), MatchOutcome::NoMatch);

        let long_match = format!("{}kmit", "zzzz ".repeat(10_000));
        assert_eq!(
            matched_question(find_best_match(&long_match, &store)),
            Some("About KMIT")
        );
    }

    #[test]
    fn test_markup_is_plain_text() {
        let store = kmit_store();
        let outcome = find_best_match("<b>jobs</b>", &store);
        assert_eq!(matched_question(outcome), Some("Placements"));
    }
}
