use std::collections::HashSet;

use crate::models::SuggestionMatch;

pub const MAX_REMOTE_SUGGESTIONS: usize = 5;

/// Collapse predictor matches to one entry per category.
///
/// Categories keep their first-seen order and are capped at
/// [`MAX_REMOTE_SUGGESTIONS`]. Each category is represented by the first
/// match that carried it, not the best-scoring one.
pub fn reconcile(matches: &[SuggestionMatch]) -> Vec<SuggestionMatch> {
    let mut seen: HashSet<&str> = HashSet::new();
    let categories: Vec<&str> = matches
        .iter()
        .map(|m| m.category.as_str())
        .filter(|c| seen.insert(*c))
        .take(MAX_REMOTE_SUGGESTIONS)
        .collect();

    categories
        .into_iter()
        .filter_map(|category| matches.iter().find(|m| m.category == category))
        .cloned()
        .collect()
}
