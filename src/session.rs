use crate::error::{FintrackError, Result};
use crate::models::{DraftTransaction, PredictionResponse, SuggestionMatch};
use crate::reconciler::reconcile;
use crate::suggester::suggest;

/// Suggestions currently offered for a draft.
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestions {
    Remote(Vec<SuggestionMatch>),
    Local(Vec<String>),
}

impl Suggestions {
    pub fn categories(&self) -> Vec<&str> {
        match self {
            Suggestions::Remote(matches) => matches.iter().map(|m| m.category.as_str()).collect(),
            Suggestions::Local(names) => names.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Suggestions::Remote(_))
    }
}

/// Draft plus the suggestion chips shown next to its category field.
#[derive(Debug, Clone, Default)]
pub struct SuggestionSession {
    pub draft: DraftTransaction,
    remote: Vec<SuggestionMatch>,
    visible: bool,
}

impl SuggestionSession {
    pub fn new(draft: DraftTransaction) -> Self {
        Self {
            draft,
            remote: Vec::new(),
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed the predictor's outcome in. A failed call leaves no remote
    /// matches, which makes [`Self::suggestions`] fall back to local ones.
    pub fn apply_prediction<E: std::fmt::Display>(
        &mut self,
        outcome: std::result::Result<PredictionResponse, E>,
    ) {
        self.remote = match outcome {
            Ok(resp) => {
                let reconciled = reconcile(&resp.top_matches);
                tracing::debug!(
                    received = resp.top_matches.len(),
                    kept = reconciled.len(),
                    "reconciled predictor matches"
                );
                reconciled
            }
            Err(e) => {
                tracing::warn!("category prediction failed, using local suggestions: {e}");
                Vec::new()
            }
        };
        self.visible = true;
    }

    pub fn show_local(&mut self) {
        self.remote.clear();
        self.visible = true;
    }

    pub fn suggestions(&self) -> Suggestions {
        if self.remote.is_empty() {
            Suggestions::Local(suggest(&self.draft))
        } else {
            Suggestions::Remote(self.remote.clone())
        }
    }

    /// Write `category` into the draft and hide the suggestions.
    pub fn select(&mut self, category: &str) {
        self.draft.category = category.to_string();
        self.visible = false;
    }

    /// Select the suggestion at zero-based `index` of what is displayed.
    pub fn select_index(&mut self, index: usize) -> Result<String> {
        let shown = self.suggestions();
        let categories = shown.categories();
        let Some(category) = categories.get(index).map(|c| c.to_string()) else {
            return Err(FintrackError::NoSuchSuggestion {
                index: index + 1,
                available: categories.len(),
            });
        };
        self.select(&category);
        Ok(category)
    }
}
