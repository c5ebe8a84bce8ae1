use serde::Serialize;

use crate::cli::{load_prediction, DraftArgs};
use crate::error::{FintrackError, Result};
use crate::models::SuggestionMatch;
use crate::session::{SuggestionSession, Suggestions};

#[derive(Serialize)]
struct SuggestionOutput<'a> {
    source: &'static str,
    suggestions: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matches: Option<&'a [SuggestionMatch]>,
}

pub fn run(
    draft: DraftArgs,
    predictions: Option<String>,
    select: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut session = SuggestionSession::new(draft.into());

    match predictions.as_deref() {
        Some(path) => session.apply_prediction(load_prediction(path)),
        None => session.show_local(),
    }

    if let Some(n) = select {
        let Some(index) = n.checked_sub(1) else {
            return Err(FintrackError::Other("--select counts from 1".to_string()));
        };
        let category = session.select_index(index)?;
        tracing::info!("selected category {category:?}");
        println!("{}", serde_json::to_string_pretty(&session.draft)?);
        return Ok(());
    }

    let shown = session.suggestions();
    tracing::debug!(visible = session.is_visible(), remote = shown.is_remote(), "suggestions ready");
    if json {
        let output = SuggestionOutput {
            source: source_label(&shown),
            suggestions: shown.categories(),
            matches: match &shown {
                Suggestions::Remote(m) => Some(m.as_slice()),
                Suggestions::Local(_) => None,
            },
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Suggested categories ({}):", source_label(&shown));
    match &shown {
        Suggestions::Remote(matches) => {
            for (i, m) in matches.iter().enumerate() {
                println!("  {}. {} ({:.2})", i + 1, m.category, m.similarity_score);
            }
        }
        Suggestions::Local(names) => {
            for (i, name) in names.iter().enumerate() {
                println!("  {}. {name}", i + 1);
            }
        }
    }
    Ok(())
}

fn source_label(shown: &Suggestions) -> &'static str {
    if shown.is_remote() {
        "remote"
    } else {
        "local"
    }
}
