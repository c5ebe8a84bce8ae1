use crate::cli::DraftArgs;
use crate::error::Result;
use crate::models::{DraftTransaction, NewTransaction, PredictRequest};
use crate::settings::load_settings;

const PREDICT_PATH: &str = "/api/v1/transactions/predict-category";
const CREATE_PATH: &str = "/api/v1/transactions/";

pub fn run(draft: DraftArgs, create: bool) -> Result<()> {
    let draft: DraftTransaction = draft.into();
    let settings = load_settings();

    let (path, body) = if create {
        let txn = NewTransaction::from_draft(&draft, chrono::Utc::now());
        (CREATE_PATH, serde_json::to_string_pretty(&txn)?)
    } else {
        let req = PredictRequest::from_draft(&draft);
        (PREDICT_PATH, serde_json::to_string_pretty(&req)?)
    };

    // stdout carries only the JSON body.
    if !settings.api_url.is_empty() {
        eprintln!("POST {}{path}", settings.api_url.trim_end_matches('/'));
    }
    println!("{body}");
    Ok(())
}
