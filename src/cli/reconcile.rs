use comfy_table::{Cell, Table};

use crate::cli::load_prediction;
use crate::error::Result;
use crate::reconciler::reconcile;

pub fn run(file: &str, json: bool) -> Result<()> {
    let resp = load_prediction(file)?;
    let matches = reconcile(&resp.top_matches);
    tracing::info!(
        received = resp.top_matches.len(),
        kept = matches.len(),
        "reconciled predictor response"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No matches returned; use `fintrack suggest` for local suggestions.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Category", "Score", "Sample notes", "Source txn"]);
    for (i, m) in matches.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&m.category),
            Cell::new(format!("{:.2}", m.similarity_score)),
            Cell::new(&m.sample_notes),
            Cell::new(m.transaction_id),
        ]);
    }
    if !resp.predicted_category.is_empty() {
        println!(
            "Predicted: {} ({:.0}% confidence)",
            resp.predicted_category,
            resp.confidence * 100.0
        );
    }
    println!("{table}");
    Ok(())
}
