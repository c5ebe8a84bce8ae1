use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::load_transactions;
use crate::error::Result;
use crate::fmt::{short_date, signed_money};
use crate::reports::{parse_timestamp, signed_amount};
use crate::settings::load_settings;

// The ledger API has no settlement state yet; every row reads as completed.
const STATUS: &str = "completed";

pub fn run(file: &str) -> Result<()> {
    let settings = load_settings();
    let txns = load_transactions(file)?;

    if txns.is_empty() {
        println!("No transactions found");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Category", "Notes", "Date", "Status", "Amount"]);
    for txn in &txns {
        let date = parse_timestamp(&txn.date)
            .map(|ts| short_date(ts.date_naive()))
            .unwrap_or_else(|| txn.date.clone());
        let amount = signed_amount(txn);
        let shown = signed_money(amount, &settings.currency_symbol);
        table.add_row(vec![
            Cell::new(txn.id),
            Cell::new(&txn.category),
            Cell::new(&txn.notes),
            Cell::new(date),
            Cell::new(STATUS),
            Cell::new(if amount < 0.0 { shown.red() } else { shown.green() }),
        ]);
    }
    println!("Recent Transactions\n{table}");
    Ok(())
}
