use chrono::Local;
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::load_transactions;
use crate::error::Result;
use crate::fmt::{money, relative_day, signed_money};
use crate::reports::{calculate_stats, parse_timestamp, recent_transactions, signed_amount};
use crate::settings::load_settings;

pub fn run(file: &str) -> Result<()> {
    let settings = load_settings();
    let symbol = settings.currency_symbol.as_str();
    let txns = load_transactions(file)?;
    let stats = calculate_stats(&txns);

    let mut table = Table::new();
    table.set_header(vec!["Summary", "Amount"]);
    let balance = money(stats.total_balance, symbol);
    table.add_row(vec![
        Cell::new("Total Balance".bold()),
        Cell::new(if stats.total_balance < 0.0 {
            balance.red()
        } else {
            balance.green()
        }),
    ]);
    table.add_row(vec![
        Cell::new("Total Income"),
        Cell::new(money(stats.total_income, symbol)),
    ]);
    table.add_row(vec![
        Cell::new("Total Expenses"),
        Cell::new(money(stats.total_expenses, symbol)),
    ]);
    table.add_row(vec![
        Cell::new("Transactions"),
        Cell::new(stats.transaction_count),
    ]);
    println!("Dashboard\n{table}");

    let recent = recent_transactions(&txns, settings.recent_limit);
    if recent.is_empty() {
        println!("\nNo recent transactions.");
        return Ok(());
    }

    let now = Local::now();
    let mut rtable = Table::new();
    rtable.set_header(vec!["Category", "Notes", "When", "Amount"]);
    for txn in recent {
        let when = parse_timestamp(&txn.created_at)
            .map(|ts| relative_day(ts.with_timezone(&Local), now))
            .unwrap_or_else(|| "-".to_string());
        let amount = signed_amount(txn);
        let shown = signed_money(amount, symbol);
        rtable.add_row(vec![
            Cell::new(&txn.category),
            Cell::new(&txn.notes),
            Cell::new(when),
            Cell::new(if amount < 0.0 { shown.red() } else { shown.green() }),
        ]);
    }
    println!("\nRecent Transactions\n{rtable}");
    Ok(())
}
