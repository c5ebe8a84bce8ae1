use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::Transaction;

pub const DEFAULT_RECENT_LIMIT: usize = 3;

// ---------------------------------------------------------------------------
// Dashboard totals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_balance: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub transaction_count: usize,
}

/// Credits are income; every other type counts as an expense.
pub fn calculate_stats(transactions: &[Transaction]) -> DashboardStats {
    let mut income = 0.0;
    let mut expenses = 0.0;

    for txn in transactions {
        if txn.is_credit() {
            income += txn.amount;
        } else {
            expenses += txn.amount;
        }
    }

    DashboardStats {
        total_balance: income - expenses,
        total_income: income,
        total_expenses: expenses,
        transaction_count: transactions.len(),
    }
}

// ---------------------------------------------------------------------------
// Recent activity
// ---------------------------------------------------------------------------

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]` (taken as UTC), or a
/// bare date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Newest `limit` transactions by creation time. Rows whose timestamp
/// cannot be read sort after everything else.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut rows: Vec<&Transaction> = transactions.iter().collect();
    rows.sort_by_key(|txn| Reverse(parse_timestamp(&txn.created_at)));
    rows.truncate(limit);
    rows
}

/// Amount as shown in the history table: credits positive, the rest negative.
pub fn signed_amount(txn: &Transaction) -> f64 {
    if txn.is_credit() {
        txn.amount
    } else {
        -txn.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(id: i64, amount: f64, kind: &str, created_at: &str) -> Transaction {
        Transaction {
            id,
            date: "2025-01-15".to_string(),
            amount,
            category: "General".to_string(),
            notes: String::new(),
            type_of_transaction: kind.to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_stats_split_credit_and_rest() {
        let data = vec![
            txn(1, 5000.0, "Credit", ""),
            txn(2, 1200.0, "Debit", ""),
            txn(3, 300.0, "expense", ""),
            txn(4, 250.0, "credit", ""),
        ];
        let stats = calculate_stats(&data);
        assert_eq!(stats.total_income, 5250.0);
        assert_eq!(stats.total_expenses, 1500.0);
        assert_eq!(stats.total_balance, 3750.0);
        assert_eq!(stats.transaction_count, 4);
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(calculate_stats(&[]), DashboardStats::default());
    }

    #[test]
    fn test_recent_sorted_newest_first() {
        let data = vec![
            txn(1, 1.0, "Debit", "2025-01-01T09:00:00Z"),
            txn(2, 1.0, "Debit", "not a date"),
            txn(3, 1.0, "Debit", "2025-03-01T09:00:00"),
            txn(4, 1.0, "Debit", "2025-02-01"),
            txn(5, 1.0, "Debit", "2025-02-15T12:30:00.123+05:30"),
        ];
        let recent = recent_transactions(&data, DEFAULT_RECENT_LIMIT);
        let ids: Vec<i64> = recent.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 5, 4]);

        let all = recent_transactions(&data, 10);
        assert_eq!(all.last().map(|t| t.id), Some(2));
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(signed_amount(&txn(1, 40.0, "Credit", "")), 40.0);
        assert_eq!(signed_amount(&txn(2, 40.0, "Debit", "")), -40.0);
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2025-01-01T00:00:00Z").is_some());
        assert!(parse_timestamp("2025-01-01T00:00:00.5").is_some());
        assert!(parse_timestamp("2025-01-01").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
