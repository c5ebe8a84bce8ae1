//! Local category suggestions derived from a draft's department, type,
//! amount and notes. Used when the remote predictor returns nothing.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::DraftTransaction;

/// Fallback categories, in padding order.
pub const CANONICAL_CATEGORIES: [&str; 8] = [
    "Technology",
    "Human Resources",
    "Marketing & Advertising",
    "Office Supplies",
    "Travel & Expenses",
    "Revenue",
    "Major Expense",
    "General",
];

pub const LOCAL_SUGGESTION_COUNT: usize = 3;

const MAJOR_EXPENSE_THRESHOLD: f64 = 1000.0;

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("numeric prefix pattern is valid")
});

/// Parse the longest numeric prefix of `raw`, ignoring leading whitespace.
///
/// Returns NaN when nothing parses, so every ordered comparison against the
/// result is false: `"abc"` is never a major expense, and `"1500 INR"` is.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let Some(m) = NUMERIC_PREFIX.find(trimmed) else {
        return f64::NAN;
    };
    let literal = m.as_str();
    match literal.trim_start_matches(['+', '-']) {
        "Infinity" if literal.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => literal.parse().unwrap_or(f64::NAN),
    }
}

/// Rule A: category implied by the owning department.
pub fn department_rule(department: &str) -> &'static str {
    match department {
        "it" => "Technology",
        "hr" => "Human Resources",
        "marketing" => "Marketing & Advertising",
        "finance" => "Office Supplies",
        _ => "General",
    }
}

/// Rule B: category implied by transaction type and size.
pub fn type_rule(transaction_type: &str, amount: &str) -> &'static str {
    if transaction_type == "expense" && parse_amount(amount) > MAJOR_EXPENSE_THRESHOLD {
        "Major Expense"
    } else if transaction_type == "income" {
        "Revenue"
    } else if transaction_type == "expense" {
        "Travel & Expenses"
    } else {
        "Office Supplies"
    }
}

/// Rule C: category implied by keywords in the notes.
pub fn notes_rule(notes: &str) -> &'static str {
    let notes = notes.to_lowercase();
    if notes.contains("travel") || notes.contains("trip") {
        "Travel & Expenses"
    } else if notes.contains("software") || notes.contains("hardware") {
        "Technology"
    } else {
        "General"
    }
}

/// Keep the first occurrence of each candidate, then pad from `fallback`
/// in order until there are `n` entries. Stops early if `fallback` has
/// nothing left to offer.
pub fn fill_unique<'a, C, F>(candidates: C, fallback: F, n: usize) -> Vec<String>
where
    C: IntoIterator<Item = &'a str>,
    F: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out: Vec<String> = Vec::with_capacity(n);

    for candidate in candidates.into_iter().chain(fallback) {
        if out.len() >= n {
            break;
        }
        if seen.insert(candidate) {
            out.push(candidate.to_string());
        }
    }
    out
}

/// Three distinct suggestions for a draft, rule-derived first.
pub fn suggest(draft: &DraftTransaction) -> Vec<String> {
    let rules = [
        department_rule(&draft.department),
        type_rule(&draft.transaction_type, &draft.amount),
        notes_rule(&draft.notes),
    ];
    fill_unique(rules, CANONICAL_CATEGORIES, LOCAL_SUGGESTION_COUNT)
}
