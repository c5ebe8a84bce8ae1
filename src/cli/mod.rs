pub mod dashboard;
pub mod init;
pub mod reconcile;
pub mod request;
pub mod suggest;
pub mod transactions;

use std::io::Read;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::models::{DraftTransaction, PredictionResponse, PredictorPayload, Transaction};

#[derive(Parser)]
#[command(
    name = "fintrack",
    about = "Category suggestions and ledger summaries for a finance tracker."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest categories for a draft transaction.
    Suggest {
        #[command(flatten)]
        draft: DraftArgs,
        /// Predictor response JSON to reconcile ('-' for stdin)
        #[arg(long)]
        predictions: Option<String>,
        /// Pick the Nth suggestion (1-based) and print the updated draft
        #[arg(long)]
        select: Option<usize>,
        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },
    /// Collapse a predictor response to one match per category.
    Reconcile {
        /// Predictor response JSON ('-' for stdin)
        file: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print a request body for the ledger API.
    Request {
        #[command(flatten)]
        draft: DraftArgs,
        /// Build the create-transaction body instead of the prediction body
        #[arg(long)]
        create: bool,
    },
    /// Balance, income and expense totals plus recent activity.
    Dashboard {
        /// Transaction list JSON ('-' for stdin)
        file: String,
    },
    /// Transaction history table.
    Transactions {
        /// Transaction list JSON ('-' for stdin)
        file: String,
    },
    /// Write the settings file.
    Init {
        /// Currency symbol for amounts (default: ₹)
        #[arg(long)]
        currency: Option<String>,
        /// Number of recent transactions on the dashboard
        #[arg(long)]
        recent: Option<usize>,
        /// Base URL of the ledger API
        #[arg(long = "api-url")]
        api_url: Option<String>,
    },
    /// Generate a shell completion script.
    Completions {
        shell: clap_complete::Shell,
    },
}

/// Draft transaction fields as entered on the form.
#[derive(Args, Debug, Clone, Default)]
pub struct DraftArgs {
    /// Department: finance, hr, it, marketing, operations, sales
    #[arg(long, default_value = "")]
    pub department: String,
    /// Transaction type, e.g. expense, income, Debit, Credit
    #[arg(long = "type", default_value = "")]
    pub transaction_type: String,
    /// Amount as typed; need not be numeric
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub amount: String,
    /// Free-text notes
    #[arg(long, default_value = "")]
    pub notes: String,
    /// Category already chosen, if any
    #[arg(long, default_value = "")]
    pub category: String,
}

impl From<DraftArgs> for DraftTransaction {
    fn from(args: DraftArgs) -> Self {
        DraftTransaction {
            notes: args.notes,
            amount: args.amount,
            department: args.department,
            transaction_type: args.transaction_type,
            category: args.category,
        }
    }
}

/// Read a file, or stdin when `path` is `-`.
pub(crate) fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

pub(crate) fn load_prediction(path: &str) -> Result<PredictionResponse> {
    let payload: PredictorPayload = serde_json::from_str(&read_input(path)?)?;
    Ok(payload.into())
}

pub(crate) fn load_transactions(path: &str) -> Result<Vec<Transaction>> {
    let txns: Vec<Transaction> = serde_json::from_str(&read_input(path)?)?;
    tracing::debug!(count = txns.len(), "loaded transactions from {path}");
    Ok(txns)
}
