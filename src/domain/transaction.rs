use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{as_amount, Cents};

pub type TransactionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money entering the user's account
    Deposit,
    /// Money leaving the user's account (DOC/TED)
    Debit,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Deposit, TransactionType::Debit];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Debit => "debit",
        }
    }

    /// Parse the wire value. Matching is exact: "Deposit" is not a valid type.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "deposit" => Some(TransactionType::Deposit),
            "debit" => Some(TransactionType::Debit),
            _ => None,
        }
    }

    /// Display label shown to end users.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "Depósito",
            TransactionType::Debit => "DOC/TED",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the transaction type catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTypeOption {
    pub label: String,
    pub value: String,
}

impl From<TransactionType> for TransactionTypeOption {
    fn from(kind: TransactionType) -> Self {
        Self {
            label: kind.label().to_string(),
            value: kind.as_str().to_string(),
        }
    }
}

/// The fixed catalog of transaction types, in display order.
pub fn transaction_type_catalog() -> Vec<TransactionTypeOption> {
    TransactionType::ALL
        .into_iter()
        .map(TransactionTypeOption::from)
        .collect()
}

/// A transaction records a single deposit into or debit from a user's account.
/// Transactions are immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Amount in cents (always positive)
    #[serde(with = "as_amount")]
    pub amount_cents: Cents,
    pub user_id: String,
    /// When the ledger recorded this transaction
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with a fresh id.
    pub fn new(
        kind: TransactionType,
        amount_cents: Cents,
        user_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        assert!(amount_cents > 0, "Transaction amount must be positive");
        Self {
            id: Uuid::new_v4(),
            kind,
            amount_cents,
            user_id: user_id.into(),
            created_at,
        }
    }

    /// Signed effect of this transaction on the owner's balance.
    pub fn signed_amount(&self) -> Cents {
        match self.kind {
            TransactionType::Deposit => self.amount_cents,
            TransactionType::Debit => -self.amount_cents,
        }
    }
}
