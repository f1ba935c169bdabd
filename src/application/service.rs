use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    cents_from_amount, format_cents, transaction_type_catalog, Transaction, TransactionType,
    TransactionTypeOption, UserBalance,
};
use crate::storage::LedgerStore;

use super::AppError;

/// Application service validating requests before they reach the ledger.
/// This is the primary interface for any client (HTTP, tests, etc.).
#[derive(Debug, Clone)]
pub struct TransactionService {
    store: Arc<LedgerStore>,
}

/// A proposed transaction, as received from a client.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Raw type value; validated against the closed type set
    pub kind: Option<String>,
    /// Amount in currency units
    pub amount: f64,
    pub user_id: String,
}

impl NewTransaction {
    pub fn new(kind: impl Into<String>, amount: f64, user_id: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            amount,
            user_id: user_id.into(),
        }
    }
}

impl TransactionService {
    /// Create a new service over the given store.
    pub fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    /// Create a service backed by a fresh, empty store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(LedgerStore::new()))
    }

    /// Validate and record a new transaction.
    ///
    /// Checks run in a fixed order (amount, user id, type), so a request that
    /// breaks several rules always reports the same one.
    pub async fn create_transaction(
        &self,
        request: NewTransaction,
    ) -> Result<Transaction, AppError> {
        let amount_cents = match cents_from_amount(request.amount) {
            Some(cents) if cents > 0 => cents,
            _ => {
                debug!(amount = request.amount, "rejected transaction: invalid amount");
                return Err(AppError::InvalidAmount);
            }
        };

        let user_id = require_user_id(&request.user_id)?;

        let kind = request
            .kind
            .as_deref()
            .and_then(TransactionType::from_str)
            .ok_or_else(|| {
                debug!(kind = ?request.kind, "rejected transaction: invalid type");
                AppError::InvalidType
            })?;

        let transaction = self.store.append(kind, amount_cents, user_id).await;
        info!(
            id = %transaction.id,
            user_id = %transaction.user_id,
            kind = %transaction.kind,
            amount = %format_cents(transaction.amount_cents),
            "recorded transaction"
        );
        Ok(transaction)
    }

    /// List a user's transactions in the order they were recorded.
    pub async fn get_user_transactions(&self, user_id: &str) -> Result<Vec<Transaction>, AppError> {
        let user_id = require_user_id(user_id)?;

        let transactions = self.store.find_by_user(user_id).await;
        if transactions.is_empty() {
            return Err(AppError::NoTransactionsFound);
        }
        Ok(transactions)
    }

    /// Compute a user's net balance.
    ///
    /// Reports `NoTransactionsFound` only when the total is zero and the user
    /// has no transactions at all; a history netting to zero yields a zero
    /// balance.
    pub async fn get_user_balance(&self, user_id: &str) -> Result<UserBalance, AppError> {
        let user_id = require_user_id(user_id)?;

        let (balance, count) = self.store.balance_with_count(user_id).await;
        if balance.total_amount == 0 && count == 0 {
            return Err(AppError::NoTransactionsFound);
        }
        Ok(balance)
    }

    /// The fixed catalog of transaction types.
    pub fn get_transaction_types(&self) -> Vec<TransactionTypeOption> {
        transaction_type_catalog()
    }

    /// Every recorded transaction, in insertion order.
    pub async fn all_transactions(&self) -> Vec<Transaction> {
        self.store.all().await
    }
}

/// Reject empty or whitespace-only user ids. The id itself is used untrimmed.
fn require_user_id(user_id: &str) -> Result<&str, AppError> {
    if user_id.trim().is_empty() {
        debug!("rejected request: missing user id");
        return Err(AppError::MissingUserId);
    }
    Ok(user_id)
}
