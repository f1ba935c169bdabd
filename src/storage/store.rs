use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{compute_user_balance, Cents, Transaction, TransactionType, UserBalance};

/// In-memory, append-only store of transactions.
///
/// The store is the only owner of the records; readers get clones. Insertion
/// order is preserved and `created_at` never decreases along it.
#[derive(Debug, Default)]
pub struct LedgerStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl LedgerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new transaction. Inputs are assumed to be validated already.
    pub async fn append(
        &self,
        kind: TransactionType,
        amount_cents: Cents,
        user_id: &str,
    ) -> Transaction {
        let mut transactions = self.transactions.write().await;

        // Clamp to the previous timestamp if the wall clock stepped backwards
        let mut created_at = Utc::now();
        if let Some(last) = transactions.last() {
            created_at = created_at.max(last.created_at);
        }

        let transaction = Transaction::new(kind, amount_cents, user_id, created_at);
        transactions.push(transaction.clone());
        transaction
    }

    /// All transactions owned by `user_id`, in insertion order.
    pub async fn find_by_user(&self, user_id: &str) -> Vec<Transaction> {
        self.transactions
            .read()
            .await
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Net balance of `user_id`. Zero when the user has no transactions.
    pub async fn balance(&self, user_id: &str) -> UserBalance {
        let transactions = self.transactions.read().await;
        compute_user_balance(user_id, &transactions)
    }

    /// Net balance of `user_id` together with how many transactions it covers,
    /// both read from the same snapshot.
    pub async fn balance_with_count(&self, user_id: &str) -> (UserBalance, usize) {
        let transactions = self.transactions.read().await;
        let balance = compute_user_balance(user_id, &transactions);
        let count = transactions.iter().filter(|t| t.user_id == user_id).count();
        (balance, count)
    }

    /// Every transaction in insertion order.
    pub async fn all(&self) -> Vec<Transaction> {
        self.transactions.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.transactions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.transactions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_append_returns_stored_record() {
        let store = LedgerStore::new();
        let tx = store.append(TransactionType::Deposit, 10000, "u1").await;

        assert_eq!(tx.kind, TransactionType::Deposit);
        assert_eq!(tx.amount_cents, 10000);
        assert_eq!(tx.user_id, "u1");
        assert_eq!(store.all().await, vec![tx]);
    }

    #[tokio::test]
    async fn test_find_by_user_keeps_insertion_order() {
        let store = LedgerStore::new();
        let first = store.append(TransactionType::Deposit, 100, "u1").await;
        store.append(TransactionType::Deposit, 200, "u2").await;
        let second = store.append(TransactionType::Debit, 50, "u1").await;
        let third = store.append(TransactionType::Deposit, 300, "u1").await;

        let found = store.find_by_user("u1").await;
        assert_eq!(found, vec![first, second, third]);
        assert!(found.iter().all(|t| t.user_id == "u1"));
    }

    #[tokio::test]
    async fn test_find_by_user_unknown_is_empty() {
        let store = LedgerStore::new();
        store.append(TransactionType::Deposit, 100, "u1").await;

        assert!(store.find_by_user("ghost").await.is_empty());
        // Lookup is exact, not trimmed or case-folded
        assert!(store.find_by_user("U1").await.is_empty());
        assert!(store.find_by_user(" u1").await.is_empty());
    }

    #[tokio::test]
    async fn test_timestamps_are_non_decreasing() {
        let store = LedgerStore::new();
        for i in 1..=50 {
            store.append(TransactionType::Deposit, i, "u1").await;
        }

        let all = store.all().await;
        assert!(all.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[tokio::test]
    async fn test_balance() {
        let store = LedgerStore::new();
        store.append(TransactionType::Deposit, 10000, "u1").await;
        store.append(TransactionType::Debit, 3000, "u1").await;
        store.append(TransactionType::Deposit, 500, "u2").await;

        assert_eq!(store.balance("u1").await.total_amount, 7000);
        assert_eq!(store.balance("u2").await.total_amount, 500);
        assert_eq!(store.balance("ghost").await.total_amount, 0);
    }

    #[tokio::test]
    async fn test_balance_with_count() {
        let store = LedgerStore::new();
        store.append(TransactionType::Deposit, 5000, "u1").await;
        store.append(TransactionType::Debit, 5000, "u1").await;
        store.append(TransactionType::Deposit, 700, "u2").await;

        let (balance, count) = store.balance_with_count("u1").await;
        assert_eq!(balance.total_amount, 0);
        assert_eq!(count, 2);

        let (balance, count) = store.balance_with_count("ghost").await;
        assert_eq!(balance.user_id, "ghost");
        assert_eq!(balance.total_amount, 0);
        assert_eq!(count, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_are_not_lost() {
        let store = Arc::new(LedgerStore::new());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let user = format!("u{}", worker);
                    for _ in 0..25 {
                        store.append(TransactionType::Deposit, 100, &user).await;
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 200);
        let ids: HashSet<_> = store.all().await.into_iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 200, "Ids must be unique");
        assert_eq!(store.balance("u3").await.total_amount, 2500);
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = LedgerStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.len().await, 0);
    }
}
