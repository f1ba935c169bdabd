// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::net::SocketAddr;

use anyhow::Result;
use tokio::net::TcpListener;
use txledger::api::create_router;
use txledger::application::{NewTransaction, TransactionService};
use txledger::domain::Transaction;

/// Helper to create a test service over an empty store
pub fn test_service() -> TransactionService {
    TransactionService::in_memory()
}

/// Record a deposit of `amount` (currency units) for `user_id`
pub async fn deposit(service: &TransactionService, user_id: &str, amount: f64) -> Result<Transaction> {
    Ok(service
        .create_transaction(NewTransaction::new("deposit", amount, user_id))
        .await?)
}

/// Record a debit of `amount` (currency units) for `user_id`
pub async fn debit(service: &TransactionService, user_id: &str, amount: f64) -> Result<Transaction> {
    Ok(service
        .create_transaction(NewTransaction::new("debit", amount, user_id))
        .await?)
}

/// Start the HTTP server on an ephemeral local port and return its base URL
pub async fn spawn_server(service: TransactionService) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let app = create_router(service);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok(format!("http://{}", addr))
}
