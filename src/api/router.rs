use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;
use crate::application::TransactionService;

#[derive(Clone)]
pub struct AppState {
    pub service: TransactionService,
}

pub fn create_router(service: TransactionService) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/transaction-types", get(handlers::get_transaction_types))
        .route("/transactions", post(handlers::create_transaction))
        .route("/transactions/{user_id}", get(handlers::get_user_transactions))
        .route("/amount/{user_id}", get(handlers::get_user_balance))
        .with_state(state)
}
