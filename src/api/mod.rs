// HTTP transport - routes requests into the transaction service

pub mod handlers;
pub mod router;

pub use router::{create_router, AppState};
