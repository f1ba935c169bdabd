// Application layer - use cases and validation in front of the ledger store

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
