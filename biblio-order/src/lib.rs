pub mod models;

pub use models::{Transaction, TransactionError, TransactionKind, TransactionStatus};
